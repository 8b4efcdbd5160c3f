//! 集成测试公共夹具

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use sale_item_report::models::{SaleColumn, SaleLine, SalesQuery, TextColumn};
use sale_item_report::{ReportError, SalesStore};
use std::sync::Mutex;

/// 测试用数据源：记录每次查询，可指定失败
#[derive(Default)]
pub struct SpyStore {
    pub rows: Vec<SaleLine>,
    pub fail_search: bool,
    pub fail_columns: Vec<TextColumn>,
    pub queries: Mutex<Vec<SalesQuery>>,
}

impl SpyStore {
    pub fn with_rows(rows: Vec<SaleLine>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_search: true,
            fail_columns: vec![TextColumn::CustomerName, TextColumn::ItemName],
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<SalesQuery> {
        self.queries.lock().unwrap().clone()
    }
}

fn store_down() -> ReportError {
    ReportError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl SalesStore for SpyStore {
    async fn fetch_lines(&self, query: &SalesQuery) -> Result<Vec<SaleLine>, ReportError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail_search {
            return Err(store_down());
        }
        // 原样返回，不做过滤
        Ok(self.rows.clone())
    }

    async fn fetch_column(&self, column: TextColumn) -> Result<Vec<Option<String>>, ReportError> {
        if self.fail_columns.contains(&column) {
            return Err(store_down());
        }
        let column = SaleColumn::from(column);
        Ok(self
            .rows
            .iter()
            .map(|line| line.text(column).map(str::to_string))
            .collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sale_line(
    id: i64,
    invoice_no: i64,
    sale_date: NaiveDate,
    customer: &str,
    item: &str,
    amount: Option<&str>,
) -> SaleLine {
    SaleLine {
        id,
        invoice_no,
        sale_date,
        customer_name: Some(customer.to_string()),
        customer_phone: Some(format!("07{:08}", invoice_no)),
        customer_address: Some(format!("{} Lake Road", invoice_no)),
        item_name: Some(item.to_string()),
        barcode: Some(format!("BC{:05}", id)),
        qty: Some(1.into()),
        sale_rate: amount.and_then(|a| a.parse().ok()),
        discount: Some(0.into()),
        amount: amount.map(str::to_string),
    }
}

/// 小店账本：两个月三张发票，行顺序故意打乱
pub fn shop_ledger() -> Vec<SaleLine> {
    vec![
        sale_line(1, 1003, date(2024, 2, 10), "Kamal", "Rice 5kg", Some("1250.00")),
        sale_line(2, 1001, date(2024, 1, 5), "Nimal", "Tea 100g", Some("100.50")),
        sale_line(3, 1001, date(2024, 1, 5), "Nimal", "Sugar 1kg", Some("49.50")),
        sale_line(4, 1002, date(2024, 1, 20), "Kamal", "Tea 100g", Some("100.50")),
        sale_line(5, 1001, date(2024, 1, 5), "Nimal", "Bag", Some("bad")),
        sale_line(6, 1003, date(2024, 2, 10), "Kamal", "Tea 100g", None),
    ]
}
