use super::store::SalesStore;
use crate::error::ReportError;
use crate::models::{SaleColumn, SaleLine, SalesQuery, TextColumn};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::RwLock;

/// 内存数据源：在行列表上直接执行查询
#[derive(Debug, Default)]
pub struct MemorySalesStore {
    rows: RwLock<Vec<SaleLine>>,
}

impl MemorySalesStore {
    pub fn new(rows: Vec<SaleLine>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn insert(&self, line: SaleLine) {
        self.rows
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line);
    }

    fn snapshot(&self) -> Vec<SaleLine> {
        self.rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

fn compare_by(column: SaleColumn, a: &SaleLine, b: &SaleLine) -> Ordering {
    match column {
        SaleColumn::InvoiceNo => a.invoice_no.cmp(&b.invoice_no),
        SaleColumn::SaleDate => a.sale_date.cmp(&b.sale_date),
        SaleColumn::CustomerName | SaleColumn::ItemName => a.text(column).cmp(&b.text(column)),
    }
}

#[async_trait]
impl SalesStore for MemorySalesStore {
    async fn fetch_lines(&self, query: &SalesQuery) -> Result<Vec<SaleLine>, ReportError> {
        let mut lines: Vec<SaleLine> = self
            .snapshot()
            .into_iter()
            .filter(|line| query.matches(line))
            .collect();

        if let Some(order) = query.order() {
            // 稳定排序：相同键保持插入顺序
            lines.sort_by(|a, b| {
                let ord = compare_by(order.column, a, b);
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        Ok(lines)
    }

    async fn fetch_column(&self, column: TextColumn) -> Result<Vec<Option<String>>, ReportError> {
        let column = SaleColumn::from(column);
        Ok(self
            .snapshot()
            .iter()
            .map(|line| line.text(column).map(str::to_string))
            .collect())
    }
}
