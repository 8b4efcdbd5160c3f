use super::invoice::{Invoice, InvoiceGroups};
use super::sale::{format_money, SaleLine};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub const NO_RECORDS_MESSAGE: &str = "No records found.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed, try again.";

/// 客户、商品筛选的自动补全候选
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub customers: IndexSet<String>,
    pub items: IndexSet<String>,
}

/// 一次查询的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchOutcome {
    Found(InvoiceGroups),
    #[default]
    NoRecords,
    /// 查询失败：结果为空，并提示用户重试
    Failed,
}

impl SearchOutcome {
    pub fn from_lines(lines: Vec<SaleLine>) -> Self {
        let groups = crate::service::group_invoices(lines);
        if groups.is_empty() {
            SearchOutcome::NoRecords
        } else {
            SearchOutcome::Found(groups)
        }
    }

    pub fn invoices(&self) -> Option<&InvoiceGroups> {
        match self {
            SearchOutcome::Found(groups) => Some(groups),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SearchOutcome::Failed)
    }

    /// 给用户的提示信息；有发票时为 `None`
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Found(_) => None,
            SearchOutcome::NoRecords => Some(NO_RECORDS_MESSAGE),
            SearchOutcome::Failed => Some(SEARCH_FAILED_MESSAGE),
        }
    }

    pub fn views(&self) -> Vec<InvoiceView> {
        self.invoices()
            .map(|groups| groups.iter().map(InvoiceView::from).collect())
            .unwrap_or_default()
    }
}

/// 展示用发票：抬头、明细和格式化合计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceView {
    pub invoice_no: i64,
    pub sale_date: NaiveDate,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub lines: Vec<LineView>,
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineView {
    pub id: i64,
    pub item_name: Option<String>,
    pub barcode: Option<String>,
    pub qty: Option<BigDecimal>,
    pub sale_rate: Option<BigDecimal>,
    pub discount: Option<BigDecimal>,
    pub amount: String,
}

impl From<&SaleLine> for LineView {
    fn from(line: &SaleLine) -> Self {
        Self {
            id: line.id,
            item_name: line.item_name.clone(),
            barcode: line.barcode.clone(),
            qty: line.qty.clone(),
            sale_rate: line.sale_rate.clone(),
            discount: line.discount.clone(),
            amount: format_money(&line.amount_value()),
        }
    }
}

impl From<&Invoice> for InvoiceView {
    fn from(invoice: &Invoice) -> Self {
        let header = &invoice.header;
        Self {
            invoice_no: invoice.invoice_no,
            sale_date: header.sale_date,
            customer_name: header.customer_name.clone(),
            customer_phone: header.customer_phone.clone(),
            customer_address: header.customer_address.clone(),
            lines: invoice.lines.iter().map(LineView::from).collect(),
            total: format_money(&invoice.total()),
        }
    }
}
