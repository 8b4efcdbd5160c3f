use super::sale::SaleLine;
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;

/// 由销售明细行还原的发票
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub invoice_no: i64,
    /// 该发票第一条明细，提供客户/日期抬头
    pub header: SaleLine,
    /// 明细行（保持到达顺序）
    pub lines: Vec<SaleLine>,
}

impl Invoice {
    pub fn new(header: SaleLine) -> Self {
        Self {
            invoice_no: header.invoice_no,
            lines: vec![header.clone()],
            header,
        }
    }

    pub fn add_line(&mut self, line: SaleLine) {
        self.lines.push(line);
    }

    /// 明细金额合计（全精度）
    pub fn total(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |sum, line| sum + line.amount_value())
    }
}

/// 按发票号分组，保持首次出现顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceGroups {
    invoices: IndexMap<i64, Invoice>,
}

impl InvoiceGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加明细；发票号首次出现时新建发票
    pub fn push(&mut self, line: SaleLine) {
        match self.invoices.get_mut(&line.invoice_no) {
            Some(invoice) => invoice.add_line(line),
            None => {
                self.invoices.insert(line.invoice_no, Invoice::new(line));
            }
        }
    }

    pub fn get(&self, invoice_no: i64) -> Option<&Invoice> {
        self.invoices.get(&invoice_no)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.values()
    }

    pub fn invoice_numbers(&self) -> Vec<i64> {
        self.invoices.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.invoices.values().map(|i| i.lines.len()).sum()
    }
}

impl FromIterator<SaleLine> for InvoiceGroups {
    fn from_iter<I: IntoIterator<Item = SaleLine>>(iter: I) -> Self {
        let mut groups = Self::new();
        for line in iter {
            groups.push(line);
        }
        groups
    }
}
