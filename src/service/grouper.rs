use crate::models::{InvoiceGroups, SaleLine};

/// 单次遍历，将明细行按发票号分组
///
/// 发票按发票号首次出现的顺序排列，发票内明细保持到达顺序；
/// 每张发票的第一行作为抬头。
pub fn group_invoices<I>(lines: I) -> InvoiceGroups
where
    I: IntoIterator<Item = SaleLine>,
{
    lines.into_iter().collect()
}
