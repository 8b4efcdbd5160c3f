use crate::error::ReportError;
use crate::models::{format_money, InvoiceGroups};
use bigdecimal::BigDecimal;
use std::io::Write;

const CSV_HEADER: [&str; 13] = [
    "invoice_no",
    "sale_date",
    "customer_name",
    "customer_phone",
    "customer_address",
    "item_name",
    "barcode",
    "qty",
    "sale_rate",
    "discount",
    "amount",
    "invoice_total",
    "line_id",
];

fn opt_decimal(val: &Option<BigDecimal>) -> String {
    val.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// 导出发票到 CSV：每条明细一行，附带发票抬头和合计
pub fn write_csv<W: Write>(groups: &InvoiceGroups, writer: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for invoice in groups.iter() {
        let header = &invoice.header;
        let total = format_money(&invoice.total());

        for line in &invoice.lines {
            writer.write_record([
                invoice.invoice_no.to_string(),
                header.sale_date.to_string(),
                header.customer_name.clone().unwrap_or_default(),
                header.customer_phone.clone().unwrap_or_default(),
                header.customer_address.clone().unwrap_or_default(),
                line.item_name.clone().unwrap_or_default(),
                line.barcode.clone().unwrap_or_default(),
                opt_decimal(&line.qty),
                opt_decimal(&line.sale_rate),
                opt_decimal(&line.discount),
                format_money(&line.amount_value()),
                total.clone(),
                line.id.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
