use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

const MAX_AMOUNT_SCALE: i64 = 30;

/// 销售表 `sales` 的一行（发票的一条商品明细）
///
/// 抬头字段（`customer_*`、`sale_date`）冗余存储，同一发票的每行都重复。
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: i64,
    pub invoice_no: i64,
    pub sale_date: NaiveDate,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub item_name: Option<String>,
    pub barcode: Option<String>,
    pub qty: Option<BigDecimal>,
    pub sale_rate: Option<BigDecimal>,
    pub discount: Option<BigDecimal>, // 百分比
    /// 原始金额文本，通过 [`SaleLine::amount_value`] 读取
    pub amount: Option<String>,
}

impl SaleLine {
    /// 明细金额。缺失、非数字或指数超出范围时按 0 计
    pub fn amount_value(&self) -> BigDecimal {
        self.amount
            .as_deref()
            .and_then(|raw| BigDecimal::from_str(raw.trim()).ok())
            .filter(|value| {
                let (_, scale) = value.as_bigint_and_exponent();
                (-MAX_AMOUNT_SCALE..=MAX_AMOUNT_SCALE).contains(&scale)
            })
            .unwrap_or_else(BigDecimal::zero)
    }

    /// 文本列的值（用于等值条件）
    pub fn text(&self, column: SaleColumn) -> Option<&str> {
        match column {
            SaleColumn::CustomerName => self.customer_name.as_deref(),
            SaleColumn::ItemName => self.item_name.as_deref(),
            SaleColumn::InvoiceNo | SaleColumn::SaleDate => None,
        }
    }
}

/// `sales` 中可筛选/排序的列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleColumn {
    InvoiceNo,
    SaleDate,
    CustomerName,
    ItemName,
}

impl SaleColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            SaleColumn::InvoiceNo => "invoice_no",
            SaleColumn::SaleDate => "sale_date",
            SaleColumn::CustomerName => "customer_name",
            SaleColumn::ItemName => "item_name",
        }
    }
}

/// 可投影为自动补全候选的文本列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColumn {
    CustomerName,
    ItemName,
}

impl TextColumn {
    pub fn as_sql(self) -> &'static str {
        SaleColumn::from(self).as_sql()
    }
}

impl From<TextColumn> for SaleColumn {
    fn from(column: TextColumn) -> Self {
        match column {
            TextColumn::CustomerName => SaleColumn::CustomerName,
            TextColumn::ItemName => SaleColumn::ItemName,
        }
    }
}

/// 金额显示格式（两位小数）
pub fn format_money(value: &BigDecimal) -> String {
    value.round(2).with_scale(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with_amount(amount: Option<&str>) -> SaleLine {
        SaleLine {
            id: 1,
            invoice_no: 1,
            sale_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            customer_name: None,
            customer_phone: None,
            customer_address: None,
            item_name: None,
            barcode: None,
            qty: None,
            sale_rate: None,
            discount: None,
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn amount_value_parses_decimal() {
        let line = line_with_amount(Some("100.50"));
        assert_eq!(line.amount_value(), BigDecimal::from_str("100.5").unwrap());
    }

    #[test]
    fn amount_value_tolerates_whitespace() {
        let line = line_with_amount(Some(" 49.50 "));
        assert_eq!(line.amount_value(), BigDecimal::from_str("49.5").unwrap());
    }

    #[test]
    fn missing_or_bad_amount_is_zero() {
        for raw in [None, Some(""), Some("bad"), Some("NaN")] {
            assert_eq!(line_with_amount(raw).amount_value(), BigDecimal::zero(), "{:?}", raw);
        }
    }

    #[test]
    fn extreme_exponent_amount_is_zero() {
        for raw in ["1e-200000000", "1e-2000000", "5E+999999", "1e31"] {
            assert_eq!(line_with_amount(Some(raw)).amount_value(), BigDecimal::zero(), "{}", raw);
        }
        assert_eq!(
            line_with_amount(Some("1.5e2")).amount_value(),
            BigDecimal::from(150)
        );
    }

    #[test]
    fn text_columns_project_name_fields() {
        assert_eq!(TextColumn::CustomerName.as_sql(), "customer_name");
        assert_eq!(TextColumn::ItemName.as_sql(), "item_name");

        let mut line = line_with_amount(None);
        line.item_name = Some("Soap".to_string());
        assert_eq!(line.text(TextColumn::ItemName.into()), Some("Soap"));
        assert_eq!(line.text(TextColumn::CustomerName.into()), None);
    }

    #[test]
    fn format_money_pads_to_two_places() {
        assert_eq!(format_money(&BigDecimal::from(150)), "150.00");
        assert_eq!(format_money(&BigDecimal::from_str("5.5").unwrap()), "5.50");
        assert_eq!(format_money(&BigDecimal::from_str("0.125").unwrap()), "0.13");
    }
}
