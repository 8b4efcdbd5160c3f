use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// 用户选择的查询条件
///
/// 所有字段可选，缺省即不限制该字段。
/// 从查询串读取时，空值（`customer_name=`）视为缺省。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub item_name: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    pub fn with_customer(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = non_empty(customer_name.into());
        self
    }

    pub fn with_item(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = non_empty(item_name.into());
        self
    }

    /// 闭区间日期范围，仅当起止日期都填写时返回
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.from_date, self.to_date) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// 只填了一个日期边界
    pub fn has_partial_date_range(&self) -> bool {
        self.from_date.is_some() != self.to_date.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}
