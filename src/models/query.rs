use super::filter::FilterCriteria;
use super::sale::{SaleColumn, SaleLine};
use chrono::NaiveDate;

/// 单个条件的比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
}

impl Comparison {
    pub fn as_sql(self) -> &'static str {
        match self {
            Comparison::Eq => " = ",
            Comparison::Gte => " >= ",
            Comparison::Lte => " <= ",
        }
    }
}

/// 条件右值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Date(NaiveDate),
    Text(String),
}

/// `sales` 表上的一个筛选条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: SaleColumn,
    pub op: Comparison,
    pub value: FilterValue,
}

impl Predicate {
    /// 对单行求值，列为 NULL 时不匹配
    pub fn matches(&self, line: &SaleLine) -> bool {
        match (&self.value, self.column) {
            (FilterValue::Date(bound), SaleColumn::SaleDate) => {
                compare(&line.sale_date, self.op, bound)
            }
            (FilterValue::Text(expected), column) => match line.text(column) {
                Some(actual) => compare(actual, self.op, expected.as_str()),
                None => false,
            },
            (FilterValue::Date(_), _) => false,
        }
    }
}

fn compare<T: PartialOrd + ?Sized>(actual: &T, op: Comparison, bound: &T) -> bool {
    match op {
        Comparison::Eq => actual == bound,
        Comparison::Gte => actual >= bound,
        Comparison::Lte => actual <= bound,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: SaleColumn,
    pub ascending: bool,
}

/// `sales` 全字段查询：条件按添加顺序 AND 组合，然后排序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    predicates: Vec<Predicate>,
    order: Option<OrderBy>,
}

impl SalesQuery {
    pub fn select_all() -> Self {
        Self {
            predicates: Vec::new(),
            order: None,
        }
    }

    /// 将用户条件转换为查询
    ///
    /// 起止日期都有时才加日期范围；名称条件有值才加。
    /// 结果始终按 `invoice_no` 升序。
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut query = Self::select_all();

        if let Some((from, to)) = criteria.date_range() {
            query = query
                .filter(SaleColumn::SaleDate, Comparison::Gte, FilterValue::Date(from))
                .filter(SaleColumn::SaleDate, Comparison::Lte, FilterValue::Date(to));
        } else if criteria.has_partial_date_range() {
            tracing::debug!(
                "Ignoring partial date range from={:?} to={:?}",
                criteria.from_date,
                criteria.to_date
            );
        }

        if let Some(customer) = &criteria.customer_name {
            query = query.filter(
                SaleColumn::CustomerName,
                Comparison::Eq,
                FilterValue::Text(customer.clone()),
            );
        }

        if let Some(item) = &criteria.item_name {
            query = query.filter(
                SaleColumn::ItemName,
                Comparison::Eq,
                FilterValue::Text(item.clone()),
            );
        }

        query.order_by(SaleColumn::InvoiceNo, true)
    }

    pub fn filter(mut self, column: SaleColumn, op: Comparison, value: FilterValue) -> Self {
        self.predicates.push(Predicate { column, op, value });
        self
    }

    pub fn order_by(mut self, column: SaleColumn, ascending: bool) -> Self {
        self.order = Some(OrderBy { column, ascending });
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn order(&self) -> Option<OrderBy> {
        self.order
    }

    /// 所有条件都满足
    pub fn matches(&self, line: &SaleLine) -> bool {
        self.predicates.iter().all(|p| p.matches(line))
    }

    /// 是否有条件约束该列
    pub fn constrains(&self, column: SaleColumn) -> bool {
        self.predicates.iter().any(|p| p.column == column)
    }
}
