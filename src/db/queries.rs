use super::store::SalesStore;
use crate::error::ReportError;
use crate::models::{FilterValue, SaleLine, SalesQuery, TextColumn};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::future::Future;
use std::time::{Duration, Instant};

/// `amount` 按文本读取：格式错误的金额按 0 计，不会导致整行失败
const SELECT_SALE_LINES: &str = r#"
        SELECT id, invoice_no, sale_date,
               customer_name, customer_phone, customer_address,
               item_name, barcode, qty, sale_rate, discount,
               amount::text AS amount
        FROM sales"#;

/// 基于 Postgres 的销售数据源
#[derive(Clone)]
pub struct PgSalesStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgSalesStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn with_timeout<T, F>(&self, what: &str, fut: F) -> Result<T, ReportError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        let start_time = Instant::now();
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(Ok(rows)) => {
                tracing::debug!("{} finished in {:?}", what, start_time.elapsed());
                Ok(rows)
            }
            Ok(Err(e)) => {
                tracing::error!("{} failed after {:?}: {:?}", what, start_time.elapsed(), e);
                Err(e.into())
            }
            Err(_) => {
                tracing::error!("{} timed out (>{:?})", what, self.query_timeout);
                Err(ReportError::Timeout(self.query_timeout))
            }
        }
    }
}

/// 构建查询语句：条件 AND 连接，值全部绑定
pub fn build_select(query: &SalesQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_SALE_LINES);

    for (idx, predicate) in query.predicates().iter().enumerate() {
        builder.push(if idx == 0 { " WHERE " } else { " AND " });
        builder.push(predicate.column.as_sql());
        builder.push(predicate.op.as_sql());
        match &predicate.value {
            FilterValue::Date(date) => builder.push_bind(*date),
            FilterValue::Text(text) => builder.push_bind(text.clone()),
        };
    }

    if let Some(order) = query.order() {
        builder.push(" ORDER BY ");
        builder.push(order.column.as_sql());
        builder.push(if order.ascending { " ASC" } else { " DESC" });
        // 同一发票内按插入顺序
        builder.push(", id ASC");
    }

    builder
}

#[async_trait]
impl SalesStore for PgSalesStore {
    async fn fetch_lines(&self, query: &SalesQuery) -> Result<Vec<SaleLine>, ReportError> {
        let mut builder = build_select(query);
        self.with_timeout(
            "Sales search",
            builder.build_query_as::<SaleLine>().fetch_all(&self.pool),
        )
        .await
    }

    async fn fetch_column(&self, column: TextColumn) -> Result<Vec<Option<String>>, ReportError> {
        let sql = format!("SELECT {} FROM sales", column.as_sql());
        self.with_timeout(
            "Column projection",
            sqlx::query_scalar::<_, Option<String>>(&sql).fetch_all(&self.pool),
        )
        .await
    }
}
