use crate::error::ReportError;
use crate::models::{SaleLine, SalesQuery, TextColumn};
use async_trait::async_trait;

/// `sales` 数据读取接口
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// 返回满足查询的全部明细，按查询排序
    async fn fetch_lines(&self, query: &SalesQuery) -> Result<Vec<SaleLine>, ReportError>;

    /// 逐行返回某文本列（含重复和 NULL）
    async fn fetch_column(&self, column: TextColumn) -> Result<Vec<Option<String>>, ReportError>;
}
