use super::session::ReportSession;
use crate::db::SalesStore;
use crate::models::{FilterCriteria, SalesQuery, SearchOutcome, Suggestions, TextColumn};
use indexmap::IndexSet;
use std::sync::Arc;

/// 销售明细报表服务：筛选候选 + 发票查询
pub struct ReportService {
    store: Arc<dyn SalesStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// 加载去重后的客户名、商品名（自动补全用）
    ///
    /// 某列查询失败时该列表为空，不报错。
    pub async fn load_suggestions(&self) -> Suggestions {
        let (customers, items) = futures::join!(
            self.distinct_values(TextColumn::CustomerName),
            self.distinct_values(TextColumn::ItemName),
        );

        tracing::info!(
            "Loaded suggestions: {} customers, {} items",
            customers.len(),
            items.len()
        );
        Suggestions { customers, items }
    }

    async fn distinct_values(&self, column: TextColumn) -> IndexSet<String> {
        match self.store.fetch_column(column).await {
            Ok(values) => values.into_iter().flatten().collect(),
            Err(e) => {
                tracing::warn!("Loading {} suggestions failed: {}", column.as_sql(), e);
                IndexSet::new()
            }
        }
    }

    /// 执行查询并按发票分组
    ///
    /// 查询失败记录日志，返回 [`SearchOutcome::Failed`]。
    pub async fn search(&self, criteria: &FilterCriteria) -> SearchOutcome {
        let query = SalesQuery::from_criteria(criteria);
        tracing::info!("Searching sales with {} predicates", query.predicates().len());

        match self.store.fetch_lines(&query).await {
            Ok(lines) => {
                let line_count = lines.len();
                let outcome = SearchOutcome::from_lines(lines);
                tracing::info!(
                    "Search returned {} lines in {} invoices",
                    line_count,
                    outcome.invoices().map(|g| g.len()).unwrap_or(0)
                );
                outcome
            }
            Err(e) => {
                tracing::error!("Sales search failed: {}", e);
                SearchOutcome::Failed
            }
        }
    }

    /// 会话首次打开：只加载一次候选
    pub async fn open_session(&self, session: &mut ReportSession) {
        if session.suggestions().is_some() {
            return;
        }
        let suggestions = self.load_suggestions().await;
        session.install_suggestions(suggestions);
    }

    /// 用会话当前条件查询并保存结果
    pub async fn run_search<'s>(&self, session: &'s mut ReportSession) -> &'s SearchOutcome {
        let ticket = session.begin_search();
        let outcome = self.search(ticket.criteria()).await;
        session.finish_search(ticket, outcome);
        session.outcome()
    }
}
