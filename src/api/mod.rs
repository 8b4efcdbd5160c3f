pub mod handlers;

pub use handlers::*;

use crate::service::ReportService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 销售明细报表路由
pub fn router(service: Arc<ReportService>) -> Router {
    let report_routes = Router::new()
        .route("/api/sales/suggestions", get(suggestions))
        .route("/api/sales/search", get(search))
        .route("/api/sales/search.csv", get(search_csv))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(report_routes)
        .layer(ServiceBuilder::new())
}
