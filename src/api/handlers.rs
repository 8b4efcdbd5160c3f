use crate::error::ReportError;
use crate::models::{FilterCriteria, InvoiceGroups, InvoiceView, Suggestions, SEARCH_FAILED_MESSAGE};
use crate::service::{write_csv, ReportService};
use axum::{
    extract::{Json, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 查询响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub invoices: Vec<InvoiceView>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 筛选输入框的客户名和商品名候选
pub async fn suggestions(State(service): State<Arc<ReportService>>) -> Json<Suggestions> {
    Json(service.load_suggestions().await)
}

/// 按条件查询发票
pub async fn search(
    State(service): State<Arc<ReportService>>,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    let outcome = service.search(&criteria).await;

    let status = if outcome.is_failed() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    let invoices = outcome.views();
    let message = match outcome.message() {
        Some(msg) => msg.to_string(),
        None => format!("Found {} invoices", invoices.len()),
    };

    let response = SearchResponse {
        success: !outcome.is_failed(),
        message,
        invoices,
    };
    (status, Json(response)).into_response()
}

/// 按条件查询发票，导出 CSV
pub async fn search_csv(
    State(service): State<Arc<ReportService>>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Response, ReportError> {
    let outcome = service.search(&criteria).await;
    if outcome.is_failed() {
        return Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": SEARCH_FAILED_MESSAGE })),
        )
            .into_response());
    }

    let empty = InvoiceGroups::new();
    let mut body = Vec::new();
    write_csv(outcome.invoices().unwrap_or(&empty), &mut body)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"sale_items.csv\""),
        ],
        body,
    )
        .into_response())
}
