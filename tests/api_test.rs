//! 报表路由 HTTP 测试（通过 `oneshot` 调用 router）

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{shop_ledger, SpyStore};
use sale_item_report::api::{router, SearchResponse};
use sale_item_report::models::{SaleColumn, Suggestions};
use sale_item_report::{MemorySalesStore, ReportService};
use std::sync::Arc;
use tower::ServiceExt;

fn memory_app() -> axum::Router {
    let store = MemorySalesStore::new(shop_ledger());
    router(Arc::new(ReportService::new(Arc::new(store))))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(memory_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn suggestions_list_distinct_names() {
    let (status, body) = get(memory_app(), "/api/sales/suggestions").await;
    assert_eq!(status, StatusCode::OK);

    let suggestions: Suggestions = serde_json::from_slice(&body).unwrap();
    assert_eq!(suggestions.customers.len(), 2);
    assert!(suggestions.items.contains("Tea 100g"));
}

#[tokio::test]
async fn search_returns_invoices_with_totals() {
    let (status, body) = get(
        memory_app(),
        "/api/sales/search?from_date=2024-01-01&to_date=2024-01-31&customer_name=Nimal&item_name=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.success);
    assert_eq!(response.invoices.len(), 1);

    let invoice = &response.invoices[0];
    assert_eq!(invoice.invoice_no, 1001);
    assert_eq!(invoice.customer_name.as_deref(), Some("Nimal"));
    assert_eq!(invoice.lines.len(), 3);
    assert_eq!(invoice.lines[2].amount, "0.00");
    assert_eq!(invoice.total, "150.00");
}

#[tokio::test]
async fn search_without_matches_says_no_records() {
    let (status, body) = get(memory_app(), "/api/sales/search?customer_name=Nobody").await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.success);
    assert!(response.invoices.is_empty());
    assert_eq!(response.message, "No records found.");
}

#[tokio::test]
async fn failed_search_is_reported_distinctly() {
    let app = router(Arc::new(ReportService::new(Arc::new(SpyStore::failing()))));
    let (status, body) = get(app, "/api/sales/search").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(!response.success);
    assert!(response.invoices.is_empty());
    assert_eq!(response.message, "Search failed, try again.");
}

#[tokio::test]
async fn partial_date_range_from_query_is_ignored() {
    let store = Arc::new(SpyStore::default());
    let app = router(Arc::new(ReportService::new(store.clone())));

    let (status, _) = get(app, "/api/sales/search?from_date=2024-01-01&to_date=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!store.recorded()[0].constrains(SaleColumn::SaleDate));
}

#[tokio::test]
async fn malformed_date_is_bad_request() {
    let (status, _) = get(memory_app(), "/api/sales/search?from_date=01/02/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn csv_export_has_one_row_per_line() {
    let (status, body) = get(memory_app(), "/api/sales/search.csv?customer_name=Kamal").await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("1002,2024-01-20,Kamal"));
    assert!(rows[2].starts_with("1003,2024-02-10,Kamal"));
}
