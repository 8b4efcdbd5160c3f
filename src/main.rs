use sale_item_report::{api, create_pool, AppConfig, PgSalesStore, ReportService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config.server);

    let pool = create_pool(&config.database).await?;
    info!("Database pool created");

    let store = PgSalesStore::new(pool, config.database.query_timeout());
    let service = Arc::new(ReportService::new(Arc::new(store)));

    let app = api::router(service);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/sales/suggestions - customer and item names");
    info!("  GET /api/sales/search      - invoices matching the filters");
    info!("  GET /api/sales/search.csv  - same, as CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
