pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{create_pool, MemorySalesStore, PgSalesStore, SalesStore};
pub use error::ReportError;
pub use service::{ReportService, ReportSession};
