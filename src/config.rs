use crate::error::ReportError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub query_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/retail".to_string(),
                max_connections: 10,
                query_timeout_secs: 30,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值 -> `report.toml`（可选）-> 环境变量
    ///
    /// 嵌套键用 `__` 分隔，如 `SERVER__PORT=9000`；`DATABASE_URL` 优先级最高。
    pub fn load() -> Result<Self, ReportError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.query_timeout_secs", defaults.database.query_timeout_secs as i64)?
            .add_source(File::with_name("report").required(false))
            .add_source(Environment::default().separator("__"))
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
