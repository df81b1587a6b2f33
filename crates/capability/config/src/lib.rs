//! 应用运行配置加载。
//!
//! | 变量 | 默认值 |
//! |---|---|
//! | `PARK_DATABASE_URL`（或 `DATABASE_URL`） | 必填 |
//! | `PARK_HTTP_ADDR` | 设置了 `PORT` 时为 `0.0.0.0:$PORT`，否则 `127.0.0.1:3000` |
//! | `PARK_DB_MAX_CONNECTIONS` | 8 |
//! | `PARK_AUTO_MIGRATE` | true |
//! | `PARK_LOG` | `info` |
//! | `PARK_MEDIA_BASE_URL` | `http://example.com` |

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    /// 启动时执行内置建表脚本
    pub auto_migrate: bool,
    /// 默认日志过滤（`RUST_LOG` 优先）
    pub log_filter: String,
    /// 视频流、平面图等占位地址的前缀
    pub media_base_url: String,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = read_optional("PARK_DATABASE_URL")
            .or_else(|| read_optional("DATABASE_URL"))
            .ok_or_else(|| ConfigError::Missing("PARK_DATABASE_URL".to_string()))?;
        let http_addr = match read_optional("PARK_HTTP_ADDR") {
            Some(addr) => addr,
            None => match read_optional("PORT") {
                Some(port) => {
                    let port = port
                        .parse::<u16>()
                        .map_err(|_| ConfigError::Invalid("PORT".to_string(), port))?;
                    format!("0.0.0.0:{port}")
                }
                None => "127.0.0.1:3000".to_string(),
            },
        };
        let db_max_connections = read_u32_with_default("PARK_DB_MAX_CONNECTIONS", 8)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "PARK_DB_MAX_CONNECTIONS".to_string(),
                "0".to_string(),
            ));
        }
        let auto_migrate = read_bool_with_default("PARK_AUTO_MIGRATE", true);
        let log_filter = read_optional("PARK_LOG").unwrap_or_else(|| "info".to_string());
        let media_base_url = read_optional("PARK_MEDIA_BASE_URL")
            .unwrap_or_else(|| "http://example.com".to_string());

        Ok(Self {
            http_addr,
            database_url,
            db_max_connections,
            auto_migrate,
            log_filter,
            media_base_url,
        })
    }
}

fn read_u32_with_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = match read_optional(key) {
        Some(value) => value,
        None => return Ok(default),
    };
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
