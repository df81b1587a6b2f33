//! 写入前的列值校验
//!
//! 与数据库约束保持一致：必填列缺失、时间列无法解析时，
//! 内存实现与 PostgreSQL 实现给出同样的存储错误。

use crate::error::StorageError;
use chrono::{DateTime, Utc};

/// 必填列（NOT NULL）
pub fn require_field<T>(value: Option<T>, column: &'static str) -> Result<T, StorageError> {
    value.ok_or(StorageError::NotNull(column))
}

/// 解析必填时间列（RFC 3339 或本地 `YYYY-MM-DD HH:MM:SS`）
pub fn require_timestamp(
    value: Option<&str>,
    column: &'static str,
) -> Result<DateTime<Utc>, StorageError> {
    let raw = require_field(value, column)?;
    domain::parse_instant(raw).ok_or_else(|| StorageError::Invalid {
        column,
        value: raw.to_string(),
    })
}

/// 解析数值主键
pub fn parse_numeric_key(raw: &str, column: &'static str) -> Result<i64, StorageError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StorageError::Invalid {
            column,
            value: raw.to_string(),
        })
}
