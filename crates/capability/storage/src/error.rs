//! 存储层错误类型
//!
//! 封装底层错误：
//! - SQL 执行错误（含约束冲突、外键不存在）
//! - 必填列缺失
//! - 内存实现的锁与主键冲突

/// 存储错误。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("column `{0}` must not be null")]
    NotNull(&'static str),
    #[error("invalid value for `{column}`: {value}")]
    Invalid { column: &'static str, value: String },
    #[error("{0} already exists")]
    Conflict(String),
    #[error("lock failed")]
    Lock,
}
