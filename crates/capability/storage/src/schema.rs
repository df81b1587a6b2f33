//! 数据库表结构初始化
//!
//! 启动时执行随 crate 打包的建表脚本，重复执行无副作用。

use crate::error::StorageError;
use sqlx::PgPool;

/// 建表脚本
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_smart_park.sql");

/// 创建缺失的表和索引（幂等）。
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}
