//! # PostgreSQL 存储实现模块
//!
//! 生产环境使用。所有实现共享同一个 `PgPool`。
//!
//! ## 包含的实现
//!
//! - **ParkStore** (`park.rs`)
//! - **BuildingStore** (`building.rs`)
//! - **DeviceStore** (`device.rs`)：大屏过滤、分页、计数
//! - **AlarmStore** (`alarm.rs`)：倒序分页、按类型计数、趋势分组
//! - **GenericRecordStore** (`generic_record.rs`)
//! - **GenericStatStore** (`generic_stat.rs`)：文本时间边界过滤、求和
//!
//! ## 数据库模式
//!
//! 表结构见 `migrations/0001_smart_park.sql`，由 [`crate::schema::ensure_schema`] 创建：
//! - `parks`、`buildings`、`devices`、`alarms`：外键依次关联
//! - `generic_records`、`generic_stats`：以字符串编码松散关联，无外键
//!
//! ## 查询约定
//!
//! - 所有 SQL 使用参数绑定，可选条件写作 `($n is null or ...)`
//! - 写入使用 `returning` 直接返回落库后的行
//! - 更新/删除不存在的主键返回 `None` / `false`，由调用方决定如何响应
//! - 不使用事务：每个请求是相互独立的单次存储调用

pub mod alarm;
pub mod building;
pub mod device;
pub mod generic_record;
pub mod generic_stat;
pub mod park;

pub use alarm::*;
pub use building::*;
pub use device::*;
pub use generic_record::*;
pub use generic_stat::*;
pub use park::*;
