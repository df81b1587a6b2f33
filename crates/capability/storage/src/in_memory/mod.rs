//! 内存存储实现模块
//!
//! 仅用于本地演示和测试，不做跨表的外键校验。
//!
//! 包含以下实现：
//! - ParkStore: InMemoryParkStore
//! - BuildingStore: InMemoryBuildingStore
//! - DeviceStore: InMemoryDeviceStore
//! - AlarmStore: InMemoryAlarmStore
//! - GenericRecordStore: InMemoryGenericRecordStore
//! - GenericStatStore: InMemoryGenericStatStore

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

use crate::error::StorageError;
use std::collections::BTreeMap;

/// 下一个自增主键：当前最大值 + 1，空表为 1。
fn next_id<V>(map: &BTreeMap<i64, V>, table: &str) -> Result<i64, StorageError> {
    match map.keys().next_back() {
        None => Ok(1),
        Some(last) => last
            .checked_add(1)
            .ok_or_else(|| StorageError::Conflict(format!("{table} id exhausted"))),
    }
}
