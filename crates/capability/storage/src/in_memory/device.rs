//! 设备内存存储实现
//!
//! 功能：
//! - 设备 CRUD 操作
//! - 大屏条件过滤、分页与计数

use crate::error::StorageError;
use crate::models::{DeviceFilter, DeviceInput, DeviceRecord};
use crate::traits::DeviceStore;
use chrono::Utc;
use domain::PageRequest;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// 设备内存存储
#[derive(Default)]
pub struct InMemoryDeviceStore {
    devices: RwLock<BTreeMap<String, DeviceRecord>>,
}

impl InMemoryDeviceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DeviceStore for InMemoryDeviceStore {
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let map = self.devices.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().cloned().collect())
    }

    async fn query_devices(
        &self,
        filter: &DeviceFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let map = self.devices.read().map_err(|_| StorageError::Lock)?;
        let matched: Vec<DeviceRecord> = map
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        Ok(match page {
            Some(page) => page.slice(&matched),
            None => matched,
        })
    }

    async fn count_devices(&self, filter: &DeviceFilter) -> Result<i64, StorageError> {
        let map = self.devices.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().filter(|item| filter.matches(item)).count() as i64)
    }

    async fn find_devices_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let map = self.devices.read().map_err(|_| StorageError::Lock)?;
        Ok(codes
            .iter()
            .filter_map(|code| map.get(code))
            .cloned()
            .collect())
    }

    async fn create_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<DeviceRecord, StorageError> {
        let mut map = self.devices.write().map_err(|_| StorageError::Lock)?;
        if map.contains_key(device_code) {
            return Err(StorageError::Conflict(format!("device {device_code}")));
        }
        let record = input.into_record(device_code, Utc::now());
        map.insert(device_code.to_string(), record.clone());
        Ok(record)
    }

    async fn update_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let mut map = self.devices.write().map_err(|_| StorageError::Lock)?;
        let Some(device) = map.get_mut(device_code) else {
            return Ok(None);
        };
        *device = input.into_record(device_code, Utc::now());
        Ok(Some(device.clone()))
    }

    async fn delete_device(&self, device_code: &str) -> Result<bool, StorageError> {
        let mut map = self.devices.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(device_code).is_some())
    }
}
