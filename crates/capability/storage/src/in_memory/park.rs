//! 园区内存存储实现
//!
//! 仅用于本地演示和测试。

use crate::error::StorageError;
use crate::models::{ParkInput, ParkRecord};
use crate::traits::ParkStore;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// 园区内存存储
///
/// 使用 RwLock + BTreeMap，列表按园区编码有序。
#[derive(Default)]
pub struct InMemoryParkStore {
    parks: RwLock<BTreeMap<String, ParkRecord>>,
}

impl InMemoryParkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ParkStore for InMemoryParkStore {
    async fn list_parks(&self) -> Result<Vec<ParkRecord>, StorageError> {
        let map = self.parks.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().cloned().collect())
    }

    async fn find_park(&self, yq_app_code: &str) -> Result<Option<ParkRecord>, StorageError> {
        let map = self.parks.read().map_err(|_| StorageError::Lock)?;
        Ok(map.get(yq_app_code).cloned())
    }

    async fn find_parks_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<ParkRecord>, StorageError> {
        let map = self.parks.read().map_err(|_| StorageError::Lock)?;
        Ok(map
            .values()
            .filter(|park| codes.contains(&park.yq_app_code))
            .cloned()
            .collect())
    }

    async fn create_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<ParkRecord, StorageError> {
        let mut map = self.parks.write().map_err(|_| StorageError::Lock)?;
        if map.contains_key(yq_app_code) {
            return Err(StorageError::Conflict(format!("park {yq_app_code}")));
        }
        let record = input.into_record(yq_app_code);
        map.insert(yq_app_code.to_string(), record.clone());
        Ok(record)
    }

    async fn update_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<Option<ParkRecord>, StorageError> {
        let mut map = self.parks.write().map_err(|_| StorageError::Lock)?;
        let Some(park) = map.get_mut(yq_app_code) else {
            return Ok(None);
        };
        *park = input.into_record(yq_app_code);
        Ok(Some(park.clone()))
    }

    async fn delete_park(&self, yq_app_code: &str) -> Result<bool, StorageError> {
        let mut map = self.parks.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(yq_app_code).is_some())
    }
}
