//! 通用记录内存存储实现

use crate::error::StorageError;
use crate::models::{GenericRecord, GenericRecordInput};
use crate::traits::GenericRecordStore;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryGenericRecordStore {
    records: RwLock<BTreeMap<i64, GenericRecord>>,
}

impl InMemoryGenericRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GenericRecordStore for InMemoryGenericRecordStore {
    async fn list_records(&self) -> Result<Vec<GenericRecord>, StorageError> {
        let map = self.records.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().cloned().collect())
    }

    async fn create_record(
        &self,
        input: GenericRecordInput,
    ) -> Result<GenericRecord, StorageError> {
        let mut map = self.records.write().map_err(|_| StorageError::Lock)?;
        let id = super::next_id(&map, "record")?;
        let record = input.into_record(id);
        map.insert(id, record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        record_id: i64,
        input: GenericRecordInput,
    ) -> Result<Option<GenericRecord>, StorageError> {
        let mut map = self.records.write().map_err(|_| StorageError::Lock)?;
        let Some(record) = map.get_mut(&record_id) else {
            return Ok(None);
        };
        *record = input.into_record(record_id);
        Ok(Some(record.clone()))
    }

    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError> {
        let mut map = self.records.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(&record_id).is_some())
    }
}
