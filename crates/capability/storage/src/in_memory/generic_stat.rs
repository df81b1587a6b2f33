//! 通用统计内存存储实现
//!
//! 过滤规则与 PostgreSQL 实现一致：时间边界按字典序比较，
//! 描述/时间为空的行不满足对应条件。

use crate::error::StorageError;
use crate::models::{GenericStat, GenericStatInput, StatFilter};
use crate::traits::GenericStatStore;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryGenericStatStore {
    stats: RwLock<BTreeMap<i64, GenericStat>>,
}

impl InMemoryGenericStatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GenericStatStore for InMemoryGenericStatStore {
    async fn list_stats(&self) -> Result<Vec<GenericStat>, StorageError> {
        let map = self.stats.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().cloned().collect())
    }

    async fn query_stats(&self, filter: &StatFilter) -> Result<Vec<GenericStat>, StorageError> {
        let map = self.stats.read().map_err(|_| StorageError::Lock)?;
        Ok(map
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn sum_numeric(&self, filter: &StatFilter) -> Result<Option<f64>, StorageError> {
        let map = self.stats.read().map_err(|_| StorageError::Lock)?;
        let values: Vec<f64> = map
            .values()
            .filter(|item| filter.matches(item))
            .filter_map(|item| item.value_numeric)
            .collect();
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().sum()))
    }

    async fn create_stat(&self, input: GenericStatInput) -> Result<GenericStat, StorageError> {
        let mut map = self.stats.write().map_err(|_| StorageError::Lock)?;
        let id = super::next_id(&map, "stat")?;
        let record = input.into_record(id);
        map.insert(id, record.clone());
        Ok(record)
    }

    async fn update_stat(
        &self,
        entry_id: i64,
        input: GenericStatInput,
    ) -> Result<Option<GenericStat>, StorageError> {
        let mut map = self.stats.write().map_err(|_| StorageError::Lock)?;
        let Some(stat) = map.get_mut(&entry_id) else {
            return Ok(None);
        };
        *stat = input.into_record(entry_id);
        Ok(Some(stat.clone()))
    }

    async fn delete_stat(&self, entry_id: i64) -> Result<bool, StorageError> {
        let mut map = self.stats.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(&entry_id).is_some())
    }
}
