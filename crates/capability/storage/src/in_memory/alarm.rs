//! 报警内存存储实现
//!
//! 功能：
//! - 报警 CRUD 操作（主键可由调用方指定，否则取当前最大值 + 1）
//! - 报警时间倒序分页、按类型计数、按本地时间分桶的趋势

use crate::error::StorageError;
use crate::models::{AlarmFilter, AlarmInput, AlarmRecord};
use crate::traits::AlarmStore;
use chrono::{Local, Utc};
use domain::{BucketUnit, PageRequest};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAlarmStore {
    alarms: RwLock<BTreeMap<i64, AlarmRecord>>,
}

impl InMemoryAlarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, filter: &AlarmFilter) -> Result<Vec<AlarmRecord>, StorageError> {
        let map = self.alarms.read().map_err(|_| StorageError::Lock)?;
        let mut items: Vec<AlarmRecord> = map
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.alarm_time
                .cmp(&a.alarm_time)
                .then(b.api_record_id.cmp(&a.api_record_id))
        });
        Ok(items)
    }
}

#[async_trait::async_trait]
impl AlarmStore for InMemoryAlarmStore {
    async fn list_alarms(&self) -> Result<Vec<AlarmRecord>, StorageError> {
        let map = self.alarms.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().cloned().collect())
    }

    async fn query_alarms(
        &self,
        filter: &AlarmFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<AlarmRecord>, StorageError> {
        let items = self.matching(filter)?;
        Ok(match page {
            Some(page) => page.slice(&items),
            None => items,
        })
    }

    async fn count_alarms(&self, filter: &AlarmFilter) -> Result<i64, StorageError> {
        Ok(self.matching(filter)?.len() as i64)
    }

    async fn count_alarms_by_type(
        &self,
        filter: &AlarmFilter,
        limit: i64,
    ) -> Result<Vec<(Option<String>, i64)>, StorageError> {
        let mut counts: HashMap<Option<String>, i64> = HashMap::new();
        for alarm in self.matching(filter)? {
            *counts.entry(alarm.alarm_type).or_default() += 1;
        }
        let mut grouped: Vec<(Option<String>, i64)> = counts.into_iter().collect();
        grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        grouped.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(grouped)
    }

    async fn alarm_trend(
        &self,
        filter: &AlarmFilter,
        unit: BucketUnit,
    ) -> Result<Vec<(String, i64)>, StorageError> {
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for alarm in self.matching(filter)? {
            let local = alarm.alarm_time.with_timezone(&Local).naive_local();
            *buckets.entry(unit.key(local)).or_default() += 1;
        }
        Ok(buckets.into_iter().collect())
    }

    async fn create_alarm(
        &self,
        api_record_id: Option<i64>,
        input: AlarmInput,
    ) -> Result<AlarmRecord, StorageError> {
        let mut map = self.alarms.write().map_err(|_| StorageError::Lock)?;
        let id = match api_record_id {
            Some(id) if map.contains_key(&id) => {
                return Err(StorageError::Conflict(format!("alarm {id}")));
            }
            Some(id) => id,
            None => super::next_id(&map, "alarm")?,
        };
        let record = input.into_record(id, Utc::now());
        map.insert(id, record.clone());
        Ok(record)
    }

    async fn update_alarm(
        &self,
        api_record_id: i64,
        input: AlarmInput,
    ) -> Result<Option<AlarmRecord>, StorageError> {
        let mut map = self.alarms.write().map_err(|_| StorageError::Lock)?;
        let Some(alarm) = map.get_mut(&api_record_id) else {
            return Ok(None);
        };
        *alarm = input.into_record(api_record_id, Utc::now());
        Ok(Some(alarm.clone()))
    }

    async fn delete_alarm(&self, api_record_id: i64) -> Result<bool, StorageError> {
        let mut map = self.alarms.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(&api_record_id).is_some())
    }
}
