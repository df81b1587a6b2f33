//! 楼栋内存存储实现

use crate::error::StorageError;
use crate::models::{BuildingInput, BuildingRecord};
use crate::traits::BuildingStore;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBuildingStore {
    buildings: RwLock<BTreeMap<String, BuildingRecord>>,
}

impl InMemoryBuildingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(
        &self,
        predicate: impl Fn(&BuildingRecord) -> bool,
    ) -> Result<Vec<BuildingRecord>, StorageError> {
        let map = self.buildings.read().map_err(|_| StorageError::Lock)?;
        Ok(map.values().filter(|item| predicate(item)).cloned().collect())
    }
}

#[async_trait::async_trait]
impl BuildingStore for InMemoryBuildingStore {
    async fn list_buildings(&self) -> Result<Vec<BuildingRecord>, StorageError> {
        self.select(|_| true)
    }

    async fn list_buildings_by_park(
        &self,
        yq_app_code: &str,
    ) -> Result<Vec<BuildingRecord>, StorageError> {
        self.select(|item| item.yq_app_code == yq_app_code)
    }

    async fn find_buildings_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<BuildingRecord>, StorageError> {
        self.select(|item| codes.contains(&item.building_code))
    }

    async fn create_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<BuildingRecord, StorageError> {
        let mut map = self.buildings.write().map_err(|_| StorageError::Lock)?;
        if map.contains_key(building_code) {
            return Err(StorageError::Conflict(format!("building {building_code}")));
        }
        let record = input.into_record(building_code);
        map.insert(building_code.to_string(), record.clone());
        Ok(record)
    }

    async fn update_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<Option<BuildingRecord>, StorageError> {
        let mut map = self.buildings.write().map_err(|_| StorageError::Lock)?;
        let Some(building) = map.get_mut(building_code) else {
            return Ok(None);
        };
        *building = input.into_record(building_code);
        Ok(Some(building.clone()))
    }

    async fn delete_building(&self, building_code: &str) -> Result<bool, StorageError> {
        let mut map = self.buildings.write().map_err(|_| StorageError::Lock)?;
        Ok(map.remove(building_code).is_some())
    }
}
