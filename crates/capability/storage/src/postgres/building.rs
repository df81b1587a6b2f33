//! Postgres 楼栋存储实现

use crate::error::StorageError;
use crate::models::{BuildingInput, BuildingRecord};
use crate::traits::BuildingStore;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const BUILDING_COLUMNS: &str = "building_code, yq_app_code, building_name, floors_info_json";

pub struct PgBuildingStore {
    pub pool: PgPool,
}

impl PgBuildingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn building_from_row(row: &PgRow) -> Result<BuildingRecord, sqlx::Error> {
    Ok(BuildingRecord {
        building_code: row.try_get("building_code")?,
        yq_app_code: row.try_get("yq_app_code")?,
        building_name: row.try_get("building_name")?,
        floors_info_json: row.try_get("floors_info_json")?,
    })
}

fn buildings_from_rows(rows: Vec<PgRow>) -> Result<Vec<BuildingRecord>, StorageError> {
    let mut buildings = Vec::with_capacity(rows.len());
    for row in rows {
        buildings.push(building_from_row(&row)?);
    }
    Ok(buildings)
}

#[async_trait::async_trait]
impl BuildingStore for PgBuildingStore {
    async fn list_buildings(&self) -> Result<Vec<BuildingRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {BUILDING_COLUMNS} from buildings order by building_code"
        ))
        .fetch_all(&self.pool)
        .await?;
        buildings_from_rows(rows)
    }

    async fn list_buildings_by_park(
        &self,
        yq_app_code: &str,
    ) -> Result<Vec<BuildingRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {BUILDING_COLUMNS} from buildings where yq_app_code = $1 \
             order by building_code"
        ))
        .bind(yq_app_code)
        .fetch_all(&self.pool)
        .await?;
        buildings_from_rows(rows)
    }

    async fn find_buildings_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<BuildingRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {BUILDING_COLUMNS} from buildings where building_code = any($1)"
        ))
        .bind(codes)
        .fetch_all(&self.pool)
        .await?;
        buildings_from_rows(rows)
    }

    async fn create_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<BuildingRecord, StorageError> {
        let row = sqlx::query(&format!(
            "insert into buildings ({BUILDING_COLUMNS}) values ($1, $2, $3, $4) \
             returning {BUILDING_COLUMNS}"
        ))
        .bind(building_code)
        .bind(&input.yq_app_code)
        .bind(&input.building_name)
        .bind(&input.floors_info_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(building_from_row(&row)?)
    }

    async fn update_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<Option<BuildingRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "update buildings set \
             yq_app_code = $1, \
             building_name = $2, \
             floors_info_json = $3 \
             where building_code = $4 \
             returning {BUILDING_COLUMNS}"
        ))
        .bind(&input.yq_app_code)
        .bind(&input.building_name)
        .bind(&input.floors_info_json)
        .bind(building_code)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(building_from_row(&row)?))
    }

    async fn delete_building(&self, building_code: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from buildings where building_code = $1")
            .bind(building_code)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
