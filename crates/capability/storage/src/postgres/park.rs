//! Postgres 园区存储实现

use crate::error::StorageError;
use crate::models::{ParkInput, ParkRecord};
use crate::traits::ParkStore;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const PARK_COLUMNS: &str = "yq_app_code, yq_name, kj_type, extra_details_json";

pub struct PgParkStore {
    pub pool: PgPool,
}

impl PgParkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn park_from_row(row: &PgRow) -> Result<ParkRecord, sqlx::Error> {
    Ok(ParkRecord {
        yq_app_code: row.try_get("yq_app_code")?,
        yq_name: row.try_get("yq_name")?,
        kj_type: row.try_get("kj_type")?,
        extra_details_json: row.try_get("extra_details_json")?,
    })
}

#[async_trait::async_trait]
impl ParkStore for PgParkStore {
    async fn list_parks(&self) -> Result<Vec<ParkRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {PARK_COLUMNS} from parks order by yq_app_code"
        ))
        .fetch_all(&self.pool)
        .await?;
        let mut parks = Vec::with_capacity(rows.len());
        for row in rows {
            parks.push(park_from_row(&row)?);
        }
        Ok(parks)
    }

    async fn find_park(&self, yq_app_code: &str) -> Result<Option<ParkRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {PARK_COLUMNS} from parks where yq_app_code = $1"
        ))
        .bind(yq_app_code)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(park_from_row(&row)?))
    }

    async fn find_parks_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<ParkRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {PARK_COLUMNS} from parks where yq_app_code = any($1)"
        ))
        .bind(codes)
        .fetch_all(&self.pool)
        .await?;
        let mut parks = Vec::with_capacity(rows.len());
        for row in rows {
            parks.push(park_from_row(&row)?);
        }
        Ok(parks)
    }

    async fn create_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<ParkRecord, StorageError> {
        let row = sqlx::query(&format!(
            "insert into parks ({PARK_COLUMNS}) values ($1, $2, $3, $4) \
             returning {PARK_COLUMNS}"
        ))
        .bind(yq_app_code)
        .bind(&input.yq_name)
        .bind(&input.kj_type)
        .bind(&input.extra_details_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(park_from_row(&row)?)
    }

    async fn update_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<Option<ParkRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "update parks set \
             yq_name = $1, \
             kj_type = $2, \
             extra_details_json = $3 \
             where yq_app_code = $4 \
             returning {PARK_COLUMNS}"
        ))
        .bind(&input.yq_name)
        .bind(&input.kj_type)
        .bind(&input.extra_details_json)
        .bind(yq_app_code)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(park_from_row(&row)?))
    }

    async fn delete_park(&self, yq_app_code: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from parks where yq_app_code = $1")
            .bind(yq_app_code)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
