//! Postgres 通用记录存储实现

use crate::error::StorageError;
use crate::models::{GenericRecord, GenericRecordInput};
use crate::traits::GenericRecordStore;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const RECORD_COLUMNS: &str =
    "record_id, record_type, yq_app_code_context, related_entity_code, record_data_json";

pub struct PgGenericRecordStore {
    pub pool: PgPool,
}

impl PgGenericRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &PgRow) -> Result<GenericRecord, sqlx::Error> {
    Ok(GenericRecord {
        record_id: row.try_get("record_id")?,
        record_type: row.try_get("record_type")?,
        yq_app_code_context: row.try_get("yq_app_code_context")?,
        related_entity_code: row.try_get("related_entity_code")?,
        record_data_json: row.try_get("record_data_json")?,
    })
}

#[async_trait::async_trait]
impl GenericRecordStore for PgGenericRecordStore {
    async fn list_records(&self) -> Result<Vec<GenericRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {RECORD_COLUMNS} from generic_records order by record_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(record_from_row(&row)?);
        }
        Ok(records)
    }

    async fn create_record(
        &self,
        input: GenericRecordInput,
    ) -> Result<GenericRecord, StorageError> {
        let row = sqlx::query(&format!(
            "insert into generic_records \
             (record_type, yq_app_code_context, related_entity_code, record_data_json) \
             values ($1, $2, $3, $4) \
             returning {RECORD_COLUMNS}"
        ))
        .bind(&input.record_type)
        .bind(&input.yq_app_code_context)
        .bind(&input.related_entity_code)
        .bind(&input.record_data_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(record_from_row(&row)?)
    }

    async fn update_record(
        &self,
        record_id: i64,
        input: GenericRecordInput,
    ) -> Result<Option<GenericRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "update generic_records set \
             record_type = $1, \
             yq_app_code_context = $2, \
             related_entity_code = $3, \
             record_data_json = $4 \
             where record_id = $5 \
             returning {RECORD_COLUMNS}"
        ))
        .bind(&input.record_type)
        .bind(&input.yq_app_code_context)
        .bind(&input.related_entity_code)
        .bind(&input.record_data_json)
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(record_from_row(&row)?))
    }

    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from generic_records where record_id = $1")
            .bind(record_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
