//! Postgres 设备存储实现
//!
//! 设计要点：
//! - 可选过滤条件以 `($n is null or ...)` 绑定参数表达，不拼接 SQL
//! - 名称包含使用 `strpos`，不把用户输入当作 LIKE 模式
//! - `last_updated` 在写入时由数据库置为 `now()`

use crate::error::StorageError;
use crate::models::{DeviceFilter, DeviceInput, DeviceRecord};
use crate::traits::DeviceStore;
use domain::PageRequest;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const DEVICE_COLUMNS: &str = "device_code, api_record_id, yq_app_code, building_code, \
     device_name, device_type, device_status, location, responsible_person_name, \
     channels_info_json, last_updated";

const DEVICE_FILTER: &str = "($1::text is null or yq_app_code = $1) \
     and ($2::text is null or strpos(device_name, $2) > 0) \
     and ($3::text is null or device_status = $3) \
     and ($4::text is null or device_type = $4)";

pub struct PgDeviceStore {
    pub pool: PgPool,
}

impl PgDeviceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn device_from_row(row: &PgRow) -> Result<DeviceRecord, sqlx::Error> {
    Ok(DeviceRecord {
        device_code: row.try_get("device_code")?,
        api_record_id: row.try_get("api_record_id")?,
        yq_app_code: row.try_get("yq_app_code")?,
        building_code: row.try_get("building_code")?,
        device_name: row.try_get("device_name")?,
        device_type: row.try_get("device_type")?,
        device_status: row.try_get("device_status")?,
        location: row.try_get("location")?,
        responsible_person_name: row.try_get("responsible_person_name")?,
        channels_info_json: row.try_get("channels_info_json")?,
        last_updated: row.try_get("last_updated")?,
    })
}

fn devices_from_rows(rows: Vec<PgRow>) -> Result<Vec<DeviceRecord>, StorageError> {
    let mut devices = Vec::with_capacity(rows.len());
    for row in rows {
        devices.push(device_from_row(&row)?);
    }
    Ok(devices)
}

#[async_trait::async_trait]
impl DeviceStore for PgDeviceStore {
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {DEVICE_COLUMNS} from devices order by device_code"
        ))
        .fetch_all(&self.pool)
        .await?;
        devices_from_rows(rows)
    }

    async fn query_devices(
        &self,
        filter: &DeviceFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {DEVICE_COLUMNS} from devices where {DEVICE_FILTER} \
             order by device_code limit $5 offset $6"
        ))
        .bind(&filter.yq_app_code)
        .bind(&filter.name_contains)
        .bind(&filter.status)
        .bind(&filter.device_type)
        .bind(page.map(|page| page.limit()))
        .bind(page.map(|page| page.offset()))
        .fetch_all(&self.pool)
        .await?;
        devices_from_rows(rows)
    }

    async fn count_devices(&self, filter: &DeviceFilter) -> Result<i64, StorageError> {
        let row = sqlx::query(&format!(
            "select count(*) as total from devices where {DEVICE_FILTER}"
        ))
        .bind(&filter.yq_app_code)
        .bind(&filter.name_contains)
        .bind(&filter.status)
        .bind(&filter.device_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("total")?)
    }

    async fn find_devices_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {DEVICE_COLUMNS} from devices where device_code = any($1)"
        ))
        .bind(codes)
        .fetch_all(&self.pool)
        .await?;
        devices_from_rows(rows)
    }

    async fn create_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<DeviceRecord, StorageError> {
        let row = sqlx::query(&format!(
            "insert into devices (device_code, api_record_id, yq_app_code, building_code, \
             device_name, device_type, device_status, location, responsible_person_name, \
             channels_info_json, last_updated) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, now()) \
             returning {DEVICE_COLUMNS}"
        ))
        .bind(device_code)
        .bind(input.api_record_id)
        .bind(&input.yq_app_code)
        .bind(&input.building_code)
        .bind(&input.device_name)
        .bind(&input.device_type)
        .bind(&input.device_status)
        .bind(&input.location)
        .bind(&input.responsible_person_name)
        .bind(&input.channels_info_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(device_from_row(&row)?)
    }

    async fn update_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "update devices set \
             api_record_id = $1, \
             yq_app_code = $2, \
             building_code = $3, \
             device_name = $4, \
             device_type = $5, \
             device_status = $6, \
             location = $7, \
             responsible_person_name = $8, \
             channels_info_json = $9, \
             last_updated = now() \
             where device_code = $10 \
             returning {DEVICE_COLUMNS}"
        ))
        .bind(input.api_record_id)
        .bind(&input.yq_app_code)
        .bind(&input.building_code)
        .bind(&input.device_name)
        .bind(&input.device_type)
        .bind(&input.device_status)
        .bind(&input.location)
        .bind(&input.responsible_person_name)
        .bind(&input.channels_info_json)
        .bind(device_code)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(device_from_row(&row)?))
    }

    async fn delete_device(&self, device_code: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from devices where device_code = $1")
            .bind(device_code)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
