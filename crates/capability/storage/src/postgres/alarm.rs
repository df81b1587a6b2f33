//! Postgres 报警存储实现
//!
//! 设计要点：
//! - 设备维度的条件（园区、设备名称）由调用方先解析为设备编码集合
//! - 趋势分组的格式串同样以参数绑定（`to_char(alarm_time, $6)`）
//! - 未指定主键时由 identity 列生成；显式主键写入后同步序列

use crate::error::StorageError;
use crate::models::{AlarmFilter, AlarmInput, AlarmRecord};
use crate::traits::AlarmStore;
use domain::{BucketUnit, PageRequest};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const ALARM_COLUMNS: &str = "api_record_id, device_code, alarm_type, alarm_level, alarm_time, \
     alarm_status, location_at_alarm, last_updated";

const ALARM_FILTER: &str = "($1::text[] is null or device_code = any($1)) \
     and ($2::text is null or alarm_type = $2) \
     and ($3::text is null or alarm_status = $3) \
     and ($4::timestamptz is null or alarm_time >= $4) \
     and ($5::timestamptz is null or alarm_time <= $5)";

/// 把 `api_record_id` 的 identity 序列推进到表中最大主键
const SYNC_ALARM_ID_SEQUENCE: &str = "select setval(\
     pg_get_serial_sequence('alarms', 'api_record_id'), \
     greatest((select max(api_record_id) from alarms), 1))";

pub struct PgAlarmStore {
    pub pool: PgPool,
}

impl PgAlarmStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn alarm_from_row(row: &PgRow) -> Result<AlarmRecord, sqlx::Error> {
    Ok(AlarmRecord {
        api_record_id: row.try_get("api_record_id")?,
        device_code: row.try_get("device_code")?,
        alarm_type: row.try_get("alarm_type")?,
        alarm_level: row.try_get("alarm_level")?,
        alarm_time: row.try_get("alarm_time")?,
        alarm_status: row.try_get("alarm_status")?,
        location_at_alarm: row.try_get("location_at_alarm")?,
        last_updated: row.try_get("last_updated")?,
    })
}

fn alarms_from_rows(rows: Vec<PgRow>) -> Result<Vec<AlarmRecord>, StorageError> {
    let mut alarms = Vec::with_capacity(rows.len());
    for row in rows {
        alarms.push(alarm_from_row(&row)?);
    }
    Ok(alarms)
}

#[async_trait::async_trait]
impl AlarmStore for PgAlarmStore {
    async fn list_alarms(&self) -> Result<Vec<AlarmRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {ALARM_COLUMNS} from alarms order by api_record_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        alarms_from_rows(rows)
    }

    async fn query_alarms(
        &self,
        filter: &AlarmFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<AlarmRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {ALARM_COLUMNS} from alarms where {ALARM_FILTER} \
             order by alarm_time desc, api_record_id desc limit $6 offset $7"
        ))
        .bind(&filter.device_codes)
        .bind(&filter.alarm_type)
        .bind(&filter.alarm_status)
        .bind(filter.from)
        .bind(filter.to)
        .bind(page.map(|page| page.limit()))
        .bind(page.map(|page| page.offset()))
        .fetch_all(&self.pool)
        .await?;
        alarms_from_rows(rows)
    }

    async fn count_alarms(&self, filter: &AlarmFilter) -> Result<i64, StorageError> {
        let row = sqlx::query(&format!(
            "select count(*) as total from alarms where {ALARM_FILTER}"
        ))
        .bind(&filter.device_codes)
        .bind(&filter.alarm_type)
        .bind(&filter.alarm_status)
        .bind(filter.from)
        .bind(filter.to)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("total")?)
    }

    async fn count_alarms_by_type(
        &self,
        filter: &AlarmFilter,
        limit: i64,
    ) -> Result<Vec<(Option<String>, i64)>, StorageError> {
        let rows = sqlx::query(&format!(
            "select alarm_type, count(*) as count from alarms where {ALARM_FILTER} \
             group by alarm_type order by count desc, alarm_type limit $6"
        ))
        .bind(&filter.device_codes)
        .bind(&filter.alarm_type)
        .bind(&filter.alarm_status)
        .bind(filter.from)
        .bind(filter.to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        let mut grouped = Vec::with_capacity(rows.len());
        for row in rows {
            grouped.push((row.try_get("alarm_type")?, row.try_get("count")?));
        }
        Ok(grouped)
    }

    async fn alarm_trend(
        &self,
        filter: &AlarmFilter,
        unit: BucketUnit,
    ) -> Result<Vec<(String, i64)>, StorageError> {
        let rows = sqlx::query(&format!(
            "select to_char(alarm_time, $6) as time, count(*) as count \
             from alarms where {ALARM_FILTER} group by 1 order by 1"
        ))
        .bind(&filter.device_codes)
        .bind(&filter.alarm_type)
        .bind(&filter.alarm_status)
        .bind(filter.from)
        .bind(filter.to)
        .bind(unit.sql_pattern())
        .fetch_all(&self.pool)
        .await?;
        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            points.push((row.try_get("time")?, row.try_get("count")?));
        }
        Ok(points)
    }

    async fn create_alarm(
        &self,
        api_record_id: Option<i64>,
        input: AlarmInput,
    ) -> Result<AlarmRecord, StorageError> {
        let Some(id) = api_record_id else {
            let row = sqlx::query(&format!(
                "insert into alarms (device_code, alarm_type, alarm_level, \
                 alarm_time, alarm_status, location_at_alarm, last_updated) \
                 values ($1, $2, $3, $4, $5, $6, now()) \
                 returning {ALARM_COLUMNS}"
            ))
            .bind(&input.device_code)
            .bind(&input.alarm_type)
            .bind(&input.alarm_level)
            .bind(input.alarm_time)
            .bind(&input.alarm_status)
            .bind(&input.location_at_alarm)
            .fetch_one(&self.pool)
            .await?;
            return Ok(alarm_from_row(&row)?);
        };

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "insert into alarms (api_record_id, device_code, alarm_type, alarm_level, \
             alarm_time, alarm_status, location_at_alarm, last_updated) \
             values ($1, $2, $3, $4, $5, $6, $7, now()) \
             returning {ALARM_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.device_code)
        .bind(&input.alarm_type)
        .bind(&input.alarm_level)
        .bind(input.alarm_time)
        .bind(&input.alarm_status)
        .bind(&input.location_at_alarm)
        .fetch_one(&mut *tx)
        .await?;
        // 显式主键不会推进 identity 序列，写入后对齐到当前最大值
        sqlx::query(SYNC_ALARM_ID_SEQUENCE)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(alarm_from_row(&row)?)
    }

    async fn update_alarm(
        &self,
        api_record_id: i64,
        input: AlarmInput,
    ) -> Result<Option<AlarmRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "update alarms set \
             device_code = $1, \
             alarm_type = $2, \
             alarm_level = $3, \
             alarm_time = $4, \
             alarm_status = $5, \
             location_at_alarm = $6, \
             last_updated = now() \
             where api_record_id = $7 \
             returning {ALARM_COLUMNS}"
        ))
        .bind(&input.device_code)
        .bind(&input.alarm_type)
        .bind(&input.alarm_level)
        .bind(input.alarm_time)
        .bind(&input.alarm_status)
        .bind(&input.location_at_alarm)
        .bind(api_record_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(alarm_from_row(&row)?))
    }

    async fn delete_alarm(&self, api_record_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from alarms where api_record_id = $1")
            .bind(api_record_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
