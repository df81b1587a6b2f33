//! Postgres 通用统计存储实现
//!
//! `time_period_or_timestamp` 为文本列，时间边界使用 `collate "C"`
//! 按字节序比较，与 ISO-8601 字符串的字典序一致。

use crate::error::StorageError;
use crate::models::{GenericStat, GenericStatInput, StatFilter};
use crate::traits::GenericStatStore;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const STAT_COLUMNS: &str = "entry_id, metric_source_api, metric_description, \
     yq_app_code_context, related_entity_code_context, time_period_or_timestamp, \
     value_numeric, value_text, value_complex_json";

const STAT_FILTER: &str = "($1::text is null or strpos(metric_source_api, $1) > 0) \
     and ($2::text is null or strpos(metric_description, $2) > 0) \
     and ($3::text is null or yq_app_code_context = $3) \
     and ($4::text is null or related_entity_code_context = $4) \
     and ($5::text is null or time_period_or_timestamp collate \"C\" >= $5) \
     and ($6::text is null or time_period_or_timestamp collate \"C\" <= $6)";

pub struct PgGenericStatStore {
    pub pool: PgPool,
}

impl PgGenericStatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn stat_from_row(row: &PgRow) -> Result<GenericStat, sqlx::Error> {
    Ok(GenericStat {
        entry_id: row.try_get("entry_id")?,
        metric_source_api: row.try_get("metric_source_api")?,
        metric_description: row.try_get("metric_description")?,
        yq_app_code_context: row.try_get("yq_app_code_context")?,
        related_entity_code_context: row.try_get("related_entity_code_context")?,
        time_period_or_timestamp: row.try_get("time_period_or_timestamp")?,
        value_numeric: row.try_get("value_numeric")?,
        value_text: row.try_get("value_text")?,
        value_complex_json: row.try_get("value_complex_json")?,
    })
}

fn stats_from_rows(rows: Vec<PgRow>) -> Result<Vec<GenericStat>, StorageError> {
    let mut stats = Vec::with_capacity(rows.len());
    for row in rows {
        stats.push(stat_from_row(&row)?);
    }
    Ok(stats)
}

#[async_trait::async_trait]
impl GenericStatStore for PgGenericStatStore {
    async fn list_stats(&self) -> Result<Vec<GenericStat>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {STAT_COLUMNS} from generic_stats order by entry_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        stats_from_rows(rows)
    }

    async fn query_stats(&self, filter: &StatFilter) -> Result<Vec<GenericStat>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {STAT_COLUMNS} from generic_stats where {STAT_FILTER} order by entry_id"
        ))
        .bind(&filter.source_contains)
        .bind(&filter.description_contains)
        .bind(&filter.yq_app_code)
        .bind(&filter.related_entity_code)
        .bind(&filter.from)
        .bind(&filter.to)
        .fetch_all(&self.pool)
        .await?;
        stats_from_rows(rows)
    }

    async fn sum_numeric(&self, filter: &StatFilter) -> Result<Option<f64>, StorageError> {
        let row = sqlx::query(&format!(
            "select sum(value_numeric) as total from generic_stats where {STAT_FILTER}"
        ))
        .bind(&filter.source_contains)
        .bind(&filter.description_contains)
        .bind(&filter.yq_app_code)
        .bind(&filter.related_entity_code)
        .bind(&filter.from)
        .bind(&filter.to)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("total")?)
    }

    async fn create_stat(&self, input: GenericStatInput) -> Result<GenericStat, StorageError> {
        let row = sqlx::query(&format!(
            "insert into generic_stats (metric_source_api, metric_description, \
             yq_app_code_context, related_entity_code_context, time_period_or_timestamp, \
             value_numeric, value_text, value_complex_json) \
             values ($1, $2, $3, $4, $5, $6, $7, $8) \
             returning {STAT_COLUMNS}"
        ))
        .bind(&input.metric_source_api)
        .bind(&input.metric_description)
        .bind(&input.yq_app_code_context)
        .bind(&input.related_entity_code_context)
        .bind(&input.time_period_or_timestamp)
        .bind(input.value_numeric)
        .bind(&input.value_text)
        .bind(&input.value_complex_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(stat_from_row(&row)?)
    }

    async fn update_stat(
        &self,
        entry_id: i64,
        input: GenericStatInput,
    ) -> Result<Option<GenericStat>, StorageError> {
        let row = sqlx::query(&format!(
            "update generic_stats set \
             metric_source_api = $1, \
             metric_description = $2, \
             yq_app_code_context = $3, \
             related_entity_code_context = $4, \
             time_period_or_timestamp = $5, \
             value_numeric = $6, \
             value_text = $7, \
             value_complex_json = $8 \
             where entry_id = $9 \
             returning {STAT_COLUMNS}"
        ))
        .bind(&input.metric_source_api)
        .bind(&input.metric_description)
        .bind(&input.yq_app_code_context)
        .bind(&input.related_entity_code_context)
        .bind(&input.time_period_or_timestamp)
        .bind(input.value_numeric)
        .bind(&input.value_text)
        .bind(&input.value_complex_json)
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(stat_from_row(&row)?))
    }

    async fn delete_stat(&self, entry_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from generic_stats where entry_id = $1")
            .bind(entry_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
