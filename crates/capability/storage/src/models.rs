//! 数据模型
//!
//! 每个实体一组结构：
//! - `*Record`：数据库行，序列化后即管理后台接口的返回体（列名即字段名）
//! - `*Input`：新增与全量更新时写入的非主键列
//! - `*Filter`：大屏查询的可选过滤条件，`None` 表示不过滤

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// 园区。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkRecord {
    pub yq_app_code: String,
    pub yq_name: String,
    pub kj_type: Option<String>,
    pub extra_details_json: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkInput {
    pub yq_name: String,
    pub kj_type: Option<String>,
    pub extra_details_json: Option<Value>,
}

impl ParkInput {
    pub fn into_record(self, yq_app_code: &str) -> ParkRecord {
        ParkRecord {
            yq_app_code: yq_app_code.to_string(),
            yq_name: self.yq_name,
            kj_type: self.kj_type,
            extra_details_json: self.extra_details_json,
        }
    }
}

/// 楼栋。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingRecord {
    pub building_code: String,
    pub yq_app_code: String,
    pub building_name: String,
    pub floors_info_json: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingInput {
    pub yq_app_code: String,
    pub building_name: String,
    pub floors_info_json: Option<Value>,
}

impl BuildingInput {
    pub fn into_record(self, building_code: &str) -> BuildingRecord {
        BuildingRecord {
            building_code: building_code.to_string(),
            yq_app_code: self.yq_app_code,
            building_name: self.building_name,
            floors_info_json: self.floors_info_json,
        }
    }
}

/// 设备。`last_updated` 由存储维护。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub device_code: String,
    pub api_record_id: Option<i64>,
    pub yq_app_code: String,
    pub building_code: Option<String>,
    pub device_name: String,
    pub device_type: Option<String>,
    pub device_status: Option<String>,
    pub location: Option<String>,
    pub responsible_person_name: Option<String>,
    pub channels_info_json: Option<Value>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInput {
    pub api_record_id: Option<i64>,
    pub yq_app_code: String,
    pub building_code: Option<String>,
    pub device_name: String,
    pub device_type: Option<String>,
    pub device_status: Option<String>,
    pub location: Option<String>,
    pub responsible_person_name: Option<String>,
    pub channels_info_json: Option<Value>,
}

impl DeviceInput {
    pub fn into_record(self, device_code: &str, last_updated: DateTime<Utc>) -> DeviceRecord {
        DeviceRecord {
            device_code: device_code.to_string(),
            api_record_id: self.api_record_id,
            yq_app_code: self.yq_app_code,
            building_code: self.building_code,
            device_name: self.device_name,
            device_type: self.device_type,
            device_status: self.device_status,
            location: self.location,
            responsible_person_name: self.responsible_person_name,
            channels_info_json: self.channels_info_json,
            last_updated,
        }
    }
}

/// 设备查询条件。
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    /// 园区编码（相等）
    pub yq_app_code: Option<String>,
    /// 设备名称（包含）
    pub name_contains: Option<String>,
    /// 设备状态（相等）
    pub status: Option<String>,
    /// 设备类型（相等）
    pub device_type: Option<String>,
}

impl DeviceFilter {
    pub fn matches(&self, device: &DeviceRecord) -> bool {
        self.yq_app_code
            .as_deref()
            .is_none_or(|code| device.yq_app_code == code)
            && self
                .name_contains
                .as_deref()
                .is_none_or(|name| device.device_name.contains(name))
            && self
                .status
                .as_deref()
                .is_none_or(|status| device.device_status.as_deref() == Some(status))
            && self
                .device_type
                .as_deref()
                .is_none_or(|kind| device.device_type.as_deref() == Some(kind))
    }
}

/// 报警。`api_record_id` 为主键，可由调用方指定。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlarmRecord {
    pub api_record_id: i64,
    pub device_code: String,
    pub alarm_type: Option<String>,
    pub alarm_level: Option<String>,
    pub alarm_time: DateTime<Utc>,
    pub alarm_status: Option<String>,
    pub location_at_alarm: Option<String>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmInput {
    pub device_code: String,
    pub alarm_type: Option<String>,
    pub alarm_level: Option<String>,
    pub alarm_time: DateTime<Utc>,
    pub alarm_status: Option<String>,
    pub location_at_alarm: Option<String>,
}

impl AlarmInput {
    pub fn into_record(self, api_record_id: i64, last_updated: DateTime<Utc>) -> AlarmRecord {
        AlarmRecord {
            api_record_id,
            device_code: self.device_code,
            alarm_type: self.alarm_type,
            alarm_level: self.alarm_level,
            alarm_time: self.alarm_time,
            alarm_status: self.alarm_status,
            location_at_alarm: self.location_at_alarm,
            last_updated,
        }
    }
}

/// 报警查询条件。
///
/// 园区、设备名称等设备维度的条件先解析为 `device_codes`。
#[derive(Debug, Clone, Default)]
pub struct AlarmFilter {
    /// 限定设备编码集合；空集合不匹配任何报警
    pub device_codes: Option<Vec<String>>,
    pub alarm_type: Option<String>,
    pub alarm_status: Option<String>,
    /// 报警时间下界（含）
    pub from: Option<DateTime<Utc>>,
    /// 报警时间上界（含）
    pub to: Option<DateTime<Utc>>,
}

impl AlarmFilter {
    pub fn matches(&self, alarm: &AlarmRecord) -> bool {
        self.device_codes
            .as_ref()
            .is_none_or(|codes| codes.iter().any(|code| *code == alarm.device_code))
            && self
                .alarm_type
                .as_deref()
                .is_none_or(|kind| alarm.alarm_type.as_deref() == Some(kind))
            && self
                .alarm_status
                .as_deref()
                .is_none_or(|status| alarm.alarm_status.as_deref() == Some(status))
            && self.from.is_none_or(|from| alarm.alarm_time >= from)
            && self.to.is_none_or(|to| alarm.alarm_time <= to)
    }
}

/// 通用记录。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericRecord {
    pub record_id: i64,
    pub record_type: String,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code: Option<String>,
    pub record_data_json: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericRecordInput {
    pub record_type: String,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code: Option<String>,
    pub record_data_json: Option<Value>,
}

impl GenericRecordInput {
    pub fn into_record(self, record_id: i64) -> GenericRecord {
        GenericRecord {
            record_id,
            record_type: self.record_type,
            yq_app_code_context: self.yq_app_code_context,
            related_entity_code: self.related_entity_code,
            record_data_json: self.record_data_json,
        }
    }
}

/// 通用统计/时序数据。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericStat {
    pub entry_id: i64,
    pub metric_source_api: String,
    pub metric_description: Option<String>,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code_context: Option<String>,
    pub time_period_or_timestamp: Option<String>,
    pub value_numeric: Option<f64>,
    pub value_text: Option<String>,
    pub value_complex_json: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericStatInput {
    pub metric_source_api: String,
    pub metric_description: Option<String>,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code_context: Option<String>,
    pub time_period_or_timestamp: Option<String>,
    pub value_numeric: Option<f64>,
    pub value_text: Option<String>,
    pub value_complex_json: Option<Value>,
}

impl GenericStatInput {
    pub fn into_record(self, entry_id: i64) -> GenericStat {
        GenericStat {
            entry_id,
            metric_source_api: self.metric_source_api,
            metric_description: self.metric_description,
            yq_app_code_context: self.yq_app_code_context,
            related_entity_code_context: self.related_entity_code_context,
            time_period_or_timestamp: self.time_period_or_timestamp,
            value_numeric: self.value_numeric,
            value_text: self.value_text,
            value_complex_json: self.value_complex_json,
        }
    }
}

/// 统计查询条件。
///
/// `from`/`to` 为 ISO-8601 字符串，与 `time_period_or_timestamp` 按字典序比较。
#[derive(Debug, Clone, Default)]
pub struct StatFilter {
    /// 数据来源（包含）
    pub source_contains: Option<String>,
    /// 指标描述（包含）
    pub description_contains: Option<String>,
    pub yq_app_code: Option<String>,
    pub related_entity_code: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl StatFilter {
    pub fn matches(&self, stat: &GenericStat) -> bool {
        let time = stat.time_period_or_timestamp.as_deref();
        self.source_contains
            .as_deref()
            .is_none_or(|source| stat.metric_source_api.contains(source))
            && self.description_contains.as_deref().is_none_or(|text| {
                stat.metric_description
                    .as_deref()
                    .is_some_and(|description| description.contains(text))
            })
            && self
                .yq_app_code
                .as_deref()
                .is_none_or(|code| stat.yq_app_code_context.as_deref() == Some(code))
            && self
                .related_entity_code
                .as_deref()
                .is_none_or(|code| stat.related_entity_code_context.as_deref() == Some(code))
            && self
                .from
                .as_deref()
                .is_none_or(|from| time.is_some_and(|time| time >= from))
            && self
                .to
                .as_deref()
                .is_none_or(|to| time.is_some_and(|time| time <= to))
    }
}
