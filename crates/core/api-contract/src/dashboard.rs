//! 大屏接口 DTO（camelCase 报文）。
//!
//! 字段顺序即输出顺序，与大屏前端约定的报文保持一致。
//! 固定的占位报文不在此定义，由 API 层直接构造 JSON。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 园区下的楼栋（字段沿用数据库列名）。
#[derive(Debug, Serialize)]
pub struct BuildingSummaryDto {
    pub building_code: String,
    pub building_name: String,
    pub yq_app_code: String,
    pub floors_info_json: Option<Value>,
}

/// 待办事项（占位数据）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub create_time: String,
}

/// 设备状态分页列表的记录。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListItemDto {
    pub id: Option<i64>,
    pub sid: Option<String>,
    pub kj_type: String,
    pub sync_type: String,
    pub yq_app_code: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
    pub yq_name: Option<String>,
    pub device_name: String,
    pub device_code: String,
    pub device_type: Option<String>,
    pub building_name: Option<String>,
    pub building_code: Option<String>,
    pub location: Option<String>,
    pub device_status: Option<String>,
    pub person_code: Option<String>,
    pub person_name: Option<String>,
}

/// 设备统计：`"1"` 总数、`"2"` 离线、`"3"` 在线。
#[derive(Debug, Serialize)]
pub struct DeviceStatisticsDto {
    #[serde(rename = "1")]
    pub total: i64,
    #[serde(rename = "2")]
    pub offline: i64,
    #[serde(rename = "3")]
    pub online: i64,
}

/// 报警列表的记录（报警事件分页、未处理报警共用）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmListItemDto {
    pub id: i64,
    pub sid: Option<String>,
    pub kj_type: String,
    pub sync_type: String,
    pub yq_app_code: Option<String>,
    pub create_time: String,
    pub update_time: Option<String>,
    pub yq_name: Option<String>,
    pub device_code: String,
    pub device_name: Option<String>,
    pub device_type: Option<String>,
    pub building_name: Option<String>,
    pub building_code: Option<String>,
    pub location: Option<String>,
    pub person_code: Option<String>,
    pub person_name: Option<String>,
    pub alarm_type: Option<String>,
    pub alarm_level: Option<String>,
    pub alarm_time: String,
    pub alarm_code: String,
    pub alarm_status: Option<String>,
}

/// 报警统计：总数、本月、上月、环比（均为字符串）。
#[derive(Debug, Serialize)]
pub struct AlarmStatisticsDto {
    #[serde(rename = "1")]
    pub total: String,
    #[serde(rename = "2")]
    pub current_month: String,
    #[serde(rename = "3")]
    pub last_month: String,
    #[serde(rename = "4")]
    pub change: String,
}

/// 已绑定账号。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundAccountDto {
    pub id: i64,
    pub yq_app_code: String,
    pub yq_name: String,
    pub account_name: String,
    pub bind_time: String,
}

/// 账号绑定/解绑请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBindRequest {
    pub yq_app_code: Option<String>,
    pub account_name: Option<String>,
}

/// 视频设备通道。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoChannelDto {
    pub id: Option<i64>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
    pub yq_app_code: String,
    pub kj_type: Option<String>,
    pub name: String,
    pub code: String,
    pub gb_id: Option<String>,
    pub stream_id: String,
    pub stream_status: Option<String>,
    pub device_id: String,
    pub device_status: String,
    pub device_code: String,
    pub device_name: String,
    pub protocol_type: Option<String>,
    pub organization_code: String,
    pub organization_name: Option<String>,
}

/// 按报警类型计数。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmTypeCountDto {
    pub alarm_type: Option<String>,
    pub count: i64,
}

/// 趋势点 `{time, count}`。
#[derive(Debug, Serialize)]
pub struct TrendPointDto {
    pub time: String,
    pub count: i64,
}

/// 能耗趋势点 `{time, timeType, common}`。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyPointDto {
    pub time: String,
    pub time_type: Option<String>,
    #[serde(serialize_with = "crate::serialize_compact_f64")]
    pub common: f64,
}

/// 楼栋月用水量。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterBuildingDto {
    pub building_code: String,
    pub year: i32,
    pub month: u32,
    pub water_consumption: String,
}

/// 楼栋月用电量。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricBuildingDto {
    pub building_code: String,
    pub year: i32,
    pub month: u32,
    pub electric_consumption: String,
}

/// 视频 HLS 流请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsStreamRequest {
    pub device_code: Option<String>,
}

/// 视频 HLS 流地址。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsStreamDto {
    pub hls_stream_url: String,
}

/// 楼层平面图。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanDto {
    pub floor: String,
    pub image_url: String,
}

/// 楼层平面图上的设备点位。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDeviceDto {
    pub device_code: String,
    pub device_name: String,
    pub x: i64,
    pub y: i64,
    pub status: String,
}
