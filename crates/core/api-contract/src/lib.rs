//! 稳定的 DTO 与 API 响应契约。
//!
//! - 管理后台 CRUD：请求体字段与数据库列同名（snake_case），
//!   失败返回 [`ErrorBody`]，删除成功返回 [`MessageBody`]
//! - 大屏接口：统一使用 [`ApiResponse`] 封装，分页数据使用 [`Page`]

pub mod dashboard;

use domain::PageRequest;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// 大屏成功响应码
pub const SUCCESS_CODE: i32 = 0;
/// 大屏失败响应码（不区分 400/500，HTTP 状态码另行设置）
pub const ERROR_CODE: i32 = 500;
/// 大屏成功消息
pub const SUCCESS_MSG: &str = "SUCCESS";

/// 大屏 API 响应封装：`{code, msg, data}`。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG.to_string(),
            data: Some(data),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE,
            msg: msg.into(),
            data: None,
        }
    }
}

impl<T> ApiResponse<Page<T>> {
    /// 分页成功响应。
    pub fn paged(records: Vec<T>, total: i64, page: PageRequest) -> Self {
        Self::success(Page::new(records, total, page))
    }
}

/// 分页数据：`{records, total, size, current, pages}`。
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: i64,
    pub size: i64,
    pub current: i64,
    pub pages: i64,
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, total: i64, page: PageRequest) -> Self {
        Self {
            records,
            total,
            size: page.size,
            current: page.current,
            pages: page.pages(total),
        }
    }
}

/// CRUD 失败响应体。
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 操作成功的消息体。
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 健康检查响应。
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// 园区写入请求体（新增与全量更新共用）。
#[derive(Debug, Default, Deserialize)]
pub struct ParkRequest {
    pub yq_app_code: Option<String>,
    pub yq_name: Option<String>,
    pub kj_type: Option<String>,
    pub extra_details_json: Option<Value>,
}

/// 楼栋写入请求体。
#[derive(Debug, Default, Deserialize)]
pub struct BuildingRequest {
    pub building_code: Option<String>,
    pub yq_app_code: Option<String>,
    pub building_name: Option<String>,
    pub floors_info_json: Option<Value>,
}

/// 设备写入请求体。
#[derive(Debug, Default, Deserialize)]
pub struct DeviceRequest {
    pub device_code: Option<String>,
    pub api_record_id: Option<i64>,
    pub yq_app_code: Option<String>,
    pub building_code: Option<String>,
    pub device_name: Option<String>,
    pub device_type: Option<String>,
    pub device_status: Option<String>,
    pub location: Option<String>,
    pub responsible_person_name: Option<String>,
    pub channels_info_json: Option<Value>,
}

/// 报警写入请求体；`api_record_id` 缺省时由存储生成。
#[derive(Debug, Default, Deserialize)]
pub struct AlarmRequest {
    pub api_record_id: Option<i64>,
    pub device_code: Option<String>,
    pub alarm_type: Option<String>,
    pub alarm_level: Option<String>,
    pub alarm_time: Option<String>,
    pub alarm_status: Option<String>,
    pub location_at_alarm: Option<String>,
}

/// 通用记录写入请求体。
#[derive(Debug, Default, Deserialize)]
pub struct GenericRecordRequest {
    pub record_type: Option<String>,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code: Option<String>,
    pub record_data_json: Option<Value>,
}

/// 通用统计写入请求体。
#[derive(Debug, Default, Deserialize)]
pub struct GenericStatRequest {
    pub metric_source_api: Option<String>,
    pub metric_description: Option<String>,
    pub yq_app_code_context: Option<String>,
    pub related_entity_code_context: Option<String>,
    pub time_period_or_timestamp: Option<String>,
    pub value_numeric: Option<f64>,
    pub value_text: Option<String>,
    pub value_complex_json: Option<Value>,
}

/// 整数值的浮点数按整数输出（`12` 而不是 `12.0`）。
pub fn serialize_compact_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
