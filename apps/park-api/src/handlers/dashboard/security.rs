//! 安全态势（dashSecure）

use super::{
    DashboardQuery, alarm_list_items, device_scope, distinct, owned, placeholders, today,
};
use crate::AppState;
use crate::utils::response::{storage_error, success};
use api_contract::dashboard::{AlarmTypeCountDto, TrendPointDto, VideoChannelDto};
use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::{BucketUnit, DateWindow};
use park_storage::{AlarmFilter, DeviceFilter, StorageError};
use rand_core::{OsRng, RngCore};
use std::collections::HashMap;

/// 视频设备类型
const VIDEO_DEVICE_TYPE: &str = "Video";
/// 未处理的报警状态
const ALARM_PENDING: &str = "报警中";
/// 本月报警类型最多返回的组数
const TOP_ALARM_TYPES: i64 = 10;

/// 视频设备通道列表
///
/// 通道即设备本身：`name`/`code` 取设备名称与编码，
/// 组织编码为 `大写园区编码 + "O0000000"`，组织名称为园区名称。
pub async fn get_video_device_channel_list(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let filter = DeviceFilter {
        yq_app_code: owned(query.yq()),
        device_type: Some(VIDEO_DEVICE_TYPE.to_string()),
        ..DeviceFilter::default()
    };
    let result = async {
        let devices = state.device_store.query_devices(&filter, None).await?;
        let park_codes = distinct(devices.iter().map(|device| device.yq_app_code.as_str()));
        let park_names: HashMap<String, String> = state
            .park_store
            .find_parks_by_codes(&park_codes)
            .await?
            .into_iter()
            .map(|park| (park.yq_app_code, park.yq_name))
            .collect();
        Ok::<_, StorageError>(devices
            .into_iter()
            .map(|device| VideoChannelDto {
                id: None,
                create_time: None,
                update_time: None,
                organization_code: format!("{}O0000000", device.yq_app_code.to_uppercase()),
                organization_name: park_names.get(&device.yq_app_code).cloned(),
                yq_app_code: device.yq_app_code,
                kj_type: None,
                name: device.device_name.clone(),
                code: device.device_code.clone(),
                gb_id: None,
                stream_id: "0".to_string(),
                stream_status: None,
                device_id: "0".to_string(),
                device_status: if device.device_status.as_deref() == Some("1") {
                    "1".to_string()
                } else {
                    "0".to_string()
                },
                device_code: device.device_code,
                device_name: device.device_name,
                protocol_type: None,
            })
            .collect::<Vec<_>>())
    }
    .await;
    match result {
        Ok(data) => success(data),
        Err(err) => storage_error(err, "Failed to fetch video device channel list"),
    }
}

/// 未处理报警（状态为 `报警中`），不分页
pub async fn get_undeal_alarm_list(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let result = async {
        let filter = AlarmFilter {
            device_codes: device_scope(&state, query.yq(), None).await?,
            alarm_status: Some(ALARM_PENDING.to_string()),
            ..AlarmFilter::default()
        };
        let alarms = state.alarm_store.query_alarms(&filter, None).await?;
        alarm_list_items(&state, alarms).await
    }
    .await;
    match result {
        Ok(data) => success(data),
        Err(err) => storage_error(err, "Failed to fetch un-dealt alarm list"),
    }
}

/// 本月各类型报警次数（前 10，数量倒序）
pub async fn get_cur_month_alarm_times(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let (from, to) = DateWindow::current_month(today()).to_utc();
    let result = async {
        let filter = AlarmFilter {
            device_codes: device_scope(&state, query.yq(), None).await?,
            from: Some(from),
            to: Some(to),
            ..AlarmFilter::default()
        };
        state
            .alarm_store
            .count_alarms_by_type(&filter, TOP_ALARM_TYPES)
            .await
    }
    .await;
    match result {
        Ok(groups) => {
            let data: Vec<AlarmTypeCountDto> = groups
                .into_iter()
                .map(|(alarm_type, count)| AlarmTypeCountDto { alarm_type, count })
                .collect();
            success(data)
        }
        Err(err) => storage_error(err, "Failed to fetch current month alarm times DTOs"),
    }
}

/// 报警次数趋势
///
/// - `timePeriod=year`：去年 1 月至本月，按年分组（`YYYY`）
/// - 其他（默认 `month`）：近 12 个月，按月分组（`YYYY-MM`）
///
/// 只返回有报警的分组，时间升序。
pub async fn get_alarm_trends(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let today = today();
    let (window, unit) = match query.time_period.as_deref() {
        Some("year") => (DateWindow::since_last_year(today), BucketUnit::Year),
        _ => (DateWindow::recent_months(today, 12), BucketUnit::Month),
    };
    let (from, to) = window.to_utc();
    let result = async {
        let filter = AlarmFilter {
            device_codes: device_scope(&state, query.yq(), None).await?,
            from: Some(from),
            to: Some(to),
            ..AlarmFilter::default()
        };
        state.alarm_store.alarm_trend(&filter, unit).await
    }
    .await;
    match result {
        Ok(points) => {
            let data: Vec<TrendPointDto> = points
                .into_iter()
                .map(|(time, count)| TrendPointDto { time, count })
                .collect();
            success(data)
        }
        Err(err) => storage_error(err, "Failed to fetch alarm trends"),
    }
}

pub async fn get_cur_month_face_times() -> Response {
    success(placeholders::cur_month_face_times())
}

/// 今日人脸抓拍数（占位随机数，1000~5999）
pub async fn get_today_face_record_count() -> Response {
    success(1000 + OsRng.next_u32() % 5000)
}

pub async fn get_latest_two_records() -> Response {
    success(placeholders::latest_two_face_records())
}

pub async fn get_face_trends() -> Response {
    success(placeholders::face_trends())
}

pub async fn get_last_record_per_device() -> Response {
    success(placeholders::last_record_per_device())
}
