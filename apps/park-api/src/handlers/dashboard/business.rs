//! 业务感知（dashBiz）
//!
//! - 待办事宜：占位分页数据
//! - 设备状态：设备分页列表与在线/离线统计
//! - 报警事件：报警分页列表与环比统计
//! - 空间直连：已绑定账号（占位）与绑定/解绑动作

use super::{DashboardQuery, alarm_list_items, device_list_items, device_scope, owned, today};
use crate::AppState;
use crate::utils::non_blank;
use crate::utils::response::{storage_error, success};
use api_contract::dashboard::{
    AccountBindRequest, AlarmStatisticsDto, BoundAccountDto, DeviceStatisticsDto, TodoItemDto,
};
use api_contract::{ApiResponse, MessageBody};
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Duration, Local};
use domain::{DateWindow, format_change, month_over_month_change};
use park_storage::{AlarmFilter, DeviceFilter, StorageError};
use rand_core::{OsRng, RngCore};
use tracing::info;

/// 待办事项占位总数
const PENDING_ITEM_TOTAL: i64 = 50;

/// 待办事宜分页（占位）
///
/// 每页生成 `size` 条（最多 50 条），`createTime` 为当前时间往前随机 0~29 天。
pub async fn get_un_approved_list(Query(query): Query<DashboardQuery>) -> Response {
    let page = query.page();
    let now = Local::now();
    let records: Vec<TodoItemDto> = (1..=page.size.min(PENDING_ITEM_TOTAL))
        .map(|index| {
            let id = page.offset().saturating_add(index);
            let days_ago = i64::from(OsRng.next_u32() % 30);
            TodoItemDto {
                id,
                title: format!("待办事项 {id}"),
                description: format!("这是待办事项 {id} 的描述。"),
                status: "待处理".to_string(),
                create_time: (now - Duration::days(days_ago))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            }
        })
        .collect();
    Json(ApiResponse::paged(records, PENDING_ITEM_TOTAL, page)).into_response()
}

/// 设备状态分页列表
///
/// # 参数
///
/// - `yqAppCode`: 园区编码（相等）
/// - `deviceName`: 设备名称（包含）
/// - `deviceStatus`: 设备状态（相等）
/// - `current` / `size`: 分页
///
/// # 流程
///
/// 1. 按条件查询当前页设备与总数
/// 2. 批量查出关联的园区与楼栋，拼装园区名称、楼栋名称
/// 3. `createTime`/`updateTime` 均取 `last_updated`
pub async fn get_all_device_list(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let page = query.page();
    let filter = DeviceFilter {
        yq_app_code: owned(query.yq()),
        name_contains: owned(non_blank(query.device_name.as_deref())),
        status: owned(non_blank(query.device_status.as_deref())),
        device_type: None,
    };
    let result = async {
        let devices = state.device_store.query_devices(&filter, Some(page)).await?;
        let total = state.device_store.count_devices(&filter).await?;
        Ok::<_, StorageError>((device_list_items(&state, devices).await?, total))
    }
    .await;
    match result {
        Ok((records, total)) => Json(ApiResponse::paged(records, total, page)).into_response(),
        Err(err) => storage_error(err, "Failed to fetch device list"),
    }
}

/// 设备统计：`"1"` 总数、`"2"` 离线（状态 `0`）、`"3"` 在线（状态 `1`）
pub async fn get_device_statistics(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let base = DeviceFilter {
        yq_app_code: owned(query.yq()),
        ..DeviceFilter::default()
    };
    let with_status = |status: &str| DeviceFilter {
        status: Some(status.to_string()),
        ..base.clone()
    };
    let result = async {
        Ok::<_, StorageError>(DeviceStatisticsDto {
            total: state.device_store.count_devices(&base).await?,
            offline: state.device_store.count_devices(&with_status("0")).await?,
            online: state.device_store.count_devices(&with_status("1")).await?,
        })
    }
    .await;
    match result {
        Ok(data) => success(data),
        Err(err) => storage_error(err, "Failed to fetch device statistics"),
    }
}

/// 报警事件分页列表（报警时间倒序）
///
/// 园区、设备名称条件经设备表解析为设备编码集合，两者同时提供时取交集。
pub async fn get_alarm_list(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let page = query.page();
    let result = async {
        let filter = AlarmFilter {
            device_codes: device_scope(
                &state,
                query.yq(),
                non_blank(query.device_name.as_deref()),
            )
            .await?,
            alarm_type: owned(non_blank(query.alarm_type.as_deref())),
            alarm_status: owned(non_blank(query.alarm_status.as_deref())),
            ..AlarmFilter::default()
        };
        let alarms = state.alarm_store.query_alarms(&filter, Some(page)).await?;
        let total = state.alarm_store.count_alarms(&filter).await?;
        Ok::<_, StorageError>((alarm_list_items(&state, alarms).await?, total))
    }
    .await;
    match result {
        Ok((records, total)) => Json(ApiResponse::paged(records, total, page)).into_response(),
        Err(err) => storage_error(err, "Failed to fetch alarm list"),
    }
}

/// 报警统计：总数、本月、上月与环比（均为字符串）
pub async fn get_alarm_statistics(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let today = today();
    let result = async {
        let base = AlarmFilter {
            device_codes: device_scope(&state, query.yq(), None).await?,
            ..AlarmFilter::default()
        };
        let in_window = |window: DateWindow| {
            let (from, to) = window.to_utc();
            AlarmFilter {
                from: Some(from),
                to: Some(to),
                ..base.clone()
            }
        };
        let total = state.alarm_store.count_alarms(&base).await?;
        let current = state
            .alarm_store
            .count_alarms(&in_window(DateWindow::current_month(today)))
            .await?;
        let last = state
            .alarm_store
            .count_alarms(&in_window(DateWindow::previous_month(today)))
            .await?;
        Ok::<_, StorageError>(AlarmStatisticsDto {
            total: total.to_string(),
            current_month: current.to_string(),
            last_month: last.to_string(),
            change: format_change(month_over_month_change(current, last)),
        })
    }
    .await;
    match result {
        Ok(data) => success(data),
        Err(err) => storage_error(err, "Failed to fetch alarm statistics"),
    }
}

fn bound_accounts() -> Vec<BoundAccountDto> {
    [
        (1, "rcsj", "睿创世界", "admin_rcsj", "2023-01-01 10:00:00"),
        (2, "dl", "达利集团", "admin_dl", "2023-02-15 11:30:00"),
        (3, "testpark", "测试园区", "admin_test", "2023-03-20 14:00:00"),
    ]
    .into_iter()
    .map(|(id, code, name, account, bind_time)| BoundAccountDto {
        id,
        yq_app_code: code.to_string(),
        yq_name: name.to_string(),
        account_name: account.to_string(),
        bind_time: bind_time.to_string(),
    })
    .collect()
}

/// 已绑定账号分页（占位）
pub async fn get_bind_accounts(Query(query): Query<DashboardQuery>) -> Response {
    let page = query.page();
    let accounts = bound_accounts();
    let total = accounts.len() as i64;
    Json(ApiResponse::paged(page.slice(&accounts), total, page)).into_response()
}

/// 绑定账号（占位，仅记录日志）
pub async fn account_bind(Json(req): Json<AccountBindRequest>) -> Response {
    let account = req.account_name.unwrap_or_default();
    let yq_app_code = req.yq_app_code.unwrap_or_default();
    info!(account = %account, yq_app_code = %yq_app_code, "binding account to park");
    success(MessageBody::new(format!(
        "Account {account} bound to {yq_app_code} successfully."
    )))
}

/// 解绑账号（占位，仅记录日志）
pub async fn account_unbind(Json(req): Json<AccountBindRequest>) -> Response {
    let account = req.account_name.unwrap_or_default();
    let yq_app_code = req.yq_app_code.unwrap_or_default();
    info!(account = %account, yq_app_code = %yq_app_code, "unbinding account from park");
    success(MessageBody::new(format!(
        "Account {account} unbound from {yq_app_code} successfully."
    )))
}
