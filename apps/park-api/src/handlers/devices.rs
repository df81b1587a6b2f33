//! 设备 CRUD handlers
//!
//! - GET /api/devices - 列出设备
//! - POST /api/devices - 新增设备
//! - PUT /api/devices/{code} - 全量更新设备
//! - DELETE /api/devices/{code} - 删除设备
//!
//! `last_updated` 由存储在每次写入时刷新，请求体中不接受该字段。

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok};
use crate::utils::validation::device_input;
use api_contract::DeviceRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::require_field;

const LIST_FAILED: &str = "获取设备失败";
const CREATE_FAILED: &str = "新增设备失败";
const UPDATE_FAILED: &str = "更新设备失败";
const DELETE_FAILED: &str = "删除设备失败";

const FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

#[derive(serde::Deserialize)]
pub struct DevicePath {
    id: String,
}

/// 列出设备
pub async fn list_devices(State(state): State<AppState>) -> Response {
    match state.device_store.list_devices().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(FAILURE, LIST_FAILED, err),
    }
}

/// 新增设备
///
/// # 参数
///
/// - `state`: 应用状态，包含 `device_store`
/// - `req`: 请求体，`device_code`、`yq_app_code`、`device_name` 必填
///
/// # 返回
///
/// 成功时返回 `200 OK` 和新建的设备行（含存储生成的 `last_updated`）。
///
/// # 错误处理
///
/// - `500` `{error: "新增设备失败"}`：必填列缺失、编码重复、外键不满足或其他存储错误
pub async fn create_device(
    State(state): State<AppState>,
    Json(req): Json<DeviceRequest>,
) -> Response {
    let device_code = match require_field(req.device_code.clone(), "device_code") {
        Ok(code) => code,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    let input = match device_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    match state.device_store.create_device(&device_code, input).await {
        Ok(record) => crud_ok(StatusCode::OK, record),
        Err(err) => crud_failure(FAILURE, CREATE_FAILED, err),
    }
}

/// 更新设备
pub async fn update_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    Json(req): Json<DeviceRequest>,
) -> Response {
    let input = match device_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    match state.device_store.update_device(&path.id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(FAILURE, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, UPDATE_FAILED, err),
    }
}

/// 删除设备
pub async fn delete_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
) -> Response {
    match state.device_store.delete_device(&path.id).await {
        Ok(true) => crud_message("删除成功"),
        Ok(false) => crud_missing(FAILURE, DELETE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, DELETE_FAILED, err),
    }
}
