//! 楼栋 CRUD handlers
//!
//! - GET /api/buildings - 列出楼栋
//! - POST /api/buildings - 新增楼栋
//! - PUT /api/buildings/{code} - 全量更新楼栋
//! - DELETE /api/buildings/{code} - 删除楼栋

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok};
use crate::utils::validation::building_input;
use api_contract::BuildingRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::require_field;

const LIST_FAILED: &str = "获取楼栋失败";
const CREATE_FAILED: &str = "新增楼栋失败";
const UPDATE_FAILED: &str = "更新楼栋失败";
const DELETE_FAILED: &str = "删除楼栋失败";

const FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

#[derive(serde::Deserialize)]
pub struct BuildingPath {
    id: String,
}

pub async fn list_buildings(State(state): State<AppState>) -> Response {
    match state.building_store.list_buildings().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(FAILURE, LIST_FAILED, err),
    }
}

/// 新增楼栋，`building_code`、`yq_app_code`、`building_name` 必填
pub async fn create_building(
    State(state): State<AppState>,
    Json(req): Json<BuildingRequest>,
) -> Response {
    let building_code = match require_field(req.building_code.clone(), "building_code") {
        Ok(code) => code,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    let input = match building_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    match state
        .building_store
        .create_building(&building_code, input)
        .await
    {
        Ok(record) => crud_ok(StatusCode::OK, record),
        Err(err) => crud_failure(FAILURE, CREATE_FAILED, err),
    }
}

pub async fn update_building(
    State(state): State<AppState>,
    Path(path): Path<BuildingPath>,
    Json(req): Json<BuildingRequest>,
) -> Response {
    let input = match building_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    match state.building_store.update_building(&path.id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(FAILURE, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, UPDATE_FAILED, err),
    }
}

pub async fn delete_building(
    State(state): State<AppState>,
    Path(path): Path<BuildingPath>,
) -> Response {
    match state.building_store.delete_building(&path.id).await {
        Ok(true) => crud_message("删除成功"),
        Ok(false) => crud_missing(FAILURE, DELETE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, DELETE_FAILED, err),
    }
}
