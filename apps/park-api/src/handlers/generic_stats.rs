//! 通用统计 CRUD handlers
//!
//! 大屏的能耗统计读取这张表，按 `metric_source_api`、`metric_description`
//! 与 `time_period_or_timestamp` 过滤。

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok};
use crate::utils::validation::stat_input;
use api_contract::GenericStatRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::parse_numeric_key;

const LIST_FAILED: &str = "获取统计失败";
const CREATE_FAILED: &str = "新增统计失败";
const UPDATE_FAILED: &str = "更新统计失败";
const DELETE_FAILED: &str = "删除统计失败";

const FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

#[derive(serde::Deserialize)]
pub struct StatPath {
    id: String,
}

pub async fn list_generic_stats(State(state): State<AppState>) -> Response {
    match state.stat_store.list_stats().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(FAILURE, LIST_FAILED, err),
    }
}

pub async fn create_generic_stat(
    State(state): State<AppState>,
    Json(req): Json<GenericStatRequest>,
) -> Response {
    let input = match stat_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    match state.stat_store.create_stat(input).await {
        Ok(record) => crud_ok(StatusCode::OK, record),
        Err(err) => crud_failure(FAILURE, CREATE_FAILED, err),
    }
}

pub async fn update_generic_stat(
    State(state): State<AppState>,
    Path(path): Path<StatPath>,
    Json(req): Json<GenericStatRequest>,
) -> Response {
    let id = match parse_numeric_key(&path.id, "entry_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    let input = match stat_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    match state.stat_store.update_stat(id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(FAILURE, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, UPDATE_FAILED, err),
    }
}

pub async fn delete_generic_stat(
    State(state): State<AppState>,
    Path(path): Path<StatPath>,
) -> Response {
    let id = match parse_numeric_key(&path.id, "entry_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, DELETE_FAILED, err),
    };
    match state.stat_store.delete_stat(id).await {
        Ok(true) => crud_message("删除成功"),
        Ok(false) => crud_missing(FAILURE, DELETE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, DELETE_FAILED, err),
    }
}
