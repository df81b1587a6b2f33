//! 报警 CRUD handlers
//!
//! - GET /api/alarms - 列出报警
//! - POST /api/alarms - 新增报警（`api_record_id` 可选，缺省时由存储生成）
//! - PUT /api/alarms/{id} - 全量更新报警
//! - DELETE /api/alarms/{id} - 删除报警
//!
//! 路径中的 id 必须是整数，否则按该操作失败处理。

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok};
use crate::utils::validation::alarm_input;
use api_contract::AlarmRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::parse_numeric_key;

const LIST_FAILED: &str = "获取报警失败";
const CREATE_FAILED: &str = "新增报警失败";
const UPDATE_FAILED: &str = "更新报警失败";
const DELETE_FAILED: &str = "删除报警失败";

const FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

#[derive(serde::Deserialize)]
pub struct AlarmPath {
    id: String,
}

pub async fn list_alarms(State(state): State<AppState>) -> Response {
    match state.alarm_store.list_alarms().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(FAILURE, LIST_FAILED, err),
    }
}

/// 新增报警
///
/// `alarm_time` 接受 RFC 3339 或本地时间 `YYYY-MM-DD HH:MM:SS`，无法解析时新增失败。
pub async fn create_alarm(
    State(state): State<AppState>,
    Json(req): Json<AlarmRequest>,
) -> Response {
    let api_record_id = req.api_record_id;
    let input = match alarm_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    match state.alarm_store.create_alarm(api_record_id, input).await {
        Ok(record) => crud_ok(StatusCode::OK, record),
        Err(err) => crud_failure(FAILURE, CREATE_FAILED, err),
    }
}

pub async fn update_alarm(
    State(state): State<AppState>,
    Path(path): Path<AlarmPath>,
    Json(req): Json<AlarmRequest>,
) -> Response {
    let id = match parse_numeric_key(&path.id, "api_record_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    let input = match alarm_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    match state.alarm_store.update_alarm(id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(FAILURE, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, UPDATE_FAILED, err),
    }
}

pub async fn delete_alarm(State(state): State<AppState>, Path(path): Path<AlarmPath>) -> Response {
    let id = match parse_numeric_key(&path.id, "api_record_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, DELETE_FAILED, err),
    };
    match state.alarm_store.delete_alarm(id).await {
        Ok(true) => crud_message("删除成功"),
        Ok(false) => crud_missing(FAILURE, DELETE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, DELETE_FAILED, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json")
    }

    fn request(id: Option<i64>, time: &str) -> AlarmRequest {
        AlarmRequest {
            api_record_id: id,
            device_code: Some("d1".to_string()),
            alarm_type: Some("烟雾".to_string()),
            alarm_level: Some("高".to_string()),
            alarm_time: Some(time.to_string()),
            alarm_status: Some("报警中".to_string()),
            location_at_alarm: Some("大厅".to_string()),
        }
    }

    fn path(id: &str) -> Path<AlarmPath> {
        Path(AlarmPath { id: id.to_string() })
    }

    #[tokio::test]
    async fn create_with_generated_and_supplied_ids() {
        let state = AppState::in_memory();
        let response = create_alarm(
            State(state.clone()),
            Json(request(None, "2025-05-20T08:00:00Z")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["api_record_id"], 1);
        assert_eq!(body["alarm_time"], "2025-05-20T08:00:00Z");

        let response = create_alarm(
            State(state.clone()),
            Json(request(Some(100), "2025-05-21T08:00:00Z")),
        )
        .await;
        assert_eq!(body_json(response).await["api_record_id"], 100);

        let response = update_alarm(
            State(state),
            path("100"),
            Json(request(None, "2025-05-22T08:00:00Z")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["api_record_id"], 100);
        assert_eq!(body["alarm_time"], "2025-05-22T08:00:00Z");
    }

    #[tokio::test]
    async fn unparsable_time_fails_create() {
        let state = AppState::in_memory();
        let response = create_alarm(State(state), Json(request(None, "not a time"))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "新增报警失败" }));
    }

    #[tokio::test]
    async fn non_numeric_and_missing_ids_fail() {
        let state = AppState::in_memory();
        let response = delete_alarm(State(state.clone()), path("abc")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "删除报警失败" }));

        let response = update_alarm(
            State(state),
            path("7"),
            Json(request(None, "2025-05-22T08:00:00Z")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "更新报警失败" }));
    }
}
