//! 通用记录 CRUD handlers
//!
//! `record_id` 由存储生成；`record_type` 不做解释，原样保存。

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok};
use crate::utils::validation::record_input;
use api_contract::GenericRecordRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::parse_numeric_key;

const LIST_FAILED: &str = "获取记录失败";
const CREATE_FAILED: &str = "新增记录失败";
const UPDATE_FAILED: &str = "更新记录失败";
const DELETE_FAILED: &str = "删除记录失败";

const FAILURE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

#[derive(serde::Deserialize)]
pub struct RecordPath {
    id: String,
}

pub async fn list_generic_records(State(state): State<AppState>) -> Response {
    match state.record_store.list_records().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(FAILURE, LIST_FAILED, err),
    }
}

pub async fn create_generic_record(
    State(state): State<AppState>,
    Json(req): Json<GenericRecordRequest>,
) -> Response {
    let input = match record_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, CREATE_FAILED, err),
    };
    match state.record_store.create_record(input).await {
        Ok(record) => crud_ok(StatusCode::OK, record),
        Err(err) => crud_failure(FAILURE, CREATE_FAILED, err),
    }
}

pub async fn update_generic_record(
    State(state): State<AppState>,
    Path(path): Path<RecordPath>,
    Json(req): Json<GenericRecordRequest>,
) -> Response {
    let id = match parse_numeric_key(&path.id, "record_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    let input = match record_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(FAILURE, UPDATE_FAILED, err),
    };
    match state.record_store.update_record(id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(FAILURE, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(FAILURE, UPDATE_FAILED, err),
    }
}

pub async fn delete_generic_record(
    State(state): State<AppState>,
    Path(path): Path<RecordPath>,
) -> Response {
    let id = match parse_numeric_key(&path.id, "record_id") {
        Ok(id) => id,
        Err(err) => return crud_failure(FAILURE, DELETE_FAILED, err),
    };
    match state.record_store.delete_record(id).await {
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

    #[tokio::test]
    async fn record_lifecycle() {
        let state = AppState::in_memory();
        let response = create_generic_record(
            State(state.clone()),
            Json(GenericRecordRequest {
                record_type: Some("visitor".to_string()),
                yq_app_code_context: Some("p1".to_string()),
                related_entity_code: None,
                record_data_json: Some(json!({ "name": "张三" })),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "record_id": 1,
                "record_type": "visitor",
                "yq_app_code_context": "p1",
                "related_entity_code": null,
                "record_data_json": { "name": "张三" }
            })
        );

        let response = update_generic_record(
            State(state.clone()),
            Path(RecordPath {
                id: "1".to_string(),
            }),
            Json(GenericRecordRequest {
                record_type: Some("repair".to_string()),
                ..GenericRecordRequest::default()
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["record_type"], "repair");
        assert_eq!(body["yq_app_code_context"], Value::Null);

        let response = delete_generic_record(
            State(state.clone()),
            Path(RecordPath {
                id: "1".to_string(),
            }),
        )
        .await;
        assert_eq!(body_json(response).await, json!({ "message": "删除成功" }));

        let response = delete_generic_record(
            State(state),
            Path(RecordPath {
                id: "1".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "删除记录失败" }));
    }
}
