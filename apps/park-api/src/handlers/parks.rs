//! 园区 CRUD handlers
//!
//! 提供园区资源的增删改查接口：
//! - GET /api/parks - 列出园区
//! - GET /api/parks/{code} - 获取园区
//! - POST /api/parks - 新增园区（201）
//! - PUT /api/parks/{code} - 全量更新园区
//! - DELETE /api/parks/{code} - 删除园区
//!
//! 园区的写操作失败统一返回 400（其余资源为 500）。

use crate::AppState;
use crate::utils::response::{crud_failure, crud_message, crud_missing, crud_ok, not_found_error};
use crate::utils::validation::park_input;
use api_contract::ParkRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use park_storage::require_field;

const LIST_FAILED: &str = "获取园区失败";
const CREATE_FAILED: &str = "Create failed";
const UPDATE_FAILED: &str = "Update failed";
const DELETE_FAILED: &str = "Delete failed";

#[derive(serde::Deserialize)]
pub struct ParkPath {
    id: String,
}

/// 列出园区
pub async fn list_parks(State(state): State<AppState>) -> Response {
    match state.park_store.list_parks().await {
        Ok(items) => crud_ok(StatusCode::OK, items),
        Err(err) => crud_failure(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED, err),
    }
}

/// 获取园区
///
/// 按 `yq_app_code` 查询，不存在时返回 `404 {error: "Park not found"}`。
pub async fn get_park(State(state): State<AppState>, Path(path): Path<ParkPath>) -> Response {
    match state.park_store.find_park(&path.id).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => not_found_error("Park not found"),
        Err(err) => crud_failure(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED, err),
    }
}

/// 新增园区
///
/// # 参数
///
/// - `state`: 应用状态，包含 `park_store`
/// - `req`: 请求体，字段与 `parks` 表列同名
///
/// # 返回
///
/// 成功时返回 `201 CREATED` 和新建的园区行。
///
/// # 错误处理
///
/// - `400 BAD REQUEST` `{error: "Create failed"}`：主键或名称缺失、主键重复、存储错误
pub async fn create_park(State(state): State<AppState>, Json(req): Json<ParkRequest>) -> Response {
    let yq_app_code = match require_field(req.yq_app_code.clone(), "yq_app_code") {
        Ok(code) => code,
        Err(err) => return crud_failure(StatusCode::BAD_REQUEST, CREATE_FAILED, err),
    };
    let input = match park_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(StatusCode::BAD_REQUEST, CREATE_FAILED, err),
    };
    match state.park_store.create_park(&yq_app_code, input).await {
        Ok(record) => crud_ok(StatusCode::CREATED, record),
        Err(err) => crud_failure(StatusCode::BAD_REQUEST, CREATE_FAILED, err),
    }
}

/// 更新园区
///
/// 全量替换非主键列，请求体中缺省的可选字段置空；请求体中的 `yq_app_code` 被忽略。
/// 园区不存在时与其他失败一样返回 `400 {error: "Update failed"}`。
pub async fn update_park(
    State(state): State<AppState>,
    Path(path): Path<ParkPath>,
    Json(req): Json<ParkRequest>,
) -> Response {
    let input = match park_input(req) {
        Ok(input) => input,
        Err(err) => return crud_failure(StatusCode::BAD_REQUEST, UPDATE_FAILED, err),
    };
    match state.park_store.update_park(&path.id, input).await {
        Ok(Some(record)) => crud_ok(StatusCode::OK, record),
        Ok(None) => crud_missing(StatusCode::BAD_REQUEST, UPDATE_FAILED, &path.id),
        Err(err) => crud_failure(StatusCode::BAD_REQUEST, UPDATE_FAILED, err),
    }
}

/// 删除园区
pub async fn delete_park(State(state): State<AppState>, Path(path): Path<ParkPath>) -> Response {
    match state.park_store.delete_park(&path.id).await {
        Ok(true) => crud_message("Deleted successfully"),
        Ok(false) => crud_missing(StatusCode::BAD_REQUEST, DELETE_FAILED, &path.id),
        Err(err) => crud_failure(StatusCode::BAD_REQUEST, DELETE_FAILED, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use http_body_util::BodyExt;
    use park_storage::{ParkInput, ParkRecord, ParkStore, StorageError};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn body_json(response: Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json")
    }

    fn park_request(code: Option<&str>, name: Option<&str>) -> ParkRequest {
        ParkRequest {
            yq_app_code: code.map(str::to_string),
            yq_name: name.map(str::to_string),
            kj_type: Some("A".to_string()),
            extra_details_json: Some(json!({ "area": 12 })),
        }
    }

    fn path(id: &str) -> Path<ParkPath> {
        Path(ParkPath { id: id.to_string() })
    }

    #[tokio::test]
    async fn create_then_update_keeps_key() {
        let state = AppState::in_memory();
        let response = create_park(
            State(state.clone()),
            Json(park_request(Some("p1"), Some("园区一"))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = update_park(
            State(state.clone()),
            path("p1"),
            Json(ParkRequest {
                yq_app_code: Some("ignored".to_string()),
                yq_name: Some("园区二".to_string()),
                ..ParkRequest::default()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "yq_app_code": "p1",
                "yq_name": "园区二",
                "kj_type": null,
                "extra_details_json": null
            })
        );

        let response = get_park(State(state), path("p1")).await;
        assert_eq!(body_json(response).await["yq_name"], "园区二");
    }

    #[tokio::test]
    async fn create_failures_are_400() {
        let state = AppState::in_memory();
        let response = create_park(State(state.clone()), Json(park_request(Some("p1"), None))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Create failed" }));

        let first = create_park(
            State(state.clone()),
            Json(park_request(Some("p1"), Some("园区一"))),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);
        let duplicate = create_park(
            State(state),
            Json(park_request(Some("p1"), Some("园区一"))),
        )
        .await;
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_park_update_and_delete_are_400() {
        let state = AppState::in_memory();
        let response = update_park(
            State(state.clone()),
            path("nope"),
            Json(park_request(None, Some("x"))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Update failed" }));

        let response = delete_park(State(state), path("nope")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Delete failed" }));
    }

    struct BrokenParkStore;

    #[async_trait]
    impl ParkStore for BrokenParkStore {
        async fn list_parks(&self) -> Result<Vec<ParkRecord>, StorageError> {
            Err(StorageError::Lock)
        }

        async fn find_park(&self, _: &str) -> Result<Option<ParkRecord>, StorageError> {
            Err(StorageError::Lock)
        }

        async fn find_parks_by_codes(
            &self,
            _: &[String],
        ) -> Result<Vec<ParkRecord>, StorageError> {
            Err(StorageError::Lock)
        }

        async fn create_park(&self, _: &str, _: ParkInput) -> Result<ParkRecord, StorageError> {
            Err(StorageError::Lock)
        }

        async fn update_park(
            &self,
            _: &str,
            _: ParkInput,
        ) -> Result<Option<ParkRecord>, StorageError> {
            Err(StorageError::Lock)
        }

        async fn delete_park(&self, _: &str) -> Result<bool, StorageError> {
            Err(StorageError::Lock)
        }
    }

    #[tokio::test]
    async fn list_failure_is_localized_500() {
        let mut state = AppState::in_memory();
        state.park_store = Arc::new(BrokenParkStore);
        let response = list_parks(State(state)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "获取园区失败" }));
    }
}
