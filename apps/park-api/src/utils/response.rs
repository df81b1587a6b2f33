//! HTTP 响应辅助函数
//!
//! 两套响应格式：
//! - 管理后台 CRUD：成功直接返回行数据，失败返回 `{error}`（[`crud_failure`]）
//! - 大屏接口：统一 `{code, msg, data}` 封装（[`success`]、[`bad_request_error`]、[`storage_error`]）
//!
//! 底层错误只写日志，响应中只给出固定的提示信息。

use api_contract::{ApiResponse, ErrorBody, MessageBody};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use park_integration::IntegrationError;
use park_storage::StorageError;
use serde::Serialize;
use tracing::{error, warn};

/// CRUD 成功：直接返回行数据
pub fn crud_ok<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(data)).into_response()
}

/// CRUD 删除成功消息
pub fn crud_message(message: &str) -> Response {
    (StatusCode::OK, Json(MessageBody::new(message))).into_response()
}

/// CRUD 存储失败
pub fn crud_failure(status: StatusCode, message: &str, err: StorageError) -> Response {
    error!(error = %err, "{message}");
    (status, Json(ErrorBody::new(message))).into_response()
}

/// CRUD 目标行不存在，按该操作的失败返回
pub fn crud_missing(status: StatusCode, message: &str, key: &str) -> Response {
    warn!(key, "{message}: row not found");
    (status, Json(ErrorBody::new(message))).into_response()
}

/// CRUD 资源未找到（404）
pub fn not_found_error(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(message))).into_response()
}

/// 大屏成功响应
pub fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// 大屏错误请求响应（缺少必填参数）
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// 大屏内部错误响应
pub fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// 大屏存储错误响应
pub fn storage_error(err: StorageError, message: &str) -> Response {
    error!(error = %err, "{message}");
    internal_error(message)
}

/// 外部网关错误响应
pub fn integration_error(err: IntegrationError, message: &str) -> Response {
    error!(error = %err, "{message}");
    internal_error(message)
}
