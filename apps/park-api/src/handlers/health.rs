//! 服务状态

use api_contract::HealthStatus;
use axum::Json;

/// 服务运行提示
pub async fn root() -> &'static str {
    "SmartPark API is running"
}

/// 健康检查
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}
