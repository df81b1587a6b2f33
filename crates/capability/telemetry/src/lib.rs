//! 追踪与请求 ID 生成。

use tracing_subscriber::{EnvFilter, fmt};

/// 响应头：请求 ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// 响应头：追踪 ID
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 初始化 tracing。
///
/// `RUST_LOG` 优先，未设置或无法解析时使用 `default_filter`（再失败则为 info）。
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 沿用调用方传入的 request_id（为空时生成新的）。
pub fn request_ids_from(incoming: Option<&str>) -> RequestIds {
    let mut ids = new_request_ids();
    if let Some(request_id) = incoming.map(str::trim).filter(|value| !value.is_empty()) {
        ids.request_id = request_id.to_string();
    }
    ids
}
