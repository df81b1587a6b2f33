//! 智慧园区管理后台 HTTP API。
//!
//! - `/api/{parks,buildings,devices,alarms,generic-records,generic-stats}`：管理后台 CRUD
//! - `/api/bigdata/*`：大屏聚合接口与外部网关占位接口
//! - 每个请求注入 request_id/trace_id

mod handlers;
mod middleware;
mod routes;
mod utils;

use axum::{Router, middleware as axum_middleware};
use park_config::AppConfig;
use park_integration::{
    FloorPlanGateway, PlaceholderFloorPlanGateway, PlaceholderVideoGateway, VideoStreamGateway,
};
use park_storage::{
    AlarmStore, BuildingStore, DeviceStore, GenericRecordStore, GenericStatStore, ParkStore,
    PgAlarmStore, PgBuildingStore, PgDeviceStore, PgGenericRecordStore, PgGenericStatStore,
    PgParkStore, connect_pool, ensure_schema,
};
use park_telemetry::init_tracing;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::request_context;
use crate::routes::create_api_router;

/// 应用共享状态：各实体存储与外部网关，启动时构造一次。
#[derive(Clone)]
pub struct AppState {
    pub park_store: Arc<dyn ParkStore>,
    pub building_store: Arc<dyn BuildingStore>,
    pub device_store: Arc<dyn DeviceStore>,
    pub alarm_store: Arc<dyn AlarmStore>,
    pub record_store: Arc<dyn GenericRecordStore>,
    pub stat_store: Arc<dyn GenericStatStore>,
    pub video_gateway: Arc<dyn VideoStreamGateway>,
    pub floor_plan_gateway: Arc<dyn FloorPlanGateway>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing(&config.log_filter);

    let pool = connect_pool(&config.database_url, config.db_max_connections).await?;
    if config.auto_migrate {
        ensure_schema(&pool).await?;
        info!("schema ensured");
    }

    let state = AppState {
        park_store: Arc::new(PgParkStore::new(pool.clone())),
        building_store: Arc::new(PgBuildingStore::new(pool.clone())),
        device_store: Arc::new(PgDeviceStore::new(pool.clone())),
        alarm_store: Arc::new(PgAlarmStore::new(pool.clone())),
        record_store: Arc::new(PgGenericRecordStore::new(pool.clone())),
        stat_store: Arc::new(PgGenericStatStore::new(pool)),
        video_gateway: Arc::new(PlaceholderVideoGateway::new(config.media_base_url.clone())),
        floor_plan_gateway: Arc::new(PlaceholderFloorPlanGateway::new(
            config.media_base_url.clone(),
        )),
    };

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(addr = %config.http_addr, "park-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// 组装完整的应用路由与中间件。
pub fn build_app(state: AppState) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // 注入 request_id/trace_id
        .layer(axum_middleware::from_fn(request_context))
}

#[cfg(test)]
impl AppState {
    /// 内存存储 + 占位网关，用于测试。
    pub fn in_memory() -> Self {
        use park_storage::{
            InMemoryAlarmStore, InMemoryBuildingStore, InMemoryDeviceStore,
            InMemoryGenericRecordStore, InMemoryGenericStatStore, InMemoryParkStore,
        };
        Self {
            park_store: Arc::new(InMemoryParkStore::new()),
            building_store: Arc::new(InMemoryBuildingStore::new()),
            device_store: Arc::new(InMemoryDeviceStore::new()),
            alarm_store: Arc::new(InMemoryAlarmStore::new()),
            record_store: Arc::new(InMemoryGenericRecordStore::new()),
            stat_store: Arc::new(InMemoryGenericStatStore::new()),
            video_gateway: Arc::new(PlaceholderVideoGateway::default()),
            floor_plan_gateway: Arc::new(PlaceholderFloorPlanGateway::default()),
        }
    }
}
