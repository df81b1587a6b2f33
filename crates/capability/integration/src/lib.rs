//! 外部系统集成。
//!
//! - [`VideoStreamGateway`]：视频平台，按设备换取 HLS 播放地址
//! - [`FloorPlanGateway`]：楼层平面图与图上设备点位
//!
//! 目前只有占位实现，返回固定的示例地址与点位；
//! 接入真实平台时实现对应 trait 并在启动时注入即可。

use async_trait::async_trait;
use tracing::debug;

/// 占位实现默认的媒体地址前缀
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://example.com";

/// 集成错误。
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

/// 楼层平面图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    pub floor: String,
    pub image_url: String,
}

/// 平面图上的设备点位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePoint {
    pub device_code: String,
    pub device_name: String,
    pub x: i64,
    pub y: i64,
    pub status: String,
}

/// 视频流网关抽象。
#[async_trait]
pub trait VideoStreamGateway: Send + Sync {
    /// 获取设备的 HLS 播放地址
    async fn hls_stream_url(
        &self,
        yq_app_code: &str,
        device_code: &str,
    ) -> Result<String, IntegrationError>;
}

/// 楼层平面图网关抽象。
#[async_trait]
pub trait FloorPlanGateway: Send + Sync {
    async fn floors_by_building(
        &self,
        building_code: &str,
    ) -> Result<Vec<FloorPlan>, IntegrationError>;

    async fn devices_on_floor(
        &self,
        building_code: &str,
        floor: &str,
    ) -> Result<Vec<DevicePoint>, IntegrationError>;
}

fn trim_base(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// 占位视频网关：`{base}/hls/{deviceCode}.m3u8`。
#[derive(Debug, Clone)]
pub struct PlaceholderVideoGateway {
    base_url: String,
}

impl PlaceholderVideoGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }
}

impl Default for PlaceholderVideoGateway {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_BASE_URL)
    }
}

#[async_trait]
impl VideoStreamGateway for PlaceholderVideoGateway {
    async fn hls_stream_url(
        &self,
        yq_app_code: &str,
        device_code: &str,
    ) -> Result<String, IntegrationError> {
        debug!(yq_app_code, device_code, "placeholder hls stream");
        Ok(format!("{}/hls/{device_code}.m3u8", self.base_url))
    }
}

/// 占位平面图网关：每栋楼两层（1F、2F），每层两个示例点位。
#[derive(Debug, Clone)]
pub struct PlaceholderFloorPlanGateway {
    base_url: String,
}

impl PlaceholderFloorPlanGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }
}

impl Default for PlaceholderFloorPlanGateway {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_BASE_URL)
    }
}

#[async_trait]
impl FloorPlanGateway for PlaceholderFloorPlanGateway {
    async fn floors_by_building(
        &self,
        building_code: &str,
    ) -> Result<Vec<FloorPlan>, IntegrationError> {
        Ok(["1F", "2F"]
            .into_iter()
            .map(|floor| FloorPlan {
                floor: floor.to_string(),
                image_url: format!(
                    "{}/floorplans/{building_code}_{}.png",
                    self.base_url,
                    floor.to_lowercase()
                ),
            })
            .collect())
    }

    async fn devices_on_floor(
        &self,
        building_code: &str,
        floor: &str,
    ) -> Result<Vec<DevicePoint>, IntegrationError> {
        debug!(building_code, floor, "placeholder floor devices");
        Ok(vec![
            DevicePoint {
                device_code: "DEV001".to_string(),
                device_name: "烟感器A".to_string(),
                x: 100,
                y: 50,
                status: "在线".to_string(),
            },
            DevicePoint {
                device_code: "DEV002".to_string(),
                device_name: "摄像头B".to_string(),
                x: 250,
                y: 120,
                status: "离线".to_string(),
            },
        ])
    }
}
