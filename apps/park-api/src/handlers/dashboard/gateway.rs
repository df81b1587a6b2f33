//! 外部网关（视频流、楼层平面图）
//!
//! 只做参数校验与报文转换，实际地址与点位由注入的网关实现提供。

use super::DashboardQuery;
use crate::AppState;
use crate::utils::required_params;
use crate::utils::response::{bad_request_error, integration_error, success};
use api_contract::dashboard::{FloorPlanDto, HlsStreamDto, HlsStreamRequest, RoomDeviceDto};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};

/// 园区编码请求头
pub const YQ_APP_CODE_HEADER: &str = "yq-app-code";

#[derive(serde::Deserialize)]
pub struct FloorPlanPath {
    building_code: String,
}

/// 获取视频设备的 HLS 播放地址
///
/// # 参数
///
/// - 请求头 `yq-app-code`：园区编码
/// - 请求体 `deviceCode`：设备编码
///
/// # 错误处理
///
/// - `400` 缺少设备编码或园区请求头
/// - `500` 视频网关失败
pub async fn get_video_hls_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<HlsStreamRequest>,
) -> Response {
    let yq_app_code = headers
        .get(YQ_APP_CODE_HEADER)
        .and_then(|value| value.to_str().ok());
    let Some([device_code, yq_app_code]) =
        required_params([req.device_code.as_deref(), yq_app_code])
    else {
        return bad_request_error("deviceCode and yq-app-code header are required");
    };
    match state
        .video_gateway
        .hls_stream_url(yq_app_code, device_code)
        .await
    {
        Ok(hls_stream_url) => success(HlsStreamDto { hls_stream_url }),
        Err(err) => integration_error(err, "Failed to get video HLS stream"),
    }
}

/// 楼栋的楼层平面图
pub async fn get_floors_by_building_code(
    State(state): State<AppState>,
    Path(path): Path<FloorPlanPath>,
) -> Response {
    match state
        .floor_plan_gateway
        .floors_by_building(&path.building_code)
        .await
    {
        Ok(floors) => {
            let data: Vec<FloorPlanDto> = floors
                .into_iter()
                .map(|plan| FloorPlanDto {
                    floor: plan.floor,
                    image_url: plan.image_url,
                })
                .collect();
            success(data)
        }
        Err(err) => integration_error(err, "Failed to fetch floors by building code"),
    }
}

/// 楼层平面图上的设备点位，`buildingCode` 与 `floor` 必填
pub async fn get_device_pt_room_list(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let Some([building_code, floor]) =
        required_params([query.building_code.as_deref(), query.floor.as_deref()])
    else {
        return bad_request_error("buildingCode and floor are required");
    };
    match state
        .floor_plan_gateway
        .devices_on_floor(building_code, floor)
        .await
    {
        Ok(points) => {
            let data: Vec<RoomDeviceDto> = points
                .into_iter()
                .map(|point| RoomDeviceDto {
                    device_code: point.device_code,
                    device_name: point.device_name,
                    x: point.x,
                    y: point.y,
                    status: point.status,
                })
                .collect();
            success(data)
        }
        Err(err) => integration_error(err, "Failed to fetch device point room in list"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::dashboard::test_support::body_json;
    use async_trait::async_trait;
    use axum::http::{HeaderValue, StatusCode};
    use park_integration::{IntegrationError, VideoStreamGateway};
    use serde_json::json;
    use std::sync::Arc;

    struct OfflineVideoGateway;

    #[async_trait]
    impl VideoStreamGateway for OfflineVideoGateway {
        async fn hls_stream_url(
            &self,
            _yq_app_code: &str,
            _device_code: &str,
        ) -> Result<String, IntegrationError> {
            Err(IntegrationError::Unavailable("video platform offline".to_string()))
        }
    }

    fn park_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(YQ_APP_CODE_HEADER, HeaderValue::from_static("dl"));
        headers
    }

    fn hls_request(device_code: Option<&str>) -> Json<HlsStreamRequest> {
        Json(HlsStreamRequest {
            device_code: device_code.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn hls_stream_from_gateway() {
        let state = AppState::in_memory();
        let response =
            get_video_hls_stream(State(state), park_headers(), hls_request(Some("cam1"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["data"],
            json!({ "hlsStreamUrl": "http://example.com/hls/cam1.m3u8" })
        );
    }

    #[tokio::test]
    async fn hls_stream_requires_header_and_device() {
        let state = AppState::in_memory();
        let response = get_video_hls_stream(
            State(state.clone()),
            HeaderMap::new(),
            hls_request(Some("cam1")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["msg"],
            "deviceCode and yq-app-code header are required"
        );

        let response = get_video_hls_stream(State(state), park_headers(), hls_request(None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hls_stream_gateway_failure() {
        let state = AppState {
            video_gateway: Arc::new(OfflineVideoGateway),
            ..AppState::in_memory()
        };
        let response =
            get_video_hls_stream(State(state), park_headers(), hls_request(Some("cam1"))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "code": 500, "msg": "Failed to get video HLS stream", "data": null })
        );
    }

    #[tokio::test]
    async fn floors_of_building() {
        let state = AppState::in_memory();
        let response = get_floors_by_building_code(
            State(state),
            Path(FloorPlanPath {
                building_code: "B1".to_string(),
            }),
        )
        .await;
        assert_eq!(
            body_json(response).await["data"],
            json!([
                { "floor": "1F", "imageUrl": "http://example.com/floorplans/B1_1f.png" },
                { "floor": "2F", "imageUrl": "http://example.com/floorplans/B1_2f.png" }
            ])
        );
    }

    #[tokio::test]
    async fn room_devices_require_building_and_floor() {
        let state = AppState::in_memory();
        let response = get_device_pt_room_list(
            State(state.clone()),
            Query(DashboardQuery {
                building_code: Some("B1".to_string()),
                ..DashboardQuery::default()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["msg"],
            "buildingCode and floor are required"
        );

        let response = get_device_pt_room_list(
            State(state),
            Query(DashboardQuery {
                building_code: Some("B1".to_string()),
                floor: Some("1F".to_string()),
                ..DashboardQuery::default()
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(
            body["data"][0],
            json!({ "deviceCode": "DEV001", "deviceName": "烟感器A", "x": 100, "y": 50, "status": "在线" })
        );
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }
}
