//! 运营态势（dashOp）
//!
//! 楼栋列表来自数据库，其余租赁、财务、招商、活跃指标为占位报文。

use super::DashboardQuery;
use super::placeholders;
use crate::AppState;
use crate::utils::response::{bad_request_error, storage_error, success};
use api_contract::dashboard::BuildingSummaryDto;
use axum::{
    extract::{Query, State},
    response::Response,
};

/// 园区下的楼栋列表
///
/// # 参数
///
/// - `yqAppCode`: 园区编码（必填）
///
/// # 返回
///
/// `data` 为 `[{building_code, building_name, yq_app_code, floors_info_json}]`。
///
/// # 错误处理
///
/// - `400` `yqAppCode is required`
/// - `500` `Failed to fetch building list`
pub async fn get_building_by_yq(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let Some(yq_app_code) = query.yq() else {
        return bad_request_error("yqAppCode is required");
    };
    match state
        .building_store
        .list_buildings_by_park(yq_app_code)
        .await
    {
        Ok(items) => {
            let data: Vec<BuildingSummaryDto> = items
                .into_iter()
                .map(|record| BuildingSummaryDto {
                    building_code: record.building_code,
                    building_name: record.building_name,
                    yq_app_code: record.yq_app_code,
                    floors_info_json: record.floors_info_json,
                })
                .collect();
            success(data)
        }
        Err(err) => storage_error(err, "Failed to fetch building list"),
    }
}

/// 租赁态势：在租园区
pub async fn get_yq_rent_dto() -> Response {
    success(placeholders::yq_rent())
}

/// 租赁态势：在租公寓
pub async fn get_gy_rent_dto() -> Response {
    success(placeholders::gy_rent())
}

/// 财务态势：收入情况
pub async fn finance_statistics() -> Response {
    success(placeholders::finance_statistics())
}

/// 财务态势：收入预测
pub async fn get_forecast_statistics() -> Response {
    success(placeholders::forecast_statistics())
}

/// 财务态势：开票情况
pub async fn get_invoice_statistics() -> Response {
    success(placeholders::invoice_statistics())
}

/// 招商态势：新增、成交、退租客户数
pub async fn get_year_agent_statistic() -> Response {
    success(placeholders::year_agent_statistic())
}

pub async fn get_lease_client_dto() -> Response {
    success(placeholders::client_trend())
}

pub async fn get_agent_client_dto() -> Response {
    success(placeholders::client_trend())
}

/// 活跃态势：园区人数、车流量等
pub async fn get_activity_statistic() -> Response {
    success(placeholders::activity_statistic())
}

/// 活跃态势：人流趋势
pub async fn get_passenger_dto() -> Response {
    success(placeholders::passenger_trend())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::dashboard::test_support::{body_json, seed_building};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn buildings_of_one_park() {
        let state = AppState::in_memory();
        seed_building(&state, "b1", "p1", "一号楼").await;
        seed_building(&state, "b2", "p2", "二号楼").await;

        let response = get_building_by_yq(
            State(state),
            Query(DashboardQuery {
                yq_app_code: Some("p1".to_string()),
                ..DashboardQuery::default()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "code": 0,
                "msg": "SUCCESS",
                "data": [{
                    "building_code": "b1",
                    "building_name": "一号楼",
                    "yq_app_code": "p1",
                    "floors_info_json": null
                }]
            })
        );
    }

    #[tokio::test]
    async fn static_payloads_are_wrapped() {
        let body = body_json(get_year_agent_statistic().await).await;
        assert_eq!(
            body,
            json!({
                "code": 0,
                "msg": "SUCCESS",
                "data": { "newLeaseClient": 15, "newAgentClient": 8, "newLeaveClient": 2 }
            })
        );
        let body = body_json(get_lease_client_dto().await).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    }
}
