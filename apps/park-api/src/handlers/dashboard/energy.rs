//! 能耗态势（dashEnergy）
//!
//! 能耗数据来自通用统计表：来源包含 `water`/`electric`、描述包含 `consumption` 的行。
//! 趋势按本地日期/月份分桶，窗口内每个桶都输出（无数据为 0）。

use super::{DashboardQuery, owned, today};
use crate::AppState;
use crate::utils::required_params;
use crate::utils::response::{bad_request_error, storage_error, success};
use api_contract::dashboard::{ElectricBuildingDto, EnergyPointDto, WaterBuildingDto};
use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::{BucketSeries, BucketUnit, DateWindow, parse_timestamp};
use park_storage::{StatFilter, StorageError};
use serde_json::Value;
use tracing::debug;

const WATER_SOURCE: &str = "water";
const ELECTRIC_SOURCE: &str = "electric";
const CONSUMPTION: &str = "consumption";

/// 趋势窗口：近 7 天按日，近 12 个月按月
#[derive(Debug, Clone, Copy)]
enum Span {
    SevenDays,
    TwelveMonths,
}

impl Span {
    fn window(self) -> (DateWindow, BucketUnit) {
        let today = today();
        match self {
            Span::SevenDays => (DateWindow::recent_days(today, 7), BucketUnit::Day),
            Span::TwelveMonths => (DateWindow::recent_months(today, 12), BucketUnit::Month),
        }
    }
}

fn consumption_filter(source: &str, yq_app_code: Option<&str>, window: &DateWindow) -> StatFilter {
    let (from, to) = window.to_iso_bounds();
    StatFilter {
        source_contains: Some(source.to_string()),
        description_contains: Some(CONSUMPTION.to_string()),
        yq_app_code: owned(yq_app_code),
        related_entity_code: None,
        from: Some(from),
        to: Some(to),
    }
}

/// 查询并分桶累加；时间无法解析或落在窗口外的行忽略，`value_numeric` 为空按 0 计。
async fn consumption_series(
    state: &AppState,
    source: &str,
    yq_app_code: Option<&str>,
    span: Span,
) -> Result<Vec<EnergyPointDto>, StorageError> {
    let (window, unit) = span.window();
    let filter = consumption_filter(source, yq_app_code, &window);
    let stats = state.stat_store.query_stats(&filter).await?;

    let mut series = BucketSeries::seeded(&window, unit);
    for stat in stats {
        let Some(at) = stat
            .time_period_or_timestamp
            .as_deref()
            .and_then(parse_timestamp)
        else {
            debug!(entry_id = stat.entry_id, "skip stat without parsable time");
            continue;
        };
        if window.contains(at) {
            series.add(at, stat.value_numeric.unwrap_or(0.0));
        }
    }
    Ok(series
        .into_points()
        .into_iter()
        .map(|(time, common)| EnergyPointDto {
            time,
            time_type: None,
            common,
        })
        .collect())
}

async fn series_response(
    state: AppState,
    query: DashboardQuery,
    source: &str,
    span: Span,
    message: &str,
) -> Response {
    match consumption_series(&state, source, query.yq(), span).await {
        Ok(points) => success(points),
        Err(err) => storage_error(err, message),
    }
}

/// 近 7 天用水量（含今天），`time` 为 `YYYY-MM-DD`
pub async fn recent_seven_days_water_statistic(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    series_response(
        state,
        query,
        WATER_SOURCE,
        Span::SevenDays,
        "Failed to fetch recent seven days water statistics",
    )
    .await
}

/// 近 12 个月用水量（含本月），`time` 为 `YYYY-MM`
pub async fn recent_months_water_statistic(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    series_response(
        state,
        query,
        WATER_SOURCE,
        Span::TwelveMonths,
        "Failed to fetch recent months water statistics",
    )
    .await
}

pub async fn recent_seven_days_electric_statistic(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    series_response(
        state,
        query,
        ELECTRIC_SOURCE,
        Span::SevenDays,
        "Failed to fetch recent seven days electric statistics",
    )
    .await
}

pub async fn recent_months_electric_statistic(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    series_response(
        state,
        query,
        ELECTRIC_SOURCE,
        Span::TwelveMonths,
        "Failed to fetch recent months electric statistics",
    )
    .await
}

/// 本月用水设备排行：暂无设备级数据，返回空列表
pub async fn cur_month_water_device_rank() -> Response {
    success(Vec::<Value>::new())
}

/// 本月企业用电排行：暂无企业级数据，返回空列表
pub async fn cur_month_electric_enter_rank() -> Response {
    success(Vec::<Value>::new())
}

const BUILDING_PARAMS_REQUIRED: &str = "yqAppCode, year, month, and buildingCode are required";

/// 楼栋某月能耗合计
struct BuildingMonth<'a> {
    yq_app_code: &'a str,
    building_code: &'a str,
    year: i32,
    month: u32,
}

/// 解析楼栋能耗参数。缺参数为 `Err(None)`；年月非法为存储侧的无效参数错误。
fn building_month(query: &DashboardQuery) -> Result<BuildingMonth<'_>, Option<StorageError>> {
    let [yq_app_code, year, month, building_code] = required_params([
        query.yq_app_code.as_deref(),
        query.year.as_deref(),
        query.month.as_deref(),
        query.building_code.as_deref(),
    ])
    .ok_or(None::<StorageError>)?;
    let invalid = |column: &'static str, value: &str| {
        Some(StorageError::Invalid {
            column,
            value: value.to_string(),
        })
    };
    let year: i32 = year.parse().map_err(|_| invalid("year", year))?;
    let month: u32 = month.parse().map_err(|_| invalid("month", month))?;
    Ok(BuildingMonth {
        yq_app_code,
        building_code,
        year,
        month,
    })
}

/// 楼栋当月能耗合计，无数据时为 `"0"`
async fn building_consumption(
    state: &AppState,
    source: &str,
    target: &BuildingMonth<'_>,
) -> Result<String, StorageError> {
    let window =
        DateWindow::month(target.year, target.month).ok_or_else(|| StorageError::Invalid {
            column: "month",
            value: target.month.to_string(),
        })?;
    let filter = StatFilter {
        related_entity_code: Some(target.building_code.to_string()),
        ..consumption_filter(source, Some(target.yq_app_code), &window)
    };
    Ok(state
        .stat_store
        .sum_numeric(&filter)
        .await?
        .map_or_else(|| "0".to_string(), |sum| sum.to_string()))
}

/// 楼栋月用水量
///
/// # 参数
///
/// `yqAppCode`、`year`、`month`、`buildingCode` 均必填。
///
/// # 错误处理
///
/// - `400` 缺少任一参数
/// - `500` 年月非法或查询失败
pub async fn get_water_building_dto(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    const FAILED: &str = "Failed to fetch water building DTO";
    let target = match building_month(&query) {
        Ok(target) => target,
        Err(None) => return bad_request_error(BUILDING_PARAMS_REQUIRED),
        Err(Some(err)) => return storage_error(err, FAILED),
    };
    match building_consumption(&state, WATER_SOURCE, &target).await {
        Ok(water_consumption) => success(WaterBuildingDto {
            building_code: target.building_code.to_string(),
            year: target.year,
            month: target.month,
            water_consumption,
        }),
        Err(err) => storage_error(err, FAILED),
    }
}

/// 楼栋月用电量，参数与错误处理同 [`get_water_building_dto`]
pub async fn get_electric_building_dto(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    const FAILED: &str = "Failed to fetch electric building DTO";
    let target = match building_month(&query) {
        Ok(target) => target,
        Err(None) => return bad_request_error(BUILDING_PARAMS_REQUIRED),
        Err(Some(err)) => return storage_error(err, FAILED),
    };
    match building_consumption(&state, ELECTRIC_SOURCE, &target).await {
        Ok(electric_consumption) => success(ElectricBuildingDto {
            building_code: target.building_code.to_string(),
            year: target.year,
            month: target.month,
            electric_consumption,
        }),
        Err(err) => storage_error(err, FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::dashboard::test_support::{body_json, seed_stat};
    use axum::http::StatusCode;
    use chrono::{Days, NaiveTime, SecondsFormat};
    use domain::local_to_utc;
    use serde_json::json;

    /// 本地某日中午的 ISO-8601 UTC 文本
    fn noon_iso(days_ago: u64) -> String {
        let day = today() - Days::new(days_ago);
        let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0).expect("noon"));
        local_to_utc(noon).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn park_query(code: &str) -> Query<DashboardQuery> {
        Query(DashboardQuery {
            yq_app_code: Some(code.to_string()),
            ..DashboardQuery::default()
        })
    }

    #[tokio::test]
    async fn seven_day_water_sums_per_day() {
        let state = AppState::in_memory();
        seed_stat(&state, "water_meter", "p1", None, &noon_iso(0), Some(2.5)).await;
        seed_stat(&state, "water_meter", "p1", None, &noon_iso(0), Some(3.0)).await;
        seed_stat(&state, "water_meter", "p1", None, &noon_iso(2), None).await;
        seed_stat(&state, "water_meter", "p1", None, &noon_iso(10), Some(99.0)).await;
        seed_stat(&state, "water_meter", "p2", None, &noon_iso(0), Some(7.0)).await;
        seed_stat(&state, "electric_meter", "p1", None, &noon_iso(0), Some(8.0)).await;
        seed_stat(&state, "water_meter", "p1", None, "not a time", Some(1.0)).await;

        let response = recent_seven_days_water_statistic(State(state), park_query("p1")).await;
        let body = body_json(response).await;
        let points = body["data"].as_array().expect("points");
        assert_eq!(points.len(), 7);
        assert_eq!(
            points[6],
            json!({
                "time": today().format("%Y-%m-%d").to_string(),
                "timeType": null,
                "common": 5.5
            })
        );
        assert_eq!(points[4]["common"], 0);
        let total: f64 = points
            .iter()
            .map(|point| point["common"].as_f64().unwrap_or_default())
            .sum();
        assert_eq!(total, 5.5);
    }

    #[tokio::test]
    async fn twelve_month_electric_buckets() {
        let state = AppState::in_memory();
        seed_stat(&state, "electric_meter", "p1", None, &noon_iso(0), Some(4.0)).await;
        seed_stat(&state, "electric_meter", "p1", None, &noon_iso(0), Some(6.0)).await;

        let response =
            recent_months_electric_statistic(State(state), Query(DashboardQuery::default())).await;
        let body = body_json(response).await;
        let points = body["data"].as_array().expect("points");
        assert_eq!(points.len(), 12);
        assert_eq!(points[11]["time"], today().format("%Y-%m").to_string());
        assert_eq!(points[11]["common"], 10);
    }

    #[tokio::test]
    async fn ranks_are_empty() {
        let body = body_json(cur_month_water_device_rank().await).await;
        assert_eq!(body["data"], json!([]));
        let body = body_json(cur_month_electric_enter_rank().await).await;
        assert_eq!(body["data"], json!([]));
    }

    fn building_query(month: &str) -> Query<DashboardQuery> {
        Query(DashboardQuery {
            yq_app_code: Some("p1".to_string()),
            year: Some("2025".to_string()),
            month: Some(month.to_string()),
            building_code: Some("b1".to_string()),
            ..DashboardQuery::default()
        })
    }

    #[tokio::test]
    async fn building_water_sums_the_month() {
        let state = AppState::in_memory();
        seed_stat(&state, "water_meter", "p1", Some("b1"), "2025-05-10T04:00:00.000Z", Some(12.5)).await;
        seed_stat(&state, "water_meter", "p1", Some("b1"), "2025-05-20T04:00:00.000Z", Some(7.5)).await;
        seed_stat(&state, "water_meter", "p1", Some("b2"), "2025-05-20T04:00:00.000Z", Some(100.0)).await;
        seed_stat(&state, "water_meter", "p1", Some("b1"), "2025-07-10T04:00:00.000Z", Some(100.0)).await;

        let response = get_water_building_dto(State(state.clone()), building_query("5")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["data"],
            json!({
                "buildingCode": "b1",
                "year": 2025,
                "month": 5,
                "waterConsumption": "20"
            })
        );

        let response = get_electric_building_dto(State(state), building_query("5")).await;
        assert_eq!(
            body_json(response).await["data"]["electricConsumption"],
            "0"
        );
    }

    #[tokio::test]
    async fn building_dto_requires_all_params() {
        let state = AppState::in_memory();
        let response = get_water_building_dto(
            State(state.clone()),
            Query(DashboardQuery {
                yq_app_code: Some("p1".to_string()),
                year: Some("2025".to_string()),
                ..DashboardQuery::default()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "code": 500,
                "msg": "yqAppCode, year, month, and buildingCode are required",
                "data": null
            })
        );

        let response = get_electric_building_dto(State(state), building_query("13")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["msg"],
            "Failed to fetch electric building DTO"
        );
    }
}
