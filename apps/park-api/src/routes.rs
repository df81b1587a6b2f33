//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers：
//! - 服务状态：/、/health
//! - 管理后台 CRUD：/api/parks、/api/buildings、/api/devices、/api/alarms、
//!   /api/generic-records、/api/generic-stats
//! - 大屏：/api/bigdata/{dashOp,dashBiz,dashSecure,dashEnergy,dashGroup}/*
//! - 外部网关占位：/api/bigdata/{yq-video,yq-dashboard,yq-alarm}/*

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post, put},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/parks", get(list_parks).post(create_park))
        .route(
            "/api/parks/:id",
            get(get_park).put(update_park).delete(delete_park),
        )
        .route("/api/buildings", get(list_buildings).post(create_building))
        .route(
            "/api/buildings/:id",
            put(update_building).delete(delete_building),
        )
        .route("/api/devices", get(list_devices).post(create_device))
        .route("/api/devices/:id", put(update_device).delete(delete_device))
        .route("/api/alarms", get(list_alarms).post(create_alarm))
        .route("/api/alarms/:id", put(update_alarm).delete(delete_alarm))
        .route(
            "/api/generic-records",
            get(list_generic_records).post(create_generic_record),
        )
        .route(
            "/api/generic-records/:id",
            put(update_generic_record).delete(delete_generic_record),
        )
        .route(
            "/api/generic-stats",
            get(list_generic_stats).post(create_generic_stat),
        )
        .route(
            "/api/generic-stats/:id",
            put(update_generic_stat).delete(delete_generic_stat),
        )
        .nest("/api/bigdata", create_dashboard_router())
}

/// 大屏路由（挂载在 /api/bigdata 下）
fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        // 运营态势
        .route("/dashOp/getBuildingByYq", get(get_building_by_yq))
        .route("/dashOp/getYqRentDto", get(get_yq_rent_dto))
        .route("/dashOp/getGyRentDto", get(get_gy_rent_dto))
        .route("/dashOp/financeStatistics", get(finance_statistics))
        .route("/dashOp/getForecastStatistics", get(get_forecast_statistics))
        .route("/dashOp/getInvoiceStatistics", get(get_invoice_statistics))
        .route("/dashOp/getYearAgentStatistic", get(get_year_agent_statistic))
        .route("/dashOp/getLeaseClientDto", get(get_lease_client_dto))
        .route("/dashOp/getAgentClientDto", get(get_agent_client_dto))
        .route("/dashOp/getActivityStatistic", get(get_activity_statistic))
        .route("/dashOp/getPassengerDto", get(get_passenger_dto))
        // 业务感知
        .route("/dashBiz/getUnApprovedList", get(get_un_approved_list))
        .route("/dashBiz/getAllDeviceList", get(get_all_device_list))
        .route("/dashBiz/getDeviceStatistics", get(get_device_statistics))
        .route("/dashBiz/getAlarmList", get(get_alarm_list))
        .route("/dashBiz/getAlarmStatistics", get(get_alarm_statistics))
        .route("/dashBiz/getBindAccounts", get(get_bind_accounts))
        .route("/dashBiz/accountBind", post(account_bind))
        .route("/dashBiz/accountUnBind", post(account_unbind))
        // 安全态势
        .route(
            "/dashSecure/getVideoDeviceChannelList",
            get(get_video_device_channel_list),
        )
        .route("/dashSecure/getUnDealAlarmList", get(get_undeal_alarm_list))
        .route(
            "/dashSecure/getCurMonthAlarmTimesDtos",
            get(get_cur_month_alarm_times),
        )
        .route("/dashSecure/getAlarmTrends", get(get_alarm_trends))
        .route(
            "/dashSecure/getCurMonthFaceTimesDtos",
            get(get_cur_month_face_times),
        )
        .route(
            "/dashSecure/getTodayFaceRecordCount",
            get(get_today_face_record_count),
        )
        .route("/dashSecure/getLatestTwoRecords", get(get_latest_two_records))
        .route("/dashSecure/getFaceTrends", get(get_face_trends))
        .route(
            "/dashSecure/getLastRecordPerDevice",
            get(get_last_record_per_device),
        )
        // 能耗态势
        .route(
            "/dashEnergy/recentSevenDaysWaterStatistic",
            get(recent_seven_days_water_statistic),
        )
        .route(
            "/dashEnergy/recentMonthsWaterStatistic",
            get(recent_months_water_statistic),
        )
        .route(
            "/dashEnergy/recentSevenDaysElectricStatistic",
            get(recent_seven_days_electric_statistic),
        )
        .route(
            "/dashEnergy/recentMonthsElectricStatistic",
            get(recent_months_electric_statistic),
        )
        .route(
            "/dashEnergy/curMonthWaterDeviceRank",
            get(cur_month_water_device_rank),
        )
        .route(
            "/dashEnergy/curMonthElectricEnterRank",
            get(cur_month_electric_enter_rank),
        )
        .route("/dashEnergy/getWaterBuildingDto", get(get_water_building_dto))
        .route(
            "/dashEnergy/getElectricBuildingDto",
            get(get_electric_building_dto),
        )
        // 集团概况
        .route("/dashGroup/getHonorList", get(get_honor_list))
        .route("/dashGroup/getNoticeList", get(get_notice_list))
        .route("/dashGroup/getOne", get(get_group_one))
        .route("/dashGroup/getOutputTaxInfoList", get(get_output_tax_info_list))
        .route(
            "/dashGroup/getRepresentEnterList",
            get(get_represent_enter_list),
        )
        // 外部网关
        .route(
            "/yq-video/videoDevice/getVideoHlsStream",
            post(get_video_hls_stream),
        )
        .route(
            "/yq-dashboard/building/getFloorsByBuildingCode/:building_code",
            get(get_floors_by_building_code),
        )
        .route("/yq-alarm/devicePtRoomIn/getList", get(get_device_pt_room_list))
}
