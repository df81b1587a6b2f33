//! 集团概况（dashGroup），全部为占位报文

use super::{DashboardQuery, placeholders};
use crate::utils::response::success;
use axum::{extract::Query, response::Response};

/// 荣誉列表
pub async fn get_honor_list() -> Response {
    success(placeholders::honor_list())
}

/// 通知公告
pub async fn get_notice_list() -> Response {
    success(placeholders::notice_list())
}

/// 资产信息；`yqAppCode` 原样回显，缺省为 `dl`
pub async fn get_group_one(Query(query): Query<DashboardQuery>) -> Response {
    success(placeholders::group_one(query.yq()))
}

/// 近三年产值与纳税
pub async fn get_output_tax_info_list() -> Response {
    success(placeholders::output_tax_info_list())
}

pub async fn get_represent_enter_list() -> Response {
    success(placeholders::represent_enter_list())
}
