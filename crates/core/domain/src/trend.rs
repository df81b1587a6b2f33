//! 报警环比。

/// 计算环比变化（百分比）。
///
/// - 上月为 0、本月大于 0：100
/// - 上月为 0、本月为 0：0
/// - 其他：`(本月 - 上月) / 上月 * 100`，四舍五入到两位小数
pub fn month_over_month_change(current: i64, last: i64) -> f64 {
    if last > 0 {
        let change = (current - last) as f64 / last as f64 * 100.0;
        (change * 100.0).round() / 100.0
    } else if current > 0 {
        100.0
    } else {
        0.0
    }
}

/// 固定两位小数输出（`"12.50"`）
pub fn format_change(change: f64) -> String {
    format!("{change:.2}")
}
