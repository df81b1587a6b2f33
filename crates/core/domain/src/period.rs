//! 时间窗口与分桶。
//!
//! 窗口均以服务器本地时间表示（闭区间，结束时刻精确到毫秒），
//! 查询存储前再换算为 UTC。分桶前会为窗口内的每个日历桶预置 0，
//! 没有数据的日期/月份同样出现在结果中。

use chrono::{
    DateTime, Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime,
    SecondsFormat, TimeZone, Utc,
};
use std::collections::HashMap;

/// 分桶粒度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketUnit {
    Day,
    Month,
    Year,
}

impl BucketUnit {
    /// chrono 格式串（桶 key）
    pub fn key_format(self) -> &'static str {
        match self {
            BucketUnit::Day => "%Y-%m-%d",
            BucketUnit::Month => "%Y-%m",
            BucketUnit::Year => "%Y",
        }
    }

    /// Postgres `to_char` 格式串，与 [`BucketUnit::key_format`] 输出一致
    pub fn sql_pattern(self) -> &'static str {
        match self {
            BucketUnit::Day => "YYYY-MM-DD",
            BucketUnit::Month => "YYYY-MM",
            BucketUnit::Year => "YYYY",
        }
    }

    /// 计算时间点所属桶的 key
    pub fn key(self, at: NaiveDateTime) -> String {
        at.format(self.key_format()).to_string()
    }
}

/// 本地时间闭区间 `[start, end]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date + Days::new(1)) - Duration::milliseconds(1)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

impl DateWindow {
    /// 最近 `days` 天（含今天），从首日 00:00 到今天 23:59:59.999。
    pub fn recent_days(today: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1) - 1);
        Self {
            start: start_of_day(today - Days::new(span)),
            end: end_of_day(today),
        }
    }

    /// 最近 `months` 个月（含当月），从首月 1 日到当月月末。
    pub fn recent_months(today: NaiveDate, months: u32) -> Self {
        let current = first_of_month(today);
        let first = current - Months::new(months.max(1) - 1);
        Self {
            start: start_of_day(first),
            end: end_of_day(current + Months::new(1) - Days::new(1)),
        }
    }

    /// 指定年月的整月窗口；月份不在 1..=12 时返回 `None`。
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))? - Days::new(1);
        Some(Self {
            start: start_of_day(first),
            end: end_of_day(last),
        })
    }

    /// 当月
    pub fn current_month(today: NaiveDate) -> Self {
        Self::recent_months(today, 1)
    }

    /// 上月
    pub fn previous_month(today: NaiveDate) -> Self {
        Self::current_month(first_of_month(today) - Days::new(1))
    }

    /// 去年 1 月 1 日至当月月末（按年统计报警趋势）。
    pub fn since_last_year(today: NaiveDate) -> Self {
        let this_year = first_of_year(today);
        let last_year = first_of_year(this_year - Days::new(1));
        Self {
            start: start_of_day(last_year),
            end: Self::current_month(today).end,
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }

    /// 窗口内按粒度依次排列的全部桶 key
    pub fn bucket_keys(&self, unit: BucketUnit) -> Vec<String> {
        let last = self.end.date();
        let mut keys = Vec::new();
        let mut cursor = match unit {
            BucketUnit::Day => self.start.date(),
            BucketUnit::Month => first_of_month(self.start.date()),
            BucketUnit::Year => first_of_year(self.start.date()),
        };
        while cursor <= last {
            keys.push(unit.key(start_of_day(cursor)));
            cursor = match unit {
                BucketUnit::Day => cursor + Days::new(1),
                BucketUnit::Month => cursor + Months::new(1),
                BucketUnit::Year => cursor + Months::new(12),
            };
        }
        keys
    }

    /// 换算为 UTC 时刻
    pub fn to_utc(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (local_to_utc(self.start), local_to_utc(self.end))
    }

    /// ISO-8601 字符串边界（`2025-05-20T16:00:00.000Z`），用于比较文本时间列。
    pub fn to_iso_bounds(&self) -> (String, String) {
        let (start, end) = self.to_utc();
        (
            start.to_rfc3339_opts(SecondsFormat::Millis, true),
            end.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

/// 本地时间转 UTC；夏令时空档内的时刻按 UTC 解释。
pub fn local_to_utc(at: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&at)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&at))
}

/// 以本地时间 `YYYY-MM-DD HH:mm:ss` 展示
pub fn display_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// 解析统计表中的时间/周期文本，返回本地时间。
///
/// 支持 RFC 3339（带时区，换算为本地）、`YYYY-MM-DD HH:MM:SS`、
/// `YYYY-MM-DDTHH:MM:SS`、`YYYY-MM-DD` 与 `YYYY-MM`。
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// 解析请求中的时刻（报警时间等）为 UTC。
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_timestamp(raw).map(local_to_utc)
}

/// 预置 0 的分桶累加器。
#[derive(Debug, Clone)]
pub struct BucketSeries {
    unit: BucketUnit,
    buckets: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl BucketSeries {
    /// 为窗口内每个桶预置 0
    pub fn seeded(window: &DateWindow, unit: BucketUnit) -> Self {
        let buckets: Vec<(String, f64)> = window
            .bucket_keys(unit)
            .into_iter()
            .map(|key| (key, 0.0))
            .collect();
        let index = buckets
            .iter()
            .enumerate()
            .map(|(position, (key, _))| (key.clone(), position))
            .collect();
        Self {
            unit,
            buckets,
            index,
        }
    }

    /// 累加到所属桶；不在窗口内的时间点被忽略并返回 `false`。
    pub fn add(&mut self, at: NaiveDateTime, value: f64) -> bool {
        match self.index.get(&self.unit.key(at)) {
            Some(&position) => {
                self.buckets[position].1 += value;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// 按时间顺序输出 `(桶 key, 合计)`
    pub fn into_points(self) -> Vec<(String, f64)> {
        self.buckets
    }
}
