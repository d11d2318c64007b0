use chrono::{DateTime, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";

    /// Convert interval in milliseconds to provider shorthand (e.g. `5m`, `1h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_5_MIN => "5m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_D => "1d",
            _ => "unknown",
        }
    }
}

/// Used for axis labels and tooltips
pub fn epoch_sec_to_local(epoch_sec: i64) -> String {
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format(TimeUtils::STANDARD_TIME_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Wall-clock time of `when`, for "last updated" labels
pub fn clock_time(when: DateTime<Utc>) -> String {
    when.with_timezone(&Local)
        .format(TimeUtils::CLOCK_FORMAT)
        .to_string()
}

pub fn how_many_seconds_ago(past: DateTime<Utc>) -> i64 {
    (Utc::now() - past).num_seconds()
}
