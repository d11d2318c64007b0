use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::TimeUtils;

/// Bar intervals the dashboard offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
pub enum Timeframe {
    OneMinute,
    #[default]
    FiveMinutes,
    FifteenMinutes,
    OneHour,
}

impl Timeframe {
    /// Provider shorthand, also what the selector shows
    pub fn as_str(&self) -> &'static str {
        TimeUtils::interval_to_string(self.interval_ms())
    }

    pub fn interval_ms(&self) -> i64 {
        match self {
            Timeframe::OneMinute => TimeUtils::MS_IN_MIN,
            Timeframe::FiveMinutes => TimeUtils::MS_IN_5_MIN,
            Timeframe::FifteenMinutes => TimeUtils::MS_IN_15_MIN,
            Timeframe::OneHour => TimeUtils::MS_IN_H,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.interval_ms() as u64)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn shorthand_matches_provider_intervals() {
        let all: Vec<&str> = Timeframe::iter().map(|t| t.as_str()).collect();
        assert_eq!(all, vec!["1m", "5m", "15m", "1h"]);
    }

    #[test]
    fn default_is_five_minutes() {
        assert_eq!(Timeframe::default(), Timeframe::FiveMinutes);
        assert_eq!(Timeframe::default().duration(), Duration::from_secs(300));
    }
}
