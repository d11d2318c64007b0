use chrono::{DateTime, Utc};

use crate::data::market::BarSeries;
use crate::domain::{Bar, DashboardResult};

/// Last successfully fetched bars plus the outcome of the latest attempt.
///
/// A failed fetch keeps the previous bars on screen and marks them stale
/// instead of blanking the chart.
#[derive(Debug, Clone, Default)]
pub struct MarketFeed {
    latest: Option<BarSeries>,
    last_error: Option<String>,
    last_attempt: Option<DateTime<Utc>>,
}

impl MarketFeed {
    pub fn record(&mut self, result: DashboardResult<BarSeries>) {
        self.last_attempt = Some(Utc::now());
        match result {
            Ok(series) => {
                self.latest = Some(series);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Forget everything (e.g. after switching timeframe)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn latest(&self) -> Option<&BarSeries> {
        self.latest.as_ref()
    }

    pub fn bars(&self) -> &[Bar] {
        self.latest
            .as_ref()
            .map(|series| series.bars.as_slice())
            .unwrap_or(&[])
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_attempt(&self) -> Option<DateTime<Utc>> {
        self.last_attempt
    }

    /// Showing old bars because the latest fetch failed
    pub fn is_stale(&self) -> bool {
        self.latest.is_some() && self.last_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardError, Timeframe};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn series(close: f64) -> BarSeries {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 6, 14, 30, 0).unwrap();
        BarSeries {
            interval: Timeframe::FiveMinutes,
            bars: Arc::new(vec![Bar::new(t0, close, close, close, close, 1.0)]),
            fetched_at: t0,
        }
    }

    #[test]
    fn failure_keeps_last_good_bars_and_marks_stale() {
        let mut feed = MarketFeed::default();
        assert!(feed.bars().is_empty());
        assert!(!feed.is_stale());

        feed.record(Ok(series(6120.0)));
        assert_eq!(feed.bars()[0].close, 6120.0);
        assert!(!feed.is_stale());

        feed.record(Err(DashboardError::FetchError("timeout".to_string())));
        assert_eq!(feed.bars()[0].close, 6120.0);
        assert!(feed.is_stale());
        assert!(feed.last_error().unwrap().contains("timeout"));

        feed.record(Ok(series(6125.0)));
        assert_eq!(feed.bars()[0].close, 6125.0);
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn failure_without_data_is_an_error_not_stale() {
        let mut feed = MarketFeed::default();
        feed.record(Err(DashboardError::FetchError("dns".to_string())));
        assert!(!feed.is_stale());
        assert!(feed.last_error().is_some());
        assert!(feed.last_attempt().is_some());

        feed.clear();
        assert!(feed.last_error().is_none());
    }
}
