use poll_promise::Promise;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::DASHBOARD;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::market::{BarRequest, BarSeries};
use crate::domain::DashboardResult;
use crate::ui::app::DashboardApp;

pub(crate) struct FetchOutcome {
    pub(crate) request: BarRequest,
    pub(crate) result: DashboardResult<BarSeries>,
    elapsed: Duration,
}

impl FetchOutcome {
    pub(crate) fn new(request: BarRequest, result: DashboardResult<BarSeries>, elapsed: Duration) -> Self {
        Self {
            request,
            result,
            elapsed,
        }
    }

    pub(crate) fn elapsed_time(&self) -> Duration {
        self.elapsed
    }
}

impl DashboardApp {
    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }

    /// Start a background fetch for the current symbol and timeframe.
    /// While one is in flight the request is remembered and issued afterwards.
    pub(super) fn request_fetch(&mut self, reason: &str) {
        if self.fetch_promise.is_some() {
            self.refetch_requested = true;
            return;
        }
        let Some(market) = self.market.as_ref().map(Arc::clone) else {
            return;
        };

        let request = self.session.bar_request();
        let runtime = self.runtime.clone();
        self.last_fetch_started = Some(Instant::now());

        log::debug!("Fetch {} {} ({})", request.symbol, request.interval, reason);

        let promise = Promise::spawn_thread("bar_fetch", move || {
            let start = Instant::now();
            let result = runtime.block_on(market.fetch(&request));
            FetchOutcome::new(request, result, start.elapsed())
        });
        self.fetch_promise = Some(promise);
    }

    pub(super) fn poll_fetch(&mut self) {
        let Some(promise) = self.fetch_promise.take() else {
            return;
        };
        match promise.try_take() {
            Ok(outcome) => self.apply_fetch_outcome(outcome),
            Err(pending) => {
                self.fetch_promise = Some(pending);
                return;
            }
        }

        if std::mem::take(&mut self.refetch_requested) {
            self.request_fetch("queued while busy");
        }
    }

    /// Results for a symbol/timeframe the user has since moved away from are dropped.
    pub(crate) fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.request != self.session.bar_request() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!(
                    "Discarding {} bars, view is now {}",
                    outcome.request.interval,
                    self.session.view.timeframe
                );
            }
            return;
        }

        match &outcome.result {
            Ok(series) => log::info!(
                "📈 {} {} bars ready in {:?}",
                series.bars.len(),
                series.interval,
                outcome.elapsed_time()
            ),
            Err(e) => log::warn!("⚠️  Fetch failed after {:?}: {}", outcome.elapsed_time(), e),
        }
        self.session.feed.record(outcome.result);
    }

    /// Fixed-interval pull; the first call (no fetch yet) fires immediately.
    pub(super) fn schedule_refresh(&mut self) {
        if self.is_fetching() {
            return;
        }
        let due = self
            .last_fetch_started
            .is_none_or(|started| started.elapsed() >= DASHBOARD.refresh_interval);
        if due {
            self.request_fetch("scheduled refresh");
        }
    }

    /// User asked for fresh bars now, bypassing the cache
    pub(super) fn force_refresh(&mut self) {
        if let Some(market) = &self.market {
            market.invalidate();
        }
        self.request_fetch("manual refresh");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::persistence::JsonSnapshotStore;
    use crate::domain::{Bar, DashboardError, Timeframe};
    use crate::models::DashboardSession;
    use chrono::{TimeZone, Utc};

    fn app(runtime: &tokio::runtime::Runtime) -> DashboardApp {
        DashboardApp::with_parts(
            DashboardSession::default(),
            None,
            runtime.handle().clone(),
            JsonSnapshotStore::new("unused-snapshot-dir"),
        )
    }

    fn series(interval: Timeframe, close: f64) -> BarSeries {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 6, 14, 30, 0).unwrap();
        BarSeries {
            interval,
            bars: Arc::new(vec![Bar::new(t0, close, close, close, close, 1.0)]),
            fetched_at: t0,
        }
    }

    #[test]
    fn outcome_for_current_view_is_recorded() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        let request = app.session.bar_request();

        app.apply_fetch_outcome(FetchOutcome::new(
            request.clone(),
            Ok(series(Timeframe::FiveMinutes, 6120.0)),
            Duration::from_millis(5),
        ));
        assert_eq!(app.session.feed.bars()[0].close, 6120.0);

        app.apply_fetch_outcome(FetchOutcome::new(
            request,
            Err(DashboardError::FetchError("timeout".to_string())),
            Duration::from_secs(10),
        ));
        assert!(app.session.feed.is_stale());
    }

    #[test]
    fn outcome_for_old_timeframe_is_dropped() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        let old_request = app.session.bar_request();
        app.session.set_timeframe(Timeframe::OneHour);

        app.apply_fetch_outcome(FetchOutcome::new(
            old_request,
            Ok(series(Timeframe::FiveMinutes, 6120.0)),
            Duration::from_millis(5),
        ));
        assert!(app.session.feed.bars().is_empty());
        assert!(app.session.feed.last_attempt().is_none());
    }

    #[test]
    fn without_market_data_nothing_is_spawned() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.schedule_refresh();
        assert!(!app.is_fetching());
        app.poll_fetch();
        assert!(!app.is_fetching());
    }
}
