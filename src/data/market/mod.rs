//! Market data: provider contract, the Yahoo chart provider, a shared TTL cache
//! and the last-good holder the shell renders from.

pub mod cache;
pub mod feed;
pub mod yahoo;

pub use cache::CachedMarketData;
pub use feed::MarketFeed;
pub use yahoo::YahooChartProvider;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::config::DASHBOARD;
use crate::domain::{Bar, DashboardResult, Timeframe};

/// What to fetch. Symbol and interval double as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BarRequest {
    pub symbol: String,
    pub interval: Timeframe,
    pub lookback: Duration,
}

impl BarRequest {
    /// Uses the configured lookback window
    pub fn new(symbol: impl Into<String>, interval: Timeframe) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            lookback: Duration::days(DASHBOARD.market.lookback_days),
        }
    }

    pub fn cache_key(&self) -> (String, Timeframe) {
        (self.symbol.clone(), self.interval)
    }
}

/// Bars as handed to the shell. Cloning shares the bar vector.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub interval: Timeframe,
    pub bars: Arc<Vec<Bar>>,
    /// When the provider actually produced these bars (not when the cache served them)
    pub fetched_at: DateTime<Utc>,
}

impl BarSeries {
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Bars ascending by timestamp. Gaps are possible; spacing is not guaranteed.
    /// Fails with `FetchError` when the provider is unreachable or answers garbage.
    async fn fetch_bars(&self, request: &BarRequest) -> DashboardResult<Vec<Bar>>;

    /// A unique identifier for this implementation (used in logs).
    fn signature(&self) -> &'static str;
}
