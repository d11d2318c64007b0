//! Market data and refresh configuration.

use std::time::Duration;

/// Settings for the market data request
pub struct MarketSettings {
    /// The single instrument this dashboard follows (Yahoo Finance ticker)
    pub symbol: &'static str,
    /// How far back each fetch reaches
    pub lookback_days: i64,
    /// Base URL of the chart endpoint; the symbol is appended as a path segment
    pub chart_base_url: &'static str,
    /// Upper bound on a single fetch so the UI never hangs on the provider
    pub request_timeout: Duration,
}

/// Settings for the shared bar cache
pub struct CacheSettings {
    /// Cached bars younger than this are served without a new fetch
    pub ttl: Duration,
}

/// Settings for the chart overlays
pub struct IndicatorSettings {
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
}

/// The Master Dashboard Configuration
pub struct DashboardConfig {
    pub market: MarketSettings,
    pub cache: CacheSettings,
    pub indicators: IndicatorSettings,
    /// Fixed pull interval for fresh bars
    pub refresh_interval: Duration,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    market: MarketSettings {
        symbol: "ES=F",
        lookback_days: 3,
        chart_base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
        request_timeout: Duration::from_secs(10),
    },
    cache: CacheSettings {
        ttl: Duration::from_secs(60),
    },
    indicators: IndicatorSettings {
        ema_fast_period: 5,
        ema_slow_period: 13,
    },
    refresh_interval: Duration::from_secs(60),
};
