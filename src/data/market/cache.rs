use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::DASHBOARD;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::market::{BarRequest, BarSeries, MarketDataProvider};
use crate::domain::{Bar, DashboardResult, Timeframe};

type CacheKey = (String, Timeframe);

#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: Instant,
    fetched_at: DateTime<Utc>,
    bars: Arc<Vec<Bar>>,
}

/// Short-lived cache in front of a provider, keyed by (symbol, interval).
///
/// Safe to share between sessions behind an `Arc`: readers clone the `Arc`
/// of a finished bar vector, writers replace whole entries. The provider is
/// never awaited while a lock is held. Purely advisory: callers must accept
/// data up to one TTL old.
pub struct CachedMarketData<P> {
    provider: P,
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl<P: MarketDataProvider> CachedMarketData<P> {
    /// Uses the configured TTL
    pub fn new(provider: P) -> Self {
        Self::with_ttl(provider, DASHBOARD.cache.ttl)
    }

    pub fn with_ttl(provider: P, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Cached bars if younger than the TTL, otherwise a fresh fetch.
    /// Failures are passed through and never cached.
    pub async fn fetch(&self, request: &BarRequest) -> DashboardResult<BarSeries> {
        let key = request.cache_key();

        if let Some(entry) = self.fresh_entry(&key) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_cache_events {
                log::info!("[cache] hit {} {}", key.0, key.1);
            }
            return Ok(BarSeries {
                interval: request.interval,
                bars: entry.bars,
                fetched_at: entry.fetched_at,
            });
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_events {
            log::info!("[cache] miss {} {}", key.0, key.1);
        }

        let bars = match self.provider.fetch_bars(request).await {
            Ok(bars) => Arc::new(bars),
            Err(e) => {
                log::warn!("⚠️  {} failed: {}", self.provider.signature(), e);
                return Err(e);
            }
        };
        let entry = CacheEntry {
            stored_at: Instant::now(),
            fetched_at: Utc::now(),
            bars,
        };

        log::info!(
            "{} returned {} bars for {} {}",
            self.provider.signature(),
            entry.bars.len(),
            key.0,
            key.1
        );

        let series = BarSeries {
            interval: request.interval,
            bars: Arc::clone(&entry.bars),
            fetched_at: entry.fetched_at,
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry);
        Ok(series)
    }

    /// Drops every cached entry (e.g. a manual "refresh now")
    pub fn invalidate(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn fresh_entry(&self, key: &CacheKey) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DashboardError;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Counts calls; fails while `failing` is set.
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    #[async_trait]
    impl MarketDataProvider for CountingProvider {
        fn signature(&self) -> &'static str {
            "Counting"
        }

        async fn fetch_bars(&self, request: &BarRequest) -> DashboardResult<Vec<Bar>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(DashboardError::FetchError("provider down".to_string()));
            }
            let t0 = Utc.with_ymd_and_hms(2025, 1, 6, 14, 30, 0).unwrap();
            let price = 6100.0 + call as f64;
            let step = chrono::Duration::milliseconds(request.interval.interval_ms());
            Ok(vec![
                Bar::new(t0, price, price + 1.0, price - 1.0, price, 100.0),
                Bar::new(t0 + step, price, price + 1.0, price - 1.0, price + 0.5, 80.0),
            ])
        }
    }

    fn request(interval: Timeframe) -> BarRequest {
        BarRequest::new("ES=F", interval)
    }

    #[tokio::test]
    async fn second_request_inside_ttl_is_served_from_cache() {
        let cache = CachedMarketData::with_ttl(CountingProvider::default(), Duration::from_secs(60));

        let first = cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap();
        let second = cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap();

        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first.bars, &second.bars));
        assert_eq!(first.fetched_at, second.fetched_at);
    }

    #[tokio::test]
    async fn entries_are_keyed_by_symbol_and_interval() {
        let cache = CachedMarketData::with_ttl(CountingProvider::default(), Duration::from_secs(60));

        cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap();
        let hourly = cache.fetch(&request(Timeframe::OneHour)).await.unwrap();
        cache
            .fetch(&BarRequest::new("NQ=F", Timeframe::FiveMinutes))
            .await
            .unwrap();

        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 3);
        assert_eq!(hourly.interval, Timeframe::OneHour);
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        let cache = CachedMarketData::with_ttl(CountingProvider::default(), Duration::ZERO);

        let first = cache.fetch(&request(Timeframe::OneMinute)).await.unwrap();
        let second = cache.fetch(&request(Timeframe::OneMinute)).await.unwrap();

        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 2);
        assert_ne!(first.last_close(), second.last_close());
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = CachedMarketData::with_ttl(CountingProvider::default(), Duration::from_secs(60));
        cache.provider().failing.store(true, Ordering::SeqCst);

        let err = cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap_err();
        assert!(matches!(err, DashboardError::FetchError(_)));

        cache.provider().failing.store(false, Ordering::SeqCst);
        assert!(cache.fetch(&request(Timeframe::FiveMinutes)).await.is_ok());
        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_a_new_fetch() {
        let cache = CachedMarketData::with_ttl(CountingProvider::default(), Duration::from_secs(60));
        cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap();
        cache.invalidate();
        cache.fetch(&request(Timeframe::FiveMinutes)).await.unwrap();
        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn shared_cache_serves_concurrent_readers() {
        let cache = Arc::new(CachedMarketData::with_ttl(
            CountingProvider::default(),
            Duration::from_secs(60),
        ));
        let warm = cache.fetch(&request(Timeframe::FifteenMinutes)).await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move {
                    cache.fetch(&request(Timeframe::FifteenMinutes)).await
                })
            })
            .collect();

        for handle in handles {
            let series = handle.await.unwrap().unwrap();
            assert_eq!(series.bars.as_slice(), warm.bars.as_slice());
        }
        assert_eq!(cache.provider().calls.load(Ordering::SeqCst), 1);
    }
}
