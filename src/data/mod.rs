// Data sources: saved level snapshots and live market bars
pub mod market;
pub mod persistence;

pub use market::{BarRequest, BarSeries, CachedMarketData, MarketDataProvider, MarketFeed};
pub use persistence::{JsonSnapshotStore, SnapshotName, SnapshotStore};
