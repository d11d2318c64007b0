use serde::{Deserialize, Serialize};

use crate::config::DASHBOARD;
use crate::data::market::{BarRequest, MarketFeed};
use crate::data::persistence::{SnapshotName, SnapshotStore};
use crate::domain::{DashboardResult, Timeframe};
use crate::models::level_store::LevelStore;
use crate::models::status::StatusMetrics;

/// Chart options that survive a restart (stored by eframe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub timeframe: Timeframe,
    pub show_ema: bool,
    pub show_volume: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
            show_ema: true,
            show_volume: true,
        }
    }
}

/// Everything one dashboard user is looking at.
/// Owned by the shell and mutated from a single thread.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub symbol: String,
    pub levels: LevelStore,
    pub view: ViewSettings,
    pub feed: MarketFeed,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(DASHBOARD.market.symbol, ViewSettings::default())
    }
}

impl DashboardSession {
    pub fn new(symbol: impl Into<String>, view: ViewSettings) -> Self {
        Self {
            symbol: symbol.into(),
            levels: LevelStore::with_defaults(),
            view,
            feed: MarketFeed::default(),
        }
    }

    pub fn bar_request(&self) -> BarRequest {
        BarRequest::new(self.symbol.clone(), self.view.timeframe)
    }

    /// Returns true when the timeframe actually changed. Bars of the old
    /// timeframe are dropped so they are never shown under the new label.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if self.view.timeframe == timeframe {
            return false;
        }
        self.view.timeframe = timeframe;
        self.feed.clear();
        true
    }

    pub fn metrics(&self) -> Option<StatusMetrics> {
        let zone = self.levels.dynamic_zone();
        StatusMetrics::from_bars(self.feed.bars(), &zone, self.levels.magnet_price())
    }

    pub fn save_snapshot<S: SnapshotStore + ?Sized>(
        &self,
        store: &S,
        raw_name: &str,
    ) -> DashboardResult<SnapshotName> {
        let name = SnapshotName::parse(raw_name)?;
        store.save(&name, &self.levels.to_snapshot())?;
        log::info!("💾 Saved levels as '{}'", name);
        Ok(name)
    }

    /// Replaces the level store only once the snapshot has been read and parsed.
    pub fn load_snapshot<S: SnapshotStore + ?Sized>(
        &mut self,
        store: &S,
        raw_name: &str,
    ) -> DashboardResult<SnapshotName> {
        let name = SnapshotName::parse(raw_name)?;
        let snapshot = store.load(&name)?;
        self.levels = LevelStore::from_snapshot(snapshot);
        log::info!("📂 Loaded levels from '{}'", name);
        Ok(name)
    }
}
