#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::{ChartOptions, ChartScene};
pub use data::{CachedMarketData, JsonSnapshotStore, MarketDataProvider, SnapshotStore};
pub use domain::{Bar, DashboardError, DashboardResult, Level, LevelKind, Timeframe};
pub use models::{DashboardSession, LevelStore, Snapshot, StatusMetrics};
pub use ui::{AppSettings, DashboardApp};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

use crate::config::{DASHBOARD, PERSISTENCE};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Instrument to chart (Yahoo Finance ticker)
    #[arg(long, default_value_t = DASHBOARD.market.symbol.to_string())]
    pub symbol: String,

    /// Directory holding saved level snapshots
    #[arg(long, default_value = PERSISTENCE.snapshots.directory)]
    pub data_dir: PathBuf,
}

impl Cli {
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            symbol: self.symbol.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    runtime: tokio::runtime::Handle,
    settings: AppSettings,
) -> Box<dyn eframe::App> {
    Box::new(DashboardApp::new(cc, runtime, settings))
}
