//! Configuration module for the level dashboard.

pub mod dashboard;

mod debug; // Private: callers use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod defaults;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use defaults::{DEFAULT_LEVELS, DefaultLevels};
pub use persistence::{APP_STATE_PATH, PERSISTENCE, snapshot_filename};
pub use plot::PLOT_CONFIG;
