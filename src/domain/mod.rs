// Domain types and value objects
pub mod bar;
pub mod errors;
pub mod level;
pub mod timeframe;
pub mod zone;

// Re-export commonly used types
pub use bar::Bar;
pub use errors::{DashboardError, DashboardResult};
pub use level::{Level, LevelEntry, LevelId, LevelKind};
pub use timeframe::Timeframe;
pub use zone::{DynamicZone, ZoneStatus};
