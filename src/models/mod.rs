// Session state and the pure logic operating on it

pub mod level_store;
pub mod session;
pub mod snapshot;
pub mod status;

pub use level_store::LevelStore;
pub use session::{DashboardSession, ViewSettings};
pub use snapshot::Snapshot;
pub use status::{StatusMetrics, magnet_distance, zone_status};
