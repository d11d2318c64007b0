//! Named snapshots of the level store on durable storage.

pub mod json_store;
pub mod snapshot_name;

pub use json_store::JsonSnapshotStore;
pub use snapshot_name::SnapshotName;

use crate::domain::DashboardResult;
use crate::models::Snapshot;

pub trait SnapshotStore {
    /// Writes `snapshot` under `name`, replacing whatever was stored there.
    fn save(&self, name: &SnapshotName, snapshot: &Snapshot) -> DashboardResult<()>;

    /// `NotFound` if nothing is stored under `name`, `CorruptData` if it does not parse.
    fn load(&self, name: &SnapshotName) -> DashboardResult<Snapshot>;

    /// Stored names, sorted ascending.
    fn list_names(&self) -> DashboardResult<Vec<String>>;
}
