//! File persistence configuration

/// Where named level snapshots live
pub struct SnapshotPersistence {
    /// Default directory (relative to the working directory)
    pub directory: &'static str,
    /// File extension, without the dot
    pub extension: &'static str,
    /// Longest accepted snapshot name
    pub max_name_len: usize,
}

pub struct PersistenceConfig {
    pub snapshots: SnapshotPersistence,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    snapshots: SnapshotPersistence {
        directory: "data",
        extension: "json",
        max_name_len: 64,
    },
};

/// Filename for a (validated) snapshot name.
/// Example: "default" -> "default.json"
pub fn snapshot_filename(name: &str) -> String {
    format!("{}.{}", name, PERSISTENCE.snapshots.extension)
}

// App state persistence
/// Path for saving/loading view settings between runs
pub const APP_STATE_PATH: &str = ".states.json";
