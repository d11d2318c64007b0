use std::path::PathBuf;

use thiserror::Error;

use crate::domain::level::{LevelId, LevelKind};

/// Everything that can go wrong while editing, persisting or fetching.
/// None of these are fatal: the caller reports them and keeps its prior state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Non-finite or malformed numeric input to a level store mutator
    #[error("invalid input for {field}: {value} is not a finite number")]
    InvalidInput { field: &'static str, value: f64 },

    /// Positional delete with a position that no longer exists
    #[error("no {kind} level at position {index} (only {len} present)")]
    IndexOutOfRange {
        kind: LevelKind,
        index: usize,
        len: usize,
    },

    #[error("no {kind} level with id {id}")]
    LevelNotFound { kind: LevelKind, id: LevelId },

    /// Snapshot name that is unsafe to use as a storage key
    #[error("invalid snapshot name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("no snapshot named {0:?}")]
    NotFound(String),

    #[error("snapshot {name:?} is corrupt: {reason}")]
    CorruptData { name: String, reason: String },

    #[error("storage failure at {}: {message}", .path.display())]
    Storage { path: PathBuf, message: String },

    #[error("market data fetch failed: {0}")]
    FetchError(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    pub(crate) fn storage(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        DashboardError::Storage {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Rejects NaN and infinities before they reach the level store.
pub fn ensure_finite(field: &'static str, value: f64) -> DashboardResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DashboardError::InvalidInput { field, value })
    }
}
