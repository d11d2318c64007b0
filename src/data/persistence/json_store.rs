use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{PERSISTENCE, snapshot_filename};
use crate::data::persistence::{SnapshotName, SnapshotStore};
use crate::domain::{DashboardError, DashboardResult};
use crate::models::Snapshot;

/// One pretty-printed JSON file per snapshot: `<directory>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    directory: PathBuf,
}

impl Default for JsonSnapshotStore {
    fn default() -> Self {
        Self::new(PERSISTENCE.snapshots.directory)
    }
}

impl JsonSnapshotStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, name: &SnapshotName) -> PathBuf {
        self.directory.join(snapshot_filename(name.as_str()))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, name: &SnapshotName, snapshot: &Snapshot) -> DashboardResult<()> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| DashboardError::storage(&self.directory, e))?;

        let path = self.path_for(name);
        // Write beside the target then rename, so readers never see half a file
        let tmp_path = path.with_extension("json.tmp");
        {
            let file =
                File::create(&tmp_path).map_err(|e| DashboardError::storage(&tmp_path, e))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, snapshot).map_err(|e| {
                DashboardError::Storage {
                    path: tmp_path.clone(),
                    message: e.to_string(),
                }
            })?;
            writer
                .flush()
                .map_err(|e| DashboardError::storage(&tmp_path, e))?;
        }
        fs::rename(&tmp_path, &path).map_err(|e| DashboardError::storage(&path, e))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("💾 Snapshot {} written to {}", name, path.display());
        }
        Ok(())
    }

    fn load(&self, name: &SnapshotName) -> DashboardResult<Snapshot> {
        let path = self.path_for(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DashboardError::NotFound(name.to_string()));
            }
            Err(e) => return Err(DashboardError::storage(&path, e)),
        };

        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                DashboardError::Storage {
                    path: path.clone(),
                    message: e.to_string(),
                }
            } else {
                DashboardError::CorruptData {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!(
                "📂 Snapshot {} read: {} support, {} resistance",
                name,
                snapshot.support.len(),
                snapshot.resistance.len()
            );
        }
        Ok(snapshot)
    }

    fn list_names(&self) -> DashboardResult<Vec<String>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            // Nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DashboardError::storage(&self.directory, e)),
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|ext| ext.to_str())
                        == Some(PERSISTENCE.snapshots.extension)
            })
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                // Skip anything we would refuse to load by name
                SnapshotName::parse(stem)
                    .ok()
                    .filter(|name| name.as_str() == stem)
                    .map(|name| name.as_str().to_string())
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
