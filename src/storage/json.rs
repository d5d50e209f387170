/// JSON file implementation of the habit persistence interface
///
/// The snapshot layout is `{"habits": [...], "habit_data": {...}}`. Saves go
/// through a temp file in the target directory that is renamed over the old
/// snapshot, so a crash mid-write leaves the previous file intact.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{HabitStore, Snapshot};
use crate::storage::{HabitPersistence, StorageError};

/// Snapshot storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage for the given file path
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: impl ToString) -> StorageError {
        StorageError::CorruptData {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl HabitPersistence for JsonFileStorage {
    fn load(&self) -> Result<HabitStore, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No habit data at {}, starting empty", self.path.display());
                return Ok(HabitStore::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        let store = HabitStore::from_snapshot(snapshot).map_err(|e| self.corrupt(e))?;

        tracing::info!(
            "Loaded {} habits from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }

    fn save(&self, store: &HabitStore) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&store.snapshot())?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.flush().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(
            "Saved {} habits to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }
}
