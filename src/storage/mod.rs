/// Storage layer for persisting habit data
///
/// The whole store is written as one JSON snapshot after every mutation and
/// read back once at startup. There are no partial writes.

pub mod json;

// Re-export the main storage types
pub use json::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::HabitStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt habit data in {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StorageError::CorruptData { .. })
    }
}

/// Trait defining the persistence interface for the habit store
///
/// This trait lets the tracker work against the JSON file in production and
/// against other backends in tests.
pub trait HabitPersistence {
    /// Load the persisted store
    ///
    /// A missing resource is an empty store, not an error.
    fn load(&self) -> Result<HabitStore, StorageError>;

    /// Replace the persisted store wholesale
    fn save(&self, store: &HabitStore) -> Result<(), StorageError>;
}
