/// Public library interface for the Habit Tracker
///
/// This module exports the tracker facade and the public types that the
/// command-line front end (or any other caller) works with.

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
pub mod tools;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitPersistence, JsonFileStorage, StorageError};
pub use analytics::*;

/// Errors that can occur while driving the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("{0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The habit store together with the persistence it snapshots to
///
/// Every mutating call saves the whole store before returning, so the file
/// never lags behind memory across an operation boundary.
pub struct HabitTracker<S: HabitPersistence> {
    store: HabitStore,
    storage: S,
    startup_warning: Option<String>,
}

impl<S: HabitPersistence> HabitTracker<S> {
    /// Load the persisted store and wrap it
    ///
    /// Corrupt data does not abort startup: the tracker starts empty and the
    /// problem is kept in `startup_warning` for the caller to show.
    pub fn open(storage: S) -> Result<Self, TrackerError> {
        let (store, startup_warning) = match storage.load() {
            Ok(store) => (store, None),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("{}; starting with an empty habit list", e);
                (
                    HabitStore::new(),
                    Some(format!(
                        "Could not read previous habit data ({}). Starting fresh.",
                        e
                    )),
                )
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Habit tracker opened with {} habits", store.len());
        Ok(Self {
            store,
            storage,
            startup_warning,
        })
    }

    pub fn startup_warning(&self) -> Option<&str> {
        self.startup_warning.as_deref()
    }

    /// Read-only access to the store for metrics and listings
    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply a mutation to a copy of the store and keep it only once the
    /// copy has been saved
    ///
    /// A failed save leaves both memory and the persisted file as they were.
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut HabitStore) -> Result<T, DomainError>,
    ) -> Result<T, TrackerError> {
        let mut next = self.store.clone();
        let value = mutate(&mut next)?;
        self.storage.save(&next).map_err(|e| {
            tracing::error!("Failed to save habit data, change discarded: {}", e);
            TrackerError::from(e)
        })?;
        self.store = next;
        Ok(value)
    }

    pub fn add_habit(
        &mut self,
        name: &str,
        category: Category,
        goal: Goal,
    ) -> Result<&Habit, TrackerError> {
        self.commit(|store| store.add_habit(name, category, goal).map(|_| ()))?;
        tracing::debug!("Added habit '{}' ({}, {})", name, category, goal);
        Ok(self.store.get_habit(name)?)
    }

    pub fn remove_habit(&mut self, name: &str) -> Result<Habit, TrackerError> {
        let removed = self.commit(|store| store.remove_habit(name))?;
        tracing::debug!("Removed habit '{}'", name);
        Ok(removed)
    }

    pub fn record_checkin(
        &mut self,
        name: &str,
        date: NaiveDate,
        completed: bool,
    ) -> Result<CheckinOutcome, TrackerError> {
        let outcome = self.commit(|store| store.record_checkin(name, date, completed))?;
        tracing::debug!(
            "Check-in '{}' on {}: completed={} streak={}",
            name,
            date,
            completed,
            outcome.streak
        );
        Ok(outcome)
    }

    pub fn list_habits(&self) -> &[String] {
        self.store.list_habits()
    }

    pub fn get_habit(&self, name: &str) -> Result<&Habit, TrackerError> {
        Ok(self.store.get_habit(name)?)
    }

    /// Write the current store to persistence
    pub fn save(&self) -> Result<(), TrackerError> {
        self.storage.save(&self.store).map_err(|e| {
            tracing::error!("Failed to save habit data: {}", e);
            TrackerError::from(e)
        })
    }
}

impl HabitTracker<JsonFileStorage> {
    /// Open the tracker on a JSON snapshot file
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> Result<Self, TrackerError> {
        Self::open(JsonFileStorage::new(path))
    }
}
