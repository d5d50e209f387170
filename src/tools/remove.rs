/// Tool for removing habits

use serde::Serialize;

use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

#[derive(Debug, Clone)]
pub struct RemoveHabitParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveHabitResponse {
    pub success: bool,
    pub name: String,
    /// How many recorded days were dropped with the habit
    pub removed_days: usize,
    pub message: String,
}

/// Remove a habit and its history
pub fn remove_habit<S: HabitPersistence>(
    tracker: &mut HabitTracker<S>,
    params: RemoveHabitParams,
) -> Result<RemoveHabitResponse, TrackerError> {
    let removed = tracker.remove_habit(&params.name)?;

    Ok(RemoveHabitResponse {
        success: true,
        removed_days: removed.history.len(),
        message: format!("Removed '{}' from your habits!", params.name),
        name: params.name,
    })
}
