/// Tool for creating new habits

use serde::Serialize;

use crate::domain::{Category, Goal};
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

/// Parameters for creating a new habit
#[derive(Debug, Clone)]
pub struct CreateHabitParams {
    pub name: String,
    pub category: String, // parsed to Category
    pub goal: String,     // parsed to Goal
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub name: String,
    pub category: Category,
    pub goal: Goal,
    pub message: String,
}

/// Create a new habit and persist it
pub fn create_habit<S: HabitPersistence>(
    tracker: &mut HabitTracker<S>,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, TrackerError> {
    let category: Category = params.category.parse()?;
    let goal: Goal = params.goal.parse()?;

    tracker.add_habit(&params.name, category, goal)?;

    Ok(CreateHabitResponse {
        success: true,
        message: format!("Added '{}' to your habits!", params.name),
        name: params.name,
        category,
        goal,
    })
}
