/// Tool for listing all habits

use serde::Serialize;

use crate::domain::Category;
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

/// Parameters for listing habits
#[derive(Debug, Clone, Default)]
pub struct ListHabitsParams {
    pub category: Option<String>,
}

/// A habit as shown in the list
#[derive(Debug, Serialize)]
pub struct HabitListing {
    pub name: String,
    pub category: String,
    pub goal: String,
    pub current_streak: u32,
    pub recorded_days: usize,
}

#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitListing>,
    pub message: String,
}

/// List habits in display order, optionally filtered by category
pub fn list_habits<S: HabitPersistence>(
    tracker: &HabitTracker<S>,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, TrackerError> {
    let category_filter = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;

    let mut habits = Vec::new();
    for name in tracker.list_habits() {
        let habit = tracker.get_habit(name)?;
        if category_filter.is_some_and(|category| category != habit.category) {
            continue;
        }
        habits.push(HabitListing {
            name: name.clone(),
            category: habit.category.to_string(),
            goal: habit.goal.to_string(),
            current_streak: habit.streak,
            recorded_days: habit.history.len(),
        });
    }

    let message = if habits.is_empty() {
        "You don't have any habits yet. Add one with `habit-tracker add`.".to_string()
    } else {
        habits
            .iter()
            .map(|h| {
                format!(
                    "{} ({} - {}) streak: {}",
                    h.name, h.category, h.goal, h.current_streak
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListHabitsResponse { habits, message })
}
