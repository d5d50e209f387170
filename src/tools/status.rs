/// Tool for checking habit streaks and completion rates

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{summarize, HabitSummary};
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

/// Parameters for checking habit status
#[derive(Debug, Clone, Default)]
pub struct StatusParams {
    pub name: Option<String>, // If omitted, returns all habits
    pub as_of: Option<NaiveDate>, // defaults to today
}

/// Response from checking habit status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub habits: Vec<HabitSummary>,
    pub summary: String,
    pub message: String,
}

/// Streak and completion statistics for one habit or all of them
pub fn get_habit_status<S: HabitPersistence>(
    tracker: &HabitTracker<S>,
    params: StatusParams,
) -> Result<StatusResponse, TrackerError> {
    let as_of = params.as_of.unwrap_or_else(super::today);

    let habits = match params.name {
        Some(name) => {
            let habit = tracker.get_habit(&name)?;
            vec![HabitSummary::new(&name, habit, as_of)]
        }
        None => summarize(tracker.store(), as_of),
    };

    let summary = if habits.is_empty() {
        "No habits found. Create your first habit to get started!".to_string()
    } else {
        let active_count = habits.iter().filter(|h| h.current_streak > 0).count();
        format!(
            "Status: {} of {} habits on a streak",
            active_count,
            habits.len()
        )
    };

    let message = std::iter::once(summary.clone())
        .chain(habits.iter().map(|h| {
            format!(
                "{} ({} - {})\n   Current streak: {} | Completion rate: {:.1}% ({} of {} days)\n   Consecutive days to {}: {} | Best run: {}",
                h.name,
                h.category,
                h.goal,
                h.current_streak,
                h.completion_rate,
                h.completed_days,
                h.recorded_days,
                as_of,
                h.trailing_run,
                h.longest_run
            )
        }))
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(StatusResponse {
        habits,
        summary,
        message,
    })
}
