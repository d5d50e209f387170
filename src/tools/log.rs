/// Tool for logging habit check-ins

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::parse_date;
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

/// Parameters for a check-in
#[derive(Debug, Clone)]
pub struct LogCheckinParams {
    pub name: String,
    pub date: Option<String>, // defaults to today
    pub completed: bool,
}

/// Response from logging a check-in
#[derive(Debug, Serialize)]
pub struct LogCheckinResponse {
    pub success: bool,
    pub name: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub streak_updated: bool,
    pub current_streak: u32,
    pub message: String,
}

/// Record whether a habit was completed on a date
pub fn log_checkin<S: HabitPersistence>(
    tracker: &mut HabitTracker<S>,
    params: LogCheckinParams,
) -> Result<LogCheckinResponse, TrackerError> {
    let date = match params.date.as_deref() {
        Some(date_str) => parse_date(date_str)?,
        None => super::today(),
    };

    let outcome = tracker.record_checkin(&params.name, date, params.completed)?;

    let message = if !outcome.streak_updated {
        format!(
            "'{}' was already marked {} for {}. Current streak: {}",
            params.name,
            if params.completed { "done" } else { "not done" },
            date,
            outcome.streak
        )
    } else if params.completed {
        format!(
            "Checked off '{}' for {}! Current streak: {} day{}",
            params.name,
            date,
            outcome.streak,
            if outcome.streak == 1 { "" } else { "s" }
        )
    } else {
        format!("Marked '{}' as not done for {}. Streak reset.", params.name, date)
    };

    Ok(LogCheckinResponse {
        success: true,
        name: params.name,
        date,
        completed: params.completed,
        streak_updated: outcome.streak_updated,
        current_streak: outcome.streak,
        message,
    })
}
