/// Habit entity and check-in handling
///
/// A habit is identified by its name, which lives in the store as the map key.
/// The record itself carries the category/goal metadata, the live streak
/// counter and the sparse per-date completion history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{streak, Category, DomainError, Goal};

/// A habit the user wants to do regularly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Habit {
    /// Life area this habit belongs to
    pub category: Category,
    /// Intended cadence (informational)
    pub goal: Goal,
    /// Consecutive completed check-in events
    pub streak: u32,
    /// Completion status per calendar date; a missing date means unrecorded
    #[serde(default)]
    pub history: BTreeMap<NaiveDate, bool>,
}

/// What a guarded check-in did to the habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckinOutcome {
    /// Status recorded for the date before this check-in, if any
    pub previous: Option<bool>,
    /// Whether the streak rule ran
    pub streak_updated: bool,
    /// Streak after the check-in
    pub streak: u32,
}

impl Habit {
    /// Create a fresh habit with no history and a zero streak
    pub fn new(category: Category, goal: Goal) -> Self {
        Self {
            category,
            goal,
            streak: 0,
            history: BTreeMap::new(),
        }
    }

    /// Record a check-in, skipping the streak rule on redundant writes
    ///
    /// Writing the value a date already holds leaves the streak alone. A date
    /// with no record is never redundant, so recording `false` on it still
    /// resets the streak.
    pub fn record_checkin(&mut self, date: NaiveDate, completed: bool) -> CheckinOutcome {
        let previous = self.history.get(&date).copied();

        if previous == Some(completed) {
            return CheckinOutcome {
                previous,
                streak_updated: false,
                streak: self.streak,
            };
        }

        self.apply_checkin_event(date, completed);
        CheckinOutcome {
            previous,
            streak_updated: true,
            streak: self.streak,
        }
    }

    /// Write the history entry and apply the streak rule unconditionally
    ///
    /// This is the raw event: applying `true` twice for the same date bumps
    /// the streak twice.
    pub fn apply_checkin_event(&mut self, date: NaiveDate, completed: bool) {
        self.history.insert(date, completed);
        self.streak = streak::next_streak(self.streak, completed);
    }

    /// Completion status for a date, treating unrecorded dates as not completed
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.history.get(&date).copied().unwrap_or(false)
    }

    /// Number of recorded dates with a `true` status
    pub fn completed_count(&self) -> usize {
        self.history.values().filter(|&&done| done).count()
    }

    /// Validate a habit name according to business rules
    ///
    /// Returns the name unchanged; names are case-sensitive keys and are not
    /// trimmed before storage.
    pub fn validate_name(name: &str) -> Result<&str, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "Habit name cannot be empty".to_string(),
            ));
        }
        Ok(name)
    }
}
