/// Analytics over the habit store
///
/// Everything here is a pure read over the store: completion rates, per-habit
/// summaries, the monthly calendar grid and the flat export rows.

pub mod calendar;
pub mod export;

pub use calendar::*;
pub use export::*;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{streak, Category, Goal, Habit, HabitStore};

/// Percentage of recorded dates marked completed, in `[0, 100]`
///
/// Only recorded dates count; calendar days without a check-in are ignored.
pub fn completion_rate(habit: &Habit) -> f64 {
    let total = habit.history.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * habit.completed_count() as f64 / total as f64
}

/// Derived statistics for a single habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitSummary {
    pub name: String,
    pub category: Category,
    pub goal: Goal,
    /// The live event-driven counter
    pub current_streak: u32,
    pub completion_rate: f64,
    pub recorded_days: usize,
    pub completed_days: usize,
    /// Consecutive completed days ending at the reference date, from history
    pub trailing_run: u32,
    /// Longest run of consecutive completed days in history
    pub longest_run: u32,
}

impl HabitSummary {
    pub fn new(name: &str, habit: &Habit, as_of: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            category: habit.category,
            goal: habit.goal,
            current_streak: habit.streak,
            completion_rate: completion_rate(habit),
            recorded_days: habit.history.len(),
            completed_days: habit.completed_count(),
            trailing_run: streak::trailing_run(&habit.history, as_of),
            longest_run: streak::longest_run(&habit.history),
        }
    }
}

/// Summaries for every habit in display order
pub fn summarize(store: &HabitStore, as_of: NaiveDate) -> Vec<HabitSummary> {
    store
        .habits()
        .map(|(name, habit)| HabitSummary::new(name, habit, as_of))
        .collect()
}
