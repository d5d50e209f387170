/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitStore) and the streak
/// rule. These types represent the fundamental concepts in our habit tracking
/// system and know nothing about files or terminals.

pub mod habit;
pub mod store;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use store::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidName(String),

    #[error("Habit '{0}' already exists")]
    DuplicateHabit(String),

    #[error("Habit not found: {0}")]
    NotFound(String),

    #[error("Invalid category '{0}'. Valid options: Health, Productivity, Personal Growth, Other")]
    InvalidCategory(String),

    #[error("Invalid goal '{0}'. Valid options: Daily, Weekly, Monthly")]
    InvalidGoal(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Inconsistent habit data: {0}")]
    Inconsistent(String),
}
