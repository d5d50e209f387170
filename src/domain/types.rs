/// Core types and enums used throughout the domain layer
///
/// This module defines the fixed Category and Goal sets a habit is tagged with,
/// plus the date parsing helper shared by the store and the command layer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Date format used for history keys and command arguments
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Categories for organizing habits into different life areas
///
/// The set is closed: the snapshot file stores the display name verbatim,
/// so `PersonalGrowth` is written as "Personal Growth".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Work and learning habits
    Productivity,
    /// Reading, reflection, skill building
    #[serde(rename = "Personal Growth")]
    PersonalGrowth,
    /// Anything that doesn't fit above
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Productivity,
        Category::PersonalGrowth,
        Category::Other,
    ];

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::PersonalGrowth => "Personal Growth",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive; "personal growth", "personal-growth" and
    /// "personal_growth" all map to `PersonalGrowth`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "health" => Ok(Category::Health),
            "productivity" => Ok(Category::Productivity),
            "personal growth" => Ok(Category::PersonalGrowth),
            "other" => Ok(Category::Other),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

/// How often the user intends to perform a habit
///
/// Recorded for display and export only. Streak arithmetic does not
/// look at the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Goal {
    Daily,
    Weekly,
    Monthly,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Daily, Goal::Weekly, Goal::Monthly];

    /// Get the display name for this goal
    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Daily => "Daily",
            Goal::Weekly => "Weekly",
            Goal::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Goal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Goal::Daily),
            "weekly" => Ok(Goal::Weekly),
            "monthly" => Ok(Goal::Monthly),
            _ => Err(DomainError::InvalidGoal(s.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}
