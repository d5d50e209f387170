/// In-memory habit store
///
/// Holds the display-ordered list of habit names alongside the name to habit
/// map. Both structures always contain exactly the same names; every mutation
/// below touches them together.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, CheckinOutcome, DomainError, Goal, Habit};

/// Whole-state snapshot in the persisted layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Habit names in display order
    pub habits: Vec<String>,
    /// Habit records keyed by name
    pub habit_data: BTreeMap<String, Habit>,
}

/// Borrowed view of the store for serialization without cloning
#[derive(Debug, Serialize)]
pub struct SnapshotRef<'a> {
    pub habits: &'a [String],
    pub habit_data: &'a BTreeMap<String, Habit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitStore {
    order: Vec<String>,
    habits: BTreeMap<String, Habit>,
}

impl HabitStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded snapshot, checking that the name list and
    /// the habit map agree
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, DomainError> {
        let Snapshot { habits: order, habit_data } = snapshot;

        for (index, name) in order.iter().enumerate() {
            if order[..index].contains(name) {
                return Err(DomainError::Inconsistent(format!(
                    "habit '{}' is listed more than once",
                    name
                )));
            }
            if !habit_data.contains_key(name) {
                return Err(DomainError::Inconsistent(format!(
                    "habit '{}' is listed but has no data",
                    name
                )));
            }
        }

        if habit_data.len() != order.len() {
            let orphan = habit_data
                .keys()
                .find(|name| !order.contains(*name))
                .cloned()
                .unwrap_or_default();
            return Err(DomainError::Inconsistent(format!(
                "habit '{}' has data but is not listed",
                orphan
            )));
        }

        Ok(Self {
            order,
            habits: habit_data,
        })
    }

    /// Borrow the store in its persisted layout
    pub fn snapshot(&self) -> SnapshotRef<'_> {
        SnapshotRef {
            habits: &self.order,
            habit_data: &self.habits,
        }
    }

    /// Consume the store into an owned snapshot
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            habits: self.order,
            habit_data: self.habits,
        }
    }

    /// Add a new habit at the end of the display order
    pub fn add_habit(
        &mut self,
        name: &str,
        category: Category,
        goal: Goal,
    ) -> Result<&Habit, DomainError> {
        let name = Habit::validate_name(name)?;
        if self.habits.contains_key(name) {
            return Err(DomainError::DuplicateHabit(name.to_string()));
        }

        self.order.push(name.to_string());
        Ok(self
            .habits
            .entry(name.to_string())
            .or_insert_with(|| Habit::new(category, goal)))
    }

    /// Remove a habit from both the display order and the map
    pub fn remove_habit(&mut self, name: &str) -> Result<Habit, DomainError> {
        let habit = self
            .habits
            .remove(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;
        self.order.retain(|listed| listed != name);
        Ok(habit)
    }

    /// Record a check-in for a habit on a date
    pub fn record_checkin(
        &mut self,
        name: &str,
        date: NaiveDate,
        completed: bool,
    ) -> Result<CheckinOutcome, DomainError> {
        let habit = self
            .habits
            .get_mut(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))?;
        Ok(habit.record_checkin(date, completed))
    }

    /// Habit names in display order
    pub fn list_habits(&self) -> &[String] {
        &self.order
    }

    /// Look up a habit by name
    pub fn get_habit(&self, name: &str) -> Result<&Habit, DomainError> {
        self.habits
            .get(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    /// Iterate habits in display order
    pub fn habits(&self) -> impl Iterator<Item = (&str, &Habit)> + Clone + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.habits.get(name).map(|habit| (name.as_str(), habit)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.habits.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
