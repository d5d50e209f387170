/// Monthly calendar grid for a habit
///
/// Weeks run Monday to Sunday. The first week is padded with empty cells up to
/// the weekday of the 1st and the last week is padded out to seven cells.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{DomainError, Habit};

/// Column headers, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Padding outside the month
    Empty,
    Day { day: u32, completed: bool },
}

impl CalendarCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }
}

pub type Week = [CalendarCell; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    /// e.g. "October 2026"
    pub title: String,
    pub weeks: Vec<Week>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }
}

/// First day of the month and the number of days in it
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, u32), DomainError> {
    let invalid = || DomainError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    let days = (next_first - first).num_days() as u32;
    Ok((first, days))
}

/// Build the calendar grid of `habit` for the given month
pub fn calendar_grid(habit: &Habit, year: i32, month: u32) -> Result<CalendarGrid, DomainError> {
    let (first, num_days) = month_bounds(year, month)?;
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [CalendarCell::Empty; 7];
    let mut slot = leading;

    for day in 1..=num_days {
        let date = first.with_day(day).ok_or(DomainError::InvalidMonth { year, month })?;
        week[slot] = CalendarCell::Day {
            day,
            completed: habit.completed_on(date),
        };
        slot += 1;

        if slot == 7 {
            weeks.push(week);
            week = [CalendarCell::Empty; 7];
            slot = 0;
        }
    }

    if slot > 0 {
        weeks.push(week);
    }

    Ok(CalendarGrid {
        year,
        month,
        title: first.format("%B %Y").to_string(),
        weeks,
    })
}
