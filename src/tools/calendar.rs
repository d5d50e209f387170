/// Tool for the monthly calendar view

use chrono::Datelike;
use serde::Serialize;

use crate::analytics::{calendar_grid, CalendarCell, CalendarGrid, WEEKDAY_LABELS};
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

#[derive(Debug, Clone)]
pub struct CalendarParams {
    pub name: String,
    pub year: Option<i32>, // defaults to the current year
    pub month: Option<u32>, // defaults to the current month
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub name: String,
    pub grid: CalendarGrid,
    pub message: String,
}

/// Render a grid as a fixed-width text table
///
/// Completed days are marked with `*`.
pub fn render_calendar(grid: &CalendarGrid) -> String {
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{:>4}", label))
            .collect::<String>(),
    );

    for week in &grid.weeks {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Empty => "    ".to_string(),
                CalendarCell::Day { day, completed: true } => format!("{:>3}*", day),
                CalendarCell::Day { day, completed: false } => format!("{:>3} ", day),
            })
            .collect();
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Build the calendar of one habit for a month
pub fn show_calendar<S: HabitPersistence>(
    tracker: &HabitTracker<S>,
    params: CalendarParams,
) -> Result<CalendarResponse, TrackerError> {
    let today = super::today();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    let habit = tracker.get_habit(&params.name)?;
    let grid = calendar_grid(habit, year, month)?;

    let message = format!(
        "Calendar for {} - {}\n\n{}\n\n* = completed",
        params.name,
        grid.title,
        render_calendar(&grid)
    );

    Ok(CalendarResponse {
        name: params.name,
        grid,
        message,
    })
}
