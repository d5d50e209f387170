/// Flat export rows and CSV rendering
///
/// One row per recorded (habit, date) pair. The streak column is the habit's
/// live counter at export time, repeated on every row of that habit.

use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Category, Goal, HabitStore, DATE_FORMAT};

/// CSV column headers, in column order
pub const CSV_HEADERS: [&str; 6] = [
    "Habit",
    "Category",
    "Goal Type",
    "Date",
    "Completed",
    "Current Streak",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    pub habit: &'a str,
    pub category: Category,
    pub goal: Goal,
    pub date: NaiveDate,
    pub completed: bool,
    pub current_streak: u32,
}

impl ExportRow<'_> {
    /// "Yes" or "No"
    pub fn completed_label(&self) -> &'static str {
        if self.completed {
            "Yes"
        } else {
            "No"
        }
    }

    /// Field values in `CSV_HEADERS` order
    pub fn fields(&self) -> [String; 6] {
        [
            self.habit.to_string(),
            self.category.display_name().to_string(),
            self.goal.display_name().to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.completed_label().to_string(),
            self.current_streak.to_string(),
        ]
    }
}

/// Lazily produce export rows, habits in display order and dates ascending
///
/// The iterator is `Clone`, so a consumer can restart it from the beginning.
pub fn export_rows(store: &HabitStore) -> impl Iterator<Item = ExportRow<'_>> + Clone + '_ {
    store.habits().flat_map(|(name, habit)| {
        habit.history.iter().map(move |(&date, &completed)| ExportRow {
            habit: name,
            category: habit.category,
            goal: habit.goal,
            date,
            completed,
            current_streak: habit.streak,
        })
    })
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> io::Result<()> {
    let line = fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)
}

/// Write the header and every row as CSV, returning the number of data rows
pub fn write_csv<'a, W, I>(writer: &mut W, rows: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ExportRow<'a>>,
{
    write_record(writer, &CSV_HEADERS)?;

    let mut count = 0;
    for row in rows {
        write_record(writer, &row.fields())?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn store() -> HabitStore {
        let mut store = HabitStore::new();
        store.add_habit("Walk", Category::Health, Goal::Daily).unwrap();
        store.add_habit("Plan week", Category::Productivity, Goal::Weekly).unwrap();
        store.add_habit("Idle", Category::Other, Goal::Monthly).unwrap();

        store.record_checkin("Walk", date(2), true).unwrap();
        store.record_checkin("Walk", date(1), true).unwrap();
        store.record_checkin("Plan week", date(1), false).unwrap();
        store
    }

    #[test]
    fn test_rows_follow_display_order_and_dates() {
        let store = store();
        let rows: Vec<_> = export_rows(&store).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].habit, rows[0].date), ("Walk", date(1)));
        assert_eq!((rows[1].habit, rows[1].date), ("Walk", date(2)));
        assert_eq!(rows[2].habit, "Plan week");
        assert_eq!(rows[2].completed_label(), "No");
    }

    #[test]
    fn test_rows_carry_live_streak() {
        let store = store();
        assert!(export_rows(&store)
            .filter(|row| row.habit == "Walk")
            .all(|row| row.current_streak == 2));
    }

    #[test]
    fn test_rows_are_restartable() {
        let store = store();
        let rows = export_rows(&store);
        let first: Vec<_> = rows.clone().collect();
        let second: Vec<_> = rows.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_csv() {
        let store = store();
        let mut out = Vec::new();
        let count = write_csv(&mut out, export_rows(&store)).unwrap();

        assert_eq!(count, 3);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Habit,Category,Goal Type,Date,Completed,Current Streak");
        assert_eq!(lines[1], "Walk,Health,Daily,2024-07-01,Yes,2");
        assert_eq!(lines[3], "Plan week,Productivity,Weekly,2024-07-01,No,0");
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("Read, write"), "\"Read, write\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_store_writes_header_only() {
        let store = HabitStore::new();
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, export_rows(&store)).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
