/// Tool for exporting check-in history as CSV

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::analytics::{export_rows, write_csv};
use crate::storage::HabitPersistence;
use crate::{HabitTracker, TrackerError};

#[derive(Debug, Clone, Default)]
pub struct ExportParams {
    /// Write to this file instead of returning the CSV text
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub rows: usize,
    pub path: Option<PathBuf>,
    /// CSV text when no output file was given
    pub csv: Option<String>,
    pub message: String,
}

/// Export every recorded check-in as CSV
///
/// With no recorded check-ins nothing is written and the response carries a
/// warning instead.
pub fn export_csv<S: HabitPersistence>(
    tracker: &HabitTracker<S>,
    params: ExportParams,
) -> Result<ExportResponse, TrackerError> {
    let rows = export_rows(tracker.store());

    if rows.clone().next().is_none() {
        return Ok(ExportResponse {
            success: false,
            rows: 0,
            path: None,
            csv: None,
            message: "No data to export!".to_string(),
        });
    }

    match params.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            let count = write_csv(&mut writer, rows)?;
            writer.flush()?;
            tracing::info!("Exported {} rows to {}", count, path.display());

            Ok(ExportResponse {
                success: true,
                rows: count,
                message: format!("Exported {} rows to {}", count, path.display()),
                path: Some(path),
                csv: None,
            })
        }
        None => {
            let mut buffer = Vec::new();
            let count = write_csv(&mut buffer, rows)?;
            let csv = String::from_utf8_lossy(&buffer).into_owned();

            Ok(ExportResponse {
                success: true,
                rows: count,
                path: None,
                message: csv.trim_end().to_string(),
                csv: Some(csv),
            })
        }
    }
}
