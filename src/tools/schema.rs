/// JSON Schema of the persisted snapshot file

use schemars::schema_for;

use crate::domain::Snapshot;
use crate::TrackerError;

/// Schema describing the `{"habits": [...], "habit_data": {...}}` layout,
/// pretty-printed
pub fn snapshot_schema() -> Result<String, TrackerError> {
    let schema = serde_json::to_string_pretty(&schema_for!(Snapshot))?;
    Ok(schema)
}
