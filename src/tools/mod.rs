/// Command tools for habit management
///
/// Each tool takes a params struct, drives the tracker and returns a
/// serializable response with a human-readable `message`. The binary prints
/// either the message or the whole response as JSON.

pub mod create;
pub mod remove;
pub mod log;
pub mod list;
pub mod status;
pub mod calendar;
pub mod export;
pub mod schema;

// Re-export tool functions for easy access
pub use create::*;
pub use remove::*;
pub use log::*;
pub use list::*;
pub use status::*;
pub use calendar::*;
pub use export::*;
pub use schema::*;

use chrono::NaiveDate;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
