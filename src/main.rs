/// Main entry point for the Habit Tracker command line
///
/// This file sets up logging, parses command line arguments, opens the habit
/// store and dispatches to one tool per subcommand.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use habit_tracker::tools::{self, *};
use habit_tracker::{HabitTracker, JsonFileStorage, TrackerError};

/// Environment variable overriding the data file location
const DATA_FILE_ENV: &str = "HABIT_TRACKER_DATA";
const DATA_FILE_NAME: &str = "habit_data.json";

/// Pick the data file: explicit flag, then `$HABIT_TRACKER_DATA`, then the
/// first available per-user directory
///
/// The directory itself is created by the first save.
fn resolve_data_path(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    flag.or_else(|| env.map(PathBuf::from)).unwrap_or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(".habit_tracker"))
            .or_else(|| dirs::data_dir().map(|data| data.join("habit_tracker")))
            .or_else(|| std::env::current_dir().ok().map(|cwd| cwd.join(".habit_tracker")))
            .unwrap_or_else(|| std::env::temp_dir().join("habit_tracker"))
            .join(DATA_FILE_NAME)
    })
}

fn open_tracker(data_file: Option<PathBuf>) -> Result<HabitTracker<JsonFileStorage>, TrackerError> {
    let data_path = resolve_data_path(data_file, std::env::var_os(DATA_FILE_ENV));
    info!("Using habit data at: {}", data_path.display());

    let tracker = HabitTracker::open_file(data_path)?;
    if let Some(warning) = tracker.startup_warning() {
        eprintln!("Warning: {}", warning);
    }
    Ok(tracker)
}

/// Command line arguments for the Habit Tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    /// If not provided, uses $HABIT_TRACKER_DATA or a default location in the user's home directory
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        name: String,
        /// Health, Productivity, Personal Growth or Other
        #[arg(short, long, default_value = "Health")]
        category: String,
        /// Daily, Weekly or Monthly
        #[arg(short, long, default_value = "Daily")]
        goal: String,
    },
    /// Remove a habit and its history
    Remove { name: String },
    /// Check off a habit for a day
    Check {
        name: String,
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Record the day as not done
        #[arg(long)]
        undo: bool,
    },
    /// List habits in display order
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show streaks and completion rates
    Status { name: Option<String> },
    /// Show a habit's monthly calendar
    Calendar {
        name: String,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Export all check-ins as CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the JSON Schema of the data file
    Schema,
}

/// Anything a tool returns: printable as its message or as JSON
trait ToolOutput: Serialize {
    fn message(&self) -> &str;
}

macro_rules! tool_output {
    ($($response:ty),* $(,)?) => {
        $(impl ToolOutput for $response {
            fn message(&self) -> &str {
                &self.message
            }
        })*
    };
}

tool_output!(
    CreateHabitResponse,
    RemoveHabitResponse,
    LogCheckinResponse,
    ListHabitsResponse,
    StatusResponse,
    CalendarResponse,
    ExportResponse,
);

fn emit<T: ToolOutput>(response: &T, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", response.message());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    // Only commands that touch habits load the data file
    let data_file = args.data_file;
    let open = move || open_tracker(data_file);

    match args.command {
        Command::Add { name, category, goal } => {
            let mut tracker = open()?;
            let response = create_habit(&mut tracker, CreateHabitParams { name, category, goal })?;
            emit(&response, args.json)?;
        }
        Command::Remove { name } => {
            let mut tracker = open()?;
            let response = remove_habit(&mut tracker, RemoveHabitParams { name })?;
            emit(&response, args.json)?;
        }
        Command::Check { name, date, undo } => {
            let mut tracker = open()?;
            let response = log_checkin(
                &mut tracker,
                LogCheckinParams {
                    name,
                    date,
                    completed: !undo,
                },
            )?;
            emit(&response, args.json)?;
        }
        Command::List { category } => {
            let tracker = open()?;
            let response = list_habits(&tracker, ListHabitsParams { category })?;
            emit(&response, args.json)?;
        }
        Command::Status { name } => {
            let tracker = open()?;
            let response = get_habit_status(&tracker, StatusParams { name, as_of: None })?;
            emit(&response, args.json)?;
        }
        Command::Calendar { name, year, month } => {
            let tracker = open()?;
            let response = show_calendar(&tracker, CalendarParams { name, year, month })?;
            emit(&response, args.json)?;
        }
        Command::Export { output } => {
            let tracker = open()?;
            let response = export_csv(&tracker, ExportParams { output })?;
            if !response.success {
                eprintln!("Warning: {}", response.message);
            } else {
                emit(&response, args.json)?;
            }
        }
        Command::Schema => {
            println!("{}", tools::snapshot_schema()?);
        }
    }

    Ok(())
}
