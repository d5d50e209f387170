/// Basic integration tests
use chrono::NaiveDate;
use habit_tracker::tools::*;
use habit_tracker::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habit_data.json");

        let mut tracker = HabitTracker::open_file(&path).expect("Failed to open tracker");
        tracker.add_habit("Run", Category::Health, Goal::Daily).unwrap();
        tracker.add_habit("Journal", Category::PersonalGrowth, Goal::Weekly).unwrap();
        tracker.record_checkin("Run", date(1), true).unwrap();
        tracker.record_checkin("Run", date(2), true).unwrap();
        tracker.record_checkin("Journal", date(2), false).unwrap();
        let before = tracker.store().clone();
        drop(tracker);

        let reopened = HabitTracker::open_file(&path).expect("Failed to reopen tracker");
        assert!(reopened.startup_warning().is_none());
        assert_eq!(reopened.store(), &before);
        assert_eq!(reopened.list_habits(), ["Run", "Journal"]);
        assert_eq!(reopened.get_habit("Run").unwrap().streak, 2);
    }

    #[test]
    fn test_file_written_after_each_mutation() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habit_data.json");
        let storage = JsonFileStorage::new(&path);

        let mut tracker = HabitTracker::open_file(&path).unwrap();
        assert!(!path.exists());

        tracker.add_habit("Run", Category::Health, Goal::Daily).unwrap();
        assert_eq!(storage.load().unwrap().list_habits(), ["Run"]);

        tracker.record_checkin("Run", date(3), true).unwrap();
        assert_eq!(storage.load().unwrap().get_habit("Run").unwrap().streak, 1);

        tracker.remove_habit("Run").unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = HabitTracker::open_file(dir.path().join("nothing_here.json")).unwrap();

        assert!(tracker.list_habits().is_empty());
        assert!(tracker.startup_warning().is_none());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty_store() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habit_data.json");
        std::fs::write(&path, "{\"habits\": [\"Run\"").unwrap();

        let err = JsonFileStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::CorruptData { .. }));

        let mut tracker = HabitTracker::open_file(&path).unwrap();
        assert!(tracker.list_habits().is_empty());
        assert!(tracker.startup_warning().is_some());

        // The next mutation replaces the corrupt file with a valid snapshot
        tracker.add_habit("Run", Category::Health, Goal::Daily).unwrap();
        assert_eq!(JsonFileStorage::new(&path).load().unwrap().len(), 1);
    }

    #[test]
    fn test_tool_workflow() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = HabitTracker::open_file(dir.path().join("habit_data.json")).unwrap();

        create_habit(
            &mut tracker,
            CreateHabitParams {
                name: "Read".to_string(),
                category: "personal growth".to_string(),
                goal: "daily".to_string(),
            },
        )
        .unwrap();

        for (day, completed) in [("2024-11-04", true), ("2024-11-05", true), ("2024-11-06", false)] {
            log_checkin(
                &mut tracker,
                LogCheckinParams {
                    name: "Read".to_string(),
                    date: Some(day.to_string()),
                    completed,
                },
            )
            .unwrap();
        }

        let status = get_habit_status(
            &tracker,
            StatusParams { name: Some("Read".to_string()), as_of: Some(date(6)) },
        )
        .unwrap();
        assert_eq!(status.habits[0].current_streak, 0);
        assert_eq!(status.habits[0].longest_run, 2);

        let calendar = show_calendar(
            &tracker,
            CalendarParams { name: "Read".to_string(), year: Some(2024), month: Some(11) },
        )
        .unwrap();
        // November 2024 starts on a Friday
        assert_eq!(calendar.grid.weeks[0].iter().filter(|c| c.is_empty()).count(), 4);

        let export = export_csv(&tracker, ExportParams::default()).unwrap();
        assert_eq!(export.rows, 3);
        let csv = export.csv.unwrap();
        assert!(csv.contains("Read,Personal Growth,Daily,2024-11-06,No,0"));

        remove_habit(&mut tracker, RemoveHabitParams { name: "Read".to_string() }).unwrap();
        assert!(tracker.list_habits().is_empty());
    }
}
