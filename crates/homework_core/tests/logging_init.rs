use chrono::NaiveDate;
use homework_core::{init_logging, logging_status, HomeworkStore, LoggingError, Subject};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap();

    init_logging("info", log_dir_str).unwrap();
    init_logging(" INFO ", log_dir_str).unwrap();

    let level_err = init_logging("debug", log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::LevelConflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", other_dir_str).unwrap_err();
    assert!(matches!(dir_err, LoggingError::DirConflict { .. }));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    // Store events go through the active logger without disturbing results.
    let mut store = HomeworkStore::new();
    let due = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    let item = store.add(Subject::Maths, "sums", due).unwrap();
    assert!(store.add(Subject::Maths, " ", due).is_err());
    assert!(store.delete(&item.id().to_string()));
}

#[test]
fn init_logging_rejects_relative_dir_before_touching_state() {
    let err = init_logging("info", "logs/relative").unwrap_err();
    assert!(matches!(err, LoggingError::RelativeLogDir(_)));
}
