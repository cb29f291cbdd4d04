use integration_tests::harness::{combined_line, init_test_tracing, write_log};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tracing::Level;
use visitlog_core::filter::NoiseFilter;
use visitlog_core::import::{ImportPipeline, NoProgress};
use visitlog_core::source::LogSelection;
use visitlog_core::store::SqliteStore;

#[test]
fn skipped_lines_are_reported_with_file_and_line() {
    // Arrange
    let events = init_test_tracing();
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "access.log",
        &[
            combined_line("10.0.0.1", "/", "curl"),
            "not a log line".to_string(),
            combined_line("10.0.0.1", "/after", "curl"),
        ],
    );
    let store = SqliteStore::open_in_memory().unwrap();

    // Act
    let summary = ImportPipeline::new(&store, NoiseFilter::default(), 10)
        .run(
            &LogSelection::prefixed(dir.path(), "access"),
            &mut |_: u64| true,
            &mut NoProgress,
        )
        .unwrap();

    // Assert
    assert_eq!(summary.recorded, 2);
    let file = log.display().to_string();
    let events = events.lock().unwrap();
    let skipped: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::WARN && e.field("file") == Some(file.as_str()))
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].field("line"), Some("2"));
    assert_eq!(skipped[0].field("message"), Some("line skipped"));
    assert!(
        skipped[0]
            .field("error")
            .is_some_and(|e| e.contains("combined log format"))
    );
}

#[test]
fn selected_files_are_reported_with_their_size() {
    // Arrange
    let events = init_test_tracing();
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "access.log",
        &[
            combined_line("10.0.0.1", "/", "curl"),
            combined_line("10.0.0.2", "/", "curl"),
        ],
    );
    let store = SqliteStore::open_in_memory().unwrap();

    // Act
    ImportPipeline::new(&store, NoiseFilter::default(), 10)
        .run(
            &LogSelection::prefixed(dir.path(), "access"),
            &mut |_: u64| true,
            &mut NoProgress,
        )
        .unwrap();

    // Assert
    let file = log.display().to_string();
    let events = events.lock().unwrap();
    let selected = events
        .iter()
        .find(|e| {
            e.field("message") == Some("log file selected") && e.field("file") == Some(file.as_str())
        })
        .expect("selection event");
    assert_eq!(selected.field("lines"), Some("2"));
}
