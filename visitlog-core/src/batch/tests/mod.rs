use crate::batch::{BatchState, BatchStats, BatchTransaction};
use crate::model::{IgnoreConfig, Visit, Visitor};
use crate::store::{SqliteStore, StoreError, VisitorStore};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn store_with_visitor() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .create_visitor("10.0.0.1", Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        .unwrap();
    store
}

fn visit(n: u64) -> Visit {
    Visit {
        ip: "10.0.0.1".to_string(),
        request: format!("/page/{n}"),
        referer: None,
        user_agent: "curl".to_string(),
        created_at: DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap(),
    }
}

fn write_records(batch: &mut BatchTransaction<'_, SqliteStore>, count: u64) -> u64 {
    let mut commits = 0;
    for n in 0..count {
        batch
            .isolate(|store| store.insert_visit(&visit(n)))
            .unwrap();
        if batch.record_written().unwrap() {
            commits += 1;
        }
    }
    commits
}

#[test]
fn commits_every_batch_size_records() {
    // Arrange
    let store = store_with_visitor();
    let mut batch = BatchTransaction::begin(&store, 3).unwrap();

    // Act
    let commits = write_records(&mut batch, 7);

    // Assert
    assert_eq!(commits, 2);
    assert_eq!(batch.pending(), 1);
    assert_eq!(batch.state(), BatchState::Open);
}

#[test]
fn batch_count_is_ceiling_of_records_over_size() {
    let cases = [(0, 3, 0), (1, 3, 1), (3, 3, 1), (4, 3, 2), (9, 3, 3), (10, 1, 10), (5, 1000, 1)];

    for (records, size, expected_batches) in cases {
        // Arrange
        let store = store_with_visitor();
        let mut batch = BatchTransaction::begin(&store, size).unwrap();

        // Act
        write_records(&mut batch, records);
        let stats = batch.finish().unwrap();

        // Assert
        assert_eq!(
            stats,
            BatchStats {
                records,
                batches: expected_batches
            },
            "records={records} size={size}"
        );
        assert_eq!(store.visit_total().unwrap(), records);
    }
}

#[test]
fn last_batch_carries_the_remainder() {
    // Arrange
    let store = store_with_visitor();
    let mut batch = BatchTransaction::begin(&store, 4).unwrap();
    write_records(&mut batch, 10);

    // Act
    let pending_before_finish = batch.pending();
    batch.finish().unwrap();

    // Assert
    assert_eq!(pending_before_finish, 2);
}

#[test]
fn zero_batch_size_commits_every_record() {
    let store = store_with_visitor();
    let mut batch = BatchTransaction::begin(&store, 0).unwrap();

    let commits = write_records(&mut batch, 3);

    assert_eq!(commits, 3);
}

#[test]
fn abandoned_batch_keeps_committed_work_only() {
    // Arrange
    let store = store_with_visitor();
    let mut batch = BatchTransaction::begin(&store, 2).unwrap();
    write_records(&mut batch, 5);

    // Act
    drop(batch);

    // Assert
    assert_eq!(store.visit_total().unwrap(), 4);
}

#[test]
fn failed_line_is_rolled_back_and_batch_stays_open() {
    // Arrange
    let store = store_with_visitor();
    let mut batch = BatchTransaction::begin(&store, 10).unwrap();

    // Act
    let result: Result<(), StoreError> = batch.isolate(|store| {
        store.insert_visit(&visit(1))?;
        store.increment_visit_count("10.0.0.404")
    });
    write_records(&mut batch, 1);
    batch.finish().unwrap();

    // Assert
    assert!(matches!(result, Err(StoreError::MissingVisitor { .. })));
    let visits = store.visits_for("10.0.0.1").unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].request, "/page/0");
}

#[test]
fn finish_commits_empty_transaction_without_counting_it() {
    // Arrange
    let store = store_with_visitor();
    let batch = BatchTransaction::begin(&store, 10).unwrap();

    // Act
    let stats = batch.finish().unwrap();

    // Assert
    assert_eq!(stats, BatchStats::default());
    // No transaction is left open: a fresh BEGIN succeeds.
    store.begin().unwrap();
    store.commit().unwrap();
}

/// Delegates to SQLite but refuses to release line savepoints.
struct StuckSavepoint(SqliteStore);

impl VisitorStore for StuckSavepoint {
    fn begin(&self) -> Result<(), StoreError> {
        self.0.begin()
    }

    fn commit(&self) -> Result<(), StoreError> {
        self.0.commit()
    }

    fn rollback(&self) -> Result<(), StoreError> {
        self.0.rollback()
    }

    fn savepoint(&self) -> Result<(), StoreError> {
        self.0.savepoint()
    }

    fn release_savepoint(&self) -> Result<(), StoreError> {
        Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn rollback_to_savepoint(&self) -> Result<(), StoreError> {
        self.0.rollback_to_savepoint()
    }

    fn find_visitor(&self, ip: &str) -> Result<Option<Visitor>, StoreError> {
        self.0.find_visitor(ip)
    }

    fn create_visitor(&self, ip: &str, created_at: DateTime<Utc>) -> Result<Visitor, StoreError> {
        self.0.create_visitor(ip, created_at)
    }

    fn increment_visit_count(&self, ip: &str) -> Result<(), StoreError> {
        self.0.increment_visit_count(ip)
    }

    fn set_ignorables(&self, ip: &str, ignorables: &IgnoreConfig) -> Result<(), StoreError> {
        self.0.set_ignorables(ip, ignorables)
    }

    fn insert_visit(&self, visit: &Visit) -> Result<(), StoreError> {
        self.0.insert_visit(visit)
    }

    fn increment_user_agent(&self, agent: &str) -> Result<(), StoreError> {
        self.0.increment_user_agent(agent)
    }
}

#[test]
fn failed_release_rolls_the_line_back() {
    // Arrange
    let store = StuckSavepoint(store_with_visitor());
    let mut batch = BatchTransaction::begin(&store, 10).unwrap();

    // Act
    let result = batch.isolate(|store| store.insert_visit(&visit(1)));
    let stats = batch.finish().unwrap();

    // Assert
    assert!(matches!(
        result,
        Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
    ));
    assert_eq!(stats, BatchStats::default());
    assert_eq!(store.0.visit_total().unwrap(), 0);
}
