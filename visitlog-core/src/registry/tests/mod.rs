use crate::registry::{RegistryError, VisitorRegistry};
use crate::store::{SqliteStore, VisitorStore};
use chrono::{DateTime, TimeZone, Utc};

fn seen() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 6, 30, 16, 31, 51).unwrap()
}

#[test]
fn get_or_create_is_idempotent() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = VisitorRegistry::new(&store);

    // Act
    let first = registry.get_or_create("10.0.0.1", seen()).unwrap();
    let second = registry.get_or_create("10.0.0.1", seen()).unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(first.visits, 0);
    assert_eq!(registry.created(), 1);
    assert_eq!(store.visitor_total().unwrap(), 1);
}

#[test]
fn created_visitor_keeps_first_sighting() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = VisitorRegistry::new(&store);

    let visitor = registry.get_or_create("10.0.0.1", seen()).unwrap();

    assert_eq!(visitor.created_at, seen());
}

#[test]
fn increment_count_updates_store() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = VisitorRegistry::new(&store);
    registry.get_or_create("10.0.0.1", seen()).unwrap();

    // Act
    registry.increment_count("10.0.0.1").unwrap();

    // Assert
    let visitor = registry.get_or_create("10.0.0.1", seen()).unwrap();
    assert_eq!(visitor.visits, 1);
}

#[test]
fn fresh_visitor_is_not_ignored() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = VisitorRegistry::new(&store);

    let visitor = registry.get_or_create("10.0.0.1", seen()).unwrap();

    assert!(!registry.is_ignored(&visitor, "10.0.0.1"));
}

#[test]
fn whitelist_marks_visitor_ignored() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = VisitorRegistry::new(&store);

    // Act
    let added = registry.whitelist("10.0.0.1", seen()).unwrap();
    let again = registry.whitelist("10.0.0.1", seen()).unwrap();

    // Assert
    assert!(added);
    assert!(!again);
    let visitor = store.find_visitor("10.0.0.1").unwrap().unwrap();
    assert!(registry.is_ignored(&visitor, "10.0.0.1"));
}

#[test]
fn creation_failure_is_reported() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .connection()
        .execute_batch(
            "CREATE TRIGGER no_visitors BEFORE INSERT ON visitor
             BEGIN SELECT RAISE(ABORT, 'visitor table is read only'); END;",
        )
        .unwrap();
    let mut registry = VisitorRegistry::new(&store);

    // Act
    let err = registry.get_or_create("10.0.0.1", seen()).unwrap_err();

    // Assert
    match err {
        RegistryError::Create { ip, .. } => assert_eq!(ip, "10.0.0.1"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(registry.created(), 0);
}
