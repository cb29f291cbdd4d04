use crate::ledger::UserAgentLedger;
use crate::model::UserAgentStat;
use crate::store::SqliteStore;
use pretty_assertions::assert_eq;

#[test]
fn record_creates_then_increments() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    let mut ledger = UserAgentLedger::new(&store);

    // Act
    ledger.record("curl/7.68.0").unwrap();
    ledger.record("curl/7.68.0").unwrap();
    ledger.record("Googlebot/2.1").unwrap();

    // Assert
    assert_eq!(ledger.recorded(), 3);
    assert_eq!(
        store.user_agent_stats().unwrap(),
        vec![
            UserAgentStat {
                agent: "curl/7.68.0".to_string(),
                count: 2
            },
            UserAgentStat {
                agent: "Googlebot/2.1".to_string(),
                count: 1
            },
        ]
    );
}

#[test]
fn failed_record_is_not_counted() {
    // Arrange
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .connection()
        .execute_batch(
            "CREATE TRIGGER no_agents BEFORE INSERT ON visitor_agent
             BEGIN SELECT RAISE(ABORT, 'agents disabled'); END;",
        )
        .unwrap();
    let mut ledger = UserAgentLedger::new(&store);

    // Act
    let result = ledger.record("curl");

    // Assert
    assert!(result.is_err());
    assert_eq!(ledger.recorded(), 0);
}
