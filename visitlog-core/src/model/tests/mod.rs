use crate::model::{IgnoreConfig, Visit};
use crate::parse::parse_line;
use pretty_assertions::assert_eq;

#[test]
fn ignore_config_round_trips_through_json() {
    // Arrange
    let mut cfg = IgnoreConfig::default();
    cfg.whitelist("10.0.0.2");
    cfg.whitelist("10.0.0.1");

    // Act
    let json = serde_json::to_string(&cfg).unwrap();
    let back: IgnoreConfig = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(json, r#"{"whitelist":["10.0.0.1","10.0.0.2"]}"#);
    assert_eq!(back, cfg);
}

#[test]
fn ignore_config_accepts_empty_object() {
    let cfg: IgnoreConfig = serde_json::from_str("{}").unwrap();

    assert!(cfg.whitelist.is_empty());
}

#[test]
fn whitelist_membership() {
    // Arrange
    let mut cfg = IgnoreConfig::default();

    // Act
    let added = cfg.whitelist("10.0.0.1");
    let again = cfg.whitelist("10.0.0.1");

    // Assert
    assert!(added);
    assert!(!again);
    assert!(cfg.is_whitelisted("10.0.0.1"));
    assert!(!cfg.is_whitelisted("10.0.0.10"));
}

#[test]
fn visit_is_built_from_entry() {
    // Arrange
    let entry = parse_line(
        r#"10.0.0.1 - - [01/Jan/2020:10:00:00 +0200] "POST /login?next=/ HTTP/1.1" 302 0 "-" "curl""#,
    )
    .unwrap();

    // Act
    let visit = Visit::from(&entry);

    // Assert
    assert_eq!(visit.ip, "10.0.0.1");
    assert_eq!(visit.request, "/login?next=/");
    assert_eq!(visit.referer, None);
    assert_eq!(visit.user_agent, "curl");
    assert_eq!(visit.created_at.to_rfc3339(), "2020-01-01T10:00:00+02:00");
}
