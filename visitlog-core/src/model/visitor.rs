use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A deduplicated identity keyed by network address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub ip: String,
    pub visits: u64,
    pub ignorables: IgnoreConfig,
    pub created_at: DateTime<Utc>,
}

/// Per-visitor exemptions from visit logging.
///
/// Persisted as JSON, e.g. `{"whitelist":["10.0.0.1"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub whitelist: BTreeSet<String>,
}

impl IgnoreConfig {
    pub fn is_whitelisted(&self, address: &str) -> bool {
        self.whitelist.contains(address)
    }

    /// Returns `true` when the address was not listed yet.
    pub fn whitelist(&mut self, address: impl Into<String>) -> bool {
        self.whitelist.insert(address.into())
    }
}
