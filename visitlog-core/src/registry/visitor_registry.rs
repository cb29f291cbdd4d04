use crate::model::Visitor;
use crate::store::{StoreError, VisitorStore};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// Lookup or creation of a visitor failed. The storage layer is broken, not
/// the input, so callers must not carry on.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to look up visitor {ip}: {source}")]
    Lookup {
        ip: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to create visitor {ip}: {source}")]
    Create {
        ip: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to update visitor {ip}: {source}")]
    Update {
        ip: String,
        #[source]
        source: StoreError,
    },
}

pub struct VisitorRegistry<'s, S> {
    store: &'s S,
    created: u64,
}

impl<'s, S: VisitorStore> VisitorRegistry<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store, created: 0 }
    }

    /// Returns the stored visitor for `ip`, creating it first if needed.
    pub fn get_or_create(
        &mut self,
        ip: &str,
        seen_at: DateTime<Utc>,
    ) -> Result<Visitor, RegistryError> {
        let existing = self
            .store
            .find_visitor(ip)
            .map_err(|source| RegistryError::Lookup {
                ip: ip.to_string(),
                source,
            })?;
        if let Some(visitor) = existing {
            return Ok(visitor);
        }

        let visitor =
            self.store
                .create_visitor(ip, seen_at)
                .map_err(|source| RegistryError::Create {
                    ip: ip.to_string(),
                    source,
                })?;
        self.created += 1;
        debug!(ip, "visitor created");
        Ok(visitor)
    }

    pub fn is_ignored(&self, visitor: &Visitor, ip: &str) -> bool {
        visitor.ignorables.is_whitelisted(ip)
    }

    pub fn increment_count(&self, ip: &str) -> Result<(), StoreError> {
        self.store.increment_visit_count(ip)
    }

    /// Adds `ip` to its own whitelist so that later imports skip it.
    /// Returns `false` when it was already whitelisted.
    pub fn whitelist(&mut self, ip: &str, seen_at: DateTime<Utc>) -> Result<bool, RegistryError> {
        let mut visitor = self.get_or_create(ip, seen_at)?;
        if !visitor.ignorables.whitelist(ip) {
            return Ok(false);
        }
        self.store
            .set_ignorables(ip, &visitor.ignorables)
            .map_err(|source| RegistryError::Update {
                ip: ip.to_string(),
                source,
            })?;
        Ok(true)
    }

    /// Visitors created through this registry.
    pub fn created(&self) -> u64 {
        self.created
    }
}
