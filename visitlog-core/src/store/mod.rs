//! Persistence boundary for the importer.
//!
//! The pipeline only ever talks to [`VisitorStore`]; which engine sits behind
//! it is a deployment choice. [`SqliteStore`] is the bundled implementation.

mod error;
mod sqlite;

pub use error::*;
pub use sqlite::*;

use crate::model::{IgnoreConfig, Visit, Visitor};
use chrono::{DateTime, Utc};

pub trait VisitorStore {
    //-------------------------------------------------------------------------
    // Transactions
    //-------------------------------------------------------------------------
    fn begin(&self) -> Result<(), StoreError>;

    fn commit(&self) -> Result<(), StoreError>;

    fn rollback(&self) -> Result<(), StoreError>;

    /// Opens a nested unit inside the current transaction.
    fn savepoint(&self) -> Result<(), StoreError>;

    fn release_savepoint(&self) -> Result<(), StoreError>;

    /// Discards everything written since [`VisitorStore::savepoint`] and closes it.
    fn rollback_to_savepoint(&self) -> Result<(), StoreError>;

    //-------------------------------------------------------------------------
    // Visitors
    //-------------------------------------------------------------------------
    fn find_visitor(&self, ip: &str) -> Result<Option<Visitor>, StoreError>;

    /// Inserts a visitor with zero visits and no exemptions. Fails if the
    /// address already exists.
    fn create_visitor(&self, ip: &str, created_at: DateTime<Utc>) -> Result<Visitor, StoreError>;

    fn increment_visit_count(&self, ip: &str) -> Result<(), StoreError>;

    fn set_ignorables(&self, ip: &str, ignorables: &IgnoreConfig) -> Result<(), StoreError>;

    //-------------------------------------------------------------------------
    // Visits and agents
    //-------------------------------------------------------------------------
    fn insert_visit(&self, visit: &Visit) -> Result<(), StoreError>;

    /// Adds one occurrence, creating the agent at 1 when unseen.
    fn increment_user_agent(&self, agent: &str) -> Result<(), StoreError>;
}
