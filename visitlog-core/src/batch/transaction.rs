use crate::store::{StoreError, VisitorStore};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchState {
    Open,
    Committed,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] StoreError),

    #[error("failed to commit batch of {records} records: {source}")]
    Commit {
        records: u64,
        #[source]
        source: StoreError,
    },
}

/// Totals reported once the last batch is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub records: u64,
    /// Commits that carried at least one record.
    pub batches: u64,
}

/// Owns the single open transaction of an import run.
///
/// Records accumulate in the open transaction; every `batch_size` records the
/// transaction is committed and a new one begun straight away. Writes for one
/// line go through [`BatchTransaction::isolate`] so a failing line leaves
/// nothing behind while the batch stays open.
pub struct BatchTransaction<'s, S: VisitorStore> {
    store: &'s S,
    batch_size: u64,
    state: BatchState,

    // since the last commit
    pending: u64,

    // whole run
    records: u64,
    batches: u64,
}

impl<'s, S: VisitorStore> BatchTransaction<'s, S> {
    /// Begins the first transaction. A batch size of zero is treated as one.
    pub fn begin(store: &'s S, batch_size: u64) -> Result<Self, BatchError> {
        store.begin().map_err(BatchError::Begin)?;
        Ok(Self {
            store,
            batch_size: batch_size.max(1),
            state: BatchState::Open,
            pending: 0,
            records: 0,
            batches: 0,
        })
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Records written since the last commit.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn stats(&self) -> BatchStats {
        BatchStats {
            records: self.records,
            batches: self.batches,
        }
    }

    /// Runs `write` inside a savepoint of the open transaction. On error,
    /// including a failed release, everything `write` did is rolled back and
    /// the error handed back.
    pub fn isolate<T>(
        &mut self,
        write: impl FnOnce(&'s S) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        self.store.savepoint()?;
        let result = write(self.store).and_then(|value| {
            self.store.release_savepoint()?;
            Ok(value)
        });
        if result.is_err() {
            self.abandon_savepoint();
        }
        result
    }

    fn abandon_savepoint(&self) {
        if let Err(rollback) = self.store.rollback_to_savepoint() {
            warn!(error = %rollback, "failed to roll back line savepoint");
        }
    }

    /// Counts one persisted record and commits when the batch is full.
    /// Returns `true` if a commit happened.
    pub fn record_written(&mut self) -> Result<bool, BatchError> {
        self.pending += 1;
        self.records += 1;

        if self.pending < self.batch_size {
            return Ok(false);
        }

        self.commit()?;
        self.store.begin().map_err(BatchError::Begin)?;
        self.state = BatchState::Open;
        Ok(true)
    }

    /// Commits whatever is still open, however small.
    pub fn finish(mut self) -> Result<BatchStats, BatchError> {
        if self.state == BatchState::Open {
            self.commit()?;
        }
        Ok(self.stats())
    }

    fn commit(&mut self) -> Result<(), BatchError> {
        let records = self.pending;
        self.store
            .commit()
            .map_err(|source| BatchError::Commit { records, source })?;
        self.state = BatchState::Committed;
        self.pending = 0;
        if records > 0 {
            self.batches += 1;
            debug!(records, batch = self.batches, "batch committed");
        }
        Ok(())
    }
}

impl<S: VisitorStore> Drop for BatchTransaction<'_, S> {
    fn drop(&mut self) {
        if self.state == BatchState::Open {
            if let Err(err) = self.store.rollback() {
                warn!(error = %err, "failed to roll back abandoned batch");
            }
        }
    }
}
