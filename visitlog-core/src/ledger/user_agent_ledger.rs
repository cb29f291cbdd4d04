use crate::store::{StoreError, VisitorStore};

/// Keeps the per-agent occurrence counts in step with recorded visits.
pub struct UserAgentLedger<'s, S> {
    store: &'s S,
    recorded: u64,
}

impl<'s, S: VisitorStore> UserAgentLedger<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store, recorded: 0 }
    }

    pub fn record(&mut self, agent: &str) -> Result<(), StoreError> {
        self.store.increment_user_agent(agent)?;
        self.recorded += 1;
        Ok(())
    }

    /// Increments applied during this run.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }
}
