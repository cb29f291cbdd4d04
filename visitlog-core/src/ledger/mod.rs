mod user_agent_ledger;
#[cfg(test)]
mod tests;

pub use user_agent_ledger::*;
