use crate::parse::LogEntry;
use chrono::{DateTime, FixedOffset};

/// One recorded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub ip: String,
    pub request: String,
    pub referer: Option<String>,
    pub user_agent: String,
    /// Taken from the log line, not from the clock.
    pub created_at: DateTime<FixedOffset>,
}

impl From<&LogEntry> for Visit {
    fn from(entry: &LogEntry) -> Self {
        Visit {
            ip: entry.host.clone(),
            request: entry.request.target.clone(),
            referer: entry.referer.clone(),
            user_agent: entry.user_agent.clone(),
            created_at: entry.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentStat {
    pub agent: String,
    pub count: u64,
}
