use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no visitor with address {ip}")]
    MissingVisitor { ip: String },

    #[error("invalid ignore configuration for {ip}: {source}")]
    Ignorables {
        ip: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid timestamp '{value}' stored for {ip}")]
    Timestamp { ip: String, value: String },
}
