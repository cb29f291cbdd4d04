use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid log directory {dir}")]
    NotADirectory { dir: PathBuf },

    #[error("log file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("no log files matching {pattern}")]
    NoFiles { pattern: String },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
