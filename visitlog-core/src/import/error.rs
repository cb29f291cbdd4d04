use crate::batch::BatchError;
use crate::parse::ParseError;
use crate::registry::RegistryError;
use crate::source::SelectionError;
use crate::store::StoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single line was skipped. Never ends the run.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("unparseable line: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to persist visit: {0}")]
    Persist(#[source] StoreError),
}

/// Ends the run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("import of {total} lines declined")]
    Declined { total: u64 },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Transaction(#[from] BatchError),
}

impl ImportError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
