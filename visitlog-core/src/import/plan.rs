use crate::import::{Confirm, ImportError};
use crate::source::{LogSelection, count_lines};
use std::path::PathBuf;
use tracing::info;

/// Log files the user agreed to import, with their line total.
///
/// Building a plan reads the logs and nothing else, so a rejected selection or
/// a declined prompt leaves no trace in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    files: Vec<PathBuf>,
    total: u64,
}

impl ImportPlan {
    /// Resolves the selection, counts its lines and asks for confirmation.
    pub fn prepare(
        selection: &LogSelection,
        confirm: &mut impl Confirm,
    ) -> Result<Self, ImportError> {
        Self::confirm(selection.resolve()?, confirm)
    }

    /// Counts the lines of `files` and asks for confirmation.
    pub fn confirm(files: Vec<PathBuf>, confirm: &mut impl Confirm) -> Result<Self, ImportError> {
        let total = count_total(&files)?;
        if !confirm.confirm(total) {
            info!(total, "import declined");
            return Err(ImportError::Declined { total });
        }
        Ok(Self { files, total })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

fn count_total(files: &[PathBuf]) -> Result<u64, ImportError> {
    let mut total = 0;
    for path in files {
        let lines = count_lines(path).map_err(|e| ImportError::read(path, e))?;
        info!(file = %path.display(), lines, "log file selected");
        total += lines;
    }
    info!(files = files.len(), total, "lines to import");
    Ok(total)
}
