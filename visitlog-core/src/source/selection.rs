use crate::source::SelectionError;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};

/// Which access logs an import run reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSelection {
    pub dir: PathBuf,
    pub files: FileSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSet {
    /// Names relative to the directory, read in the order given.
    Listed(Vec<String>),
    /// Every regular file whose name starts with the prefix, sorted.
    Prefixed(String),
}

impl LogSelection {
    pub fn prefixed(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            files: FileSet::Prefixed(prefix.into()),
        }
    }

    /// Builds a listed selection from a comma separated string such as
    /// `"access.log,access.log.1"`. Blank entries are dropped.
    pub fn listed(dir: impl Into<PathBuf>, list: &str) -> Self {
        let names = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            dir: dir.into(),
            files: FileSet::Listed(names),
        }
    }

    /// Resolves the selection to concrete file paths.
    ///
    /// # Errors
    ///
    /// Fails when the directory does not exist, when a listed file is missing,
    /// or when nothing is selected at all.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, SelectionError> {
        if !self.dir.is_dir() {
            return Err(SelectionError::NotADirectory {
                dir: self.dir.clone(),
            });
        }

        let paths = match &self.files {
            FileSet::Listed(names) => {
                let mut paths = Vec::with_capacity(names.len());
                for name in names {
                    let path = self.dir.join(name);
                    if !path.is_file() {
                        return Err(SelectionError::MissingFile { path });
                    }
                    paths.push(path);
                }
                if paths.is_empty() {
                    return Err(SelectionError::NoFiles {
                        pattern: self.dir.display().to_string(),
                    });
                }
                paths
            }
            FileSet::Prefixed(prefix) => {
                let paths = discover(&self.dir, prefix)?;
                if paths.is_empty() {
                    return Err(SelectionError::NoFiles {
                        pattern: prefix_glob(&self.dir, prefix),
                    });
                }
                paths
            }
        };

        Ok(paths)
    }
}

/// Finds the regular files in `dir` whose names begin with `prefix`.
///
/// Both the directory and the prefix are matched literally; only the trailing
/// `*` acts as a wildcard. The result is sorted so that runs are repeatable.
pub fn discover(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, SelectionError> {
    let pattern = prefix_glob(dir, prefix);
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| SelectionError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

fn prefix_glob(dir: &Path, prefix: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    let name = format!("{}*", Pattern::escape(prefix));
    Path::new(&dir).join(name).to_string_lossy().into_owned()
}
