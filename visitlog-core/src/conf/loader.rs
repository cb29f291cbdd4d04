use crate::conf::{ConfigError, ImportConfig, validate};
use std::fs;
use std::path::Path;

/// Reads and validates an HCL config file.
pub fn load_config(path: &Path) -> Result<ImportConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &raw)?;
    validate(&config)?;
    Ok(config)
}

/// Loads `path` when given. Without one, falls back to `default_path` if it
/// exists and to built-in defaults otherwise.
pub fn load_config_or_default(
    path: Option<&Path>,
    default_path: &Path,
) -> Result<ImportConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if default_path.is_file() => load_config(default_path),
        None => Ok(ImportConfig::default()),
    }
}

pub(crate) fn parse_config(path: &Path, raw: &str) -> Result<ImportConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}
