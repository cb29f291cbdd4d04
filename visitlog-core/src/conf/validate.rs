use crate::conf::{ConfigError, ImportConfig};

/// Checks the semantic constraints serde cannot express.
pub fn validate(config: &ImportConfig) -> Result<(), ConfigError> {
    if config.batch_size == 0 {
        return Err(ConfigError::InvalidBatchSize);
    }

    if let Some(prefix) = config.noise_prefixes.iter().find(|p| !p.starts_with('/')) {
        return Err(ConfigError::InvalidNoisePrefix {
            prefix: prefix.clone(),
        });
    }

    validate_file_prefix(&config.file_prefix)
}

/// A file prefix is a bare name fragment: no separators, no glob syntax.
pub fn validate_file_prefix(prefix: &str) -> Result<(), ConfigError> {
    let bad = prefix.is_empty()
        || prefix
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '*' | '?' | '[' | ']'));
    if bad {
        return Err(ConfigError::InvalidFilePrefix {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}
