use crate::filter::DEFAULT_NOISE_PREFIXES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "visitlog.hcl";

/// Settings for an import run. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// SQLite database that receives visitors, visits and agent counts.
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Visits written per committed transaction.
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,

    /// Directory holding the access logs.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Log files are those whose name starts with this prefix, unless an
    /// explicit list is given on the command line.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Request paths starting with any of these are never recorded.
    #[serde(default = "default_noise_prefixes")]
    pub noise_prefixes: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            batch_size: default_batch_size(),
            log_dir: default_log_dir(),
            file_prefix: default_file_prefix(),
            noise_prefixes: default_noise_prefixes(),
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("visitors.db")
}

fn default_batch_size() -> u64 {
    1000
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("/etc/httpd/logs")
}

fn default_file_prefix() -> String {
    "access".to_string()
}

fn default_noise_prefixes() -> Vec<String> {
    DEFAULT_NOISE_PREFIXES.iter().map(|p| p.to_string()).collect()
}
