use crate::conf::{DEFAULT_CONFIG_FILE, ImportConfig, load_config_or_default, validate};
use crate::source::LogSelection;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct ImportArgs {
    /// Config file; `visitlog.hcl` in the working directory is used if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database to import into
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Directory holding the access logs
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Comma separated log files inside the directory, e.g. `access.log,access.log.1`
    #[arg(long, conflicts_with = "prefix")]
    pub files: Option<String>,

    /// Import every file whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Visits per committed transaction
    #[arg(long)]
    pub batch_size: Option<u64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ImportArgs {
    /// Loads the config file and applies flags on top.
    pub fn resolve_config(&self) -> Result<ImportConfig> {
        let mut cfg =
            load_config_or_default(self.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;

        if let Some(database) = &self.database {
            cfg.database = database.clone();
        }
        if let Some(dir) = &self.dir {
            cfg.log_dir = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            cfg.file_prefix = prefix.clone();
        }
        if let Some(batch_size) = self.batch_size {
            cfg.batch_size = batch_size;
        }

        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn selection(&self, cfg: &ImportConfig) -> LogSelection {
        match &self.files {
            Some(files) => LogSelection::listed(&cfg.log_dir, files),
            None => LogSelection::prefixed(&cfg.log_dir, &cfg.file_prefix),
        }
    }
}
