//! `visitlog whitelist`: exempt addresses from visit logging.

use crate::conf::{DEFAULT_CONFIG_FILE, load_config_or_default};
use crate::registry::VisitorRegistry;
use crate::store::SqliteStore;
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct WhitelistArgs {
    /// Addresses to whitelist
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Config file; `visitlog.hcl` in the working directory is used if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database holding the visitors
    #[arg(long)]
    pub database: Option<PathBuf>,
}

pub fn run(args: WhitelistArgs) -> Result<()> {
    let cfg = load_config_or_default(args.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    let database = args.database.unwrap_or(cfg.database);

    let store = SqliteStore::open(&database)
        .with_context(|| format!("failed to open database {}", database.display()))?;
    let mut registry = VisitorRegistry::new(&store);

    for address in &args.addresses {
        if registry.whitelist(address, Utc::now())? {
            info!(ip = %address, "address whitelisted");
            println!("✔ {address} whitelisted");
        } else {
            println!("✔ {address} already whitelisted");
        }
    }
    Ok(())
}
