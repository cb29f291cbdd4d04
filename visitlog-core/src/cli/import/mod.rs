//! `visitlog import`
//!
//! Resolves settings (config file, then flags) and asks for confirmation
//! before the store is opened. Then runs the [`ImportPipeline`] and prints
//! what it did.

mod args;
mod confirm;
mod progress;
mod summary;
#[cfg(test)]
mod tests;

pub use args::*;
pub use confirm::*;
pub use progress::*;
pub use summary::*;

use crate::import::{ImportError, ImportPipeline, ImportPlan};
use crate::store::SqliteStore;
use anyhow::{Context, Result};
use tracing::info;

pub fn run(args: ImportArgs) -> Result<()> {
    let cfg = args.resolve_config()?;
    let selection = args.selection(&cfg);

    // The database is only touched once the user has agreed to the import.
    let mut confirm = PromptConfirm::stdio(args.yes);
    let plan = match ImportPlan::prepare(&selection, &mut confirm) {
        Ok(plan) => plan,
        Err(ImportError::Declined { total }) => {
            info!(total, "nothing imported");
            println!("Import cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err).context("import failed"),
    };

    let store = SqliteStore::open(&cfg.database)
        .with_context(|| format!("failed to open database {}", cfg.database.display()))?;
    let mut progress = TracingProgress::default();
    let summary = ImportPipeline::from_config(&store, &cfg)
        .execute(&plan, &mut progress)
        .context("import failed")?;

    print_summary(&summary);
    Ok(())
}
