mod check;
mod dump;

pub use check::*;
pub use dump::*;

use crate::conf::DEFAULT_CONFIG_FILE;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Print errors without hints
        #[arg(short, long)]
        plain: bool,
    },

    /// Print resolved configuration as JSON
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path } => dump(path),
    }
}
