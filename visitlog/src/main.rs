use clap::{Parser, Subcommand};
use tracing::error;
use visitlog_core::cli;
use visitlog_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "visitlog",
    version,
    about = "visitlog: seed visitor analytics from Apache access logs"
)]
struct Cli {
    /// Log output format (pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import access logs into the visitor database
    Import(cli::import::ImportArgs),

    /// Exempt addresses from visit logging
    Whitelist(cli::whitelist::WhitelistArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Command::Import(args) => cli::import::run(args),
        Command::Whitelist(args) => cli::whitelist::run(args),
        Command::Config { cmd } => cli::config::run(cmd),
    };

    if let Err(e) = result {
        error!(error = %format!("{e:#}"), "visitlog failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
