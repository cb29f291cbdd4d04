use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ database {}", cfg.database.display());
            println!("✔ logs {}/{}*", cfg.log_dir.display(), cfg.file_prefix);
            println!("✔ batches of {} visits", cfg.batch_size);
            println!("✔ {} noise prefixes", cfg.noise_prefixes.len());
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
        return;
    }

    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(hint) = config_error_hint(&err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidBatchSize => Some(
            "Visits are committed in batches of at least one.\n\
             \n\
             Example:\n\
             \n\
             batch_size = 1000",
        ),

        ConfigError::InvalidNoisePrefix { .. } => Some(
            "Noise prefixes are matched against the request path and must be absolute.\n\
             \n\
             Example:\n\
             \n\
             noise_prefixes = [\"/assets\", \"/css\", \"/favicon\"]",
        ),

        ConfigError::InvalidFilePrefix { .. } => Some(
            "The file prefix is matched literally against names in log_dir.\n\
             \n\
             Use a plain name such as \"access\" without '/', '*', '?' or '['.",
        ),

        ConfigError::ReadFile { .. } | ConfigError::Parse { .. } => None,
    }
}
