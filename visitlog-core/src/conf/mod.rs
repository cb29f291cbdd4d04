mod error;
mod loader;
mod settings;
mod validate;

pub use error::ConfigError;
pub use loader::{load_config, load_config_or_default};
pub use settings::{DEFAULT_CONFIG_FILE, ImportConfig};
pub use validate::{validate, validate_file_prefix};
