//! Task configuration: options plus the file mappings to compile.

mod loader;
mod types;

pub use loader::{ConfigError, DEFAULT_CONFIG_FILE};
pub use types::{Config, OptionValue, Options};
