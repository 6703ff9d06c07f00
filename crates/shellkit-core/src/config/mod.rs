//! Shell configuration
//!
//! Configuration is layered: built-in defaults, then an optional file
//! (JSON, TOML or YAML picked by extension), then `SHELLKIT_*` environment
//! variables.

mod env_loader;
mod file_loader;
mod model;

pub use env_loader::{apply_env, ENV_LOG, ENV_PROMPT, ENV_VERSION};
pub use file_loader::load_from_file;
pub use model::{DEFAULT_CONFIG_FILE, DEFAULT_PROMPT, ShellConfig};

use crate::error::ShellResult;
use std::path::Path;

/// Load configuration from `path` and apply environment overrides
pub fn load(path: &Path) -> ShellResult<ShellConfig> {
    let mut config = load_from_file(path)?;
    apply_env(&mut config)?;
    Ok(config)
}
