//! Environment variable-based configuration overrides

use super::model::ShellConfig;
use crate::error::ShellResult;
use std::env;

pub const ENV_PROMPT: &str = "SHELLKIT_PROMPT";
pub const ENV_VERSION: &str = "SHELLKIT_VERSION";
pub const ENV_LOG: &str = "SHELLKIT_LOG";

/// Override configuration values from `SHELLKIT_*` environment variables
pub fn apply_env(config: &mut ShellConfig) -> ShellResult<()> {
    apply_from(config, |key| env::var(key).ok())
}

fn apply_from(
    config: &mut ShellConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ShellResult<()> {
    if let Some(prompt) = lookup(ENV_PROMPT).filter(|v| !v.is_empty()) {
        config.prompt = prompt;
    }
    if let Some(version) = lookup(ENV_VERSION).filter(|v| !v.is_empty()) {
        config.version = version;
    }
    if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
        config.log_level = level;
    }
    Ok(())
}
