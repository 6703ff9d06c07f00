//! Configuration model

use serde::{Deserialize, Serialize};

/// Default configuration file name looked up by the CLI host
pub const DEFAULT_CONFIG_FILE: &str = "shellkit.json";

/// Prompt shown when no prompt is configured
pub const DEFAULT_PROMPT: &str = ">";

/// Host configuration shared by the interactive shell and one-shot mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Program name used in one-shot usage output
    pub name: String,
    /// Prompt text for the normal command prompt
    pub prompt: String,
    /// Version reported by `--version`
    pub version: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Spaces added after the widest signature in help listings
    pub help_margin: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: "shellkit".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "warn".to_string(),
            help_margin: 5,
        }
    }
}

impl ShellConfig {
    /// Set the prompt text
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the version reported in one-shot mode
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the program name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
