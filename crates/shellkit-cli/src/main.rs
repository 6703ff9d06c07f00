//! Shellkit CLI
//!
//! Runs the demo shell. Without arguments an interactive prompt opens;
//! with arguments the matching command runs once and the process exits.
//!
//! ```bash
//! shellkit                 # interactive
//! shellkit hello John      # one-shot
//! shellkit --scoped status # one-shot, any scope
//! ```
//!
//! Configuration is read from `$SHELLKIT_CONFIG` (default `shellkit.json`)
//! and overridden by `SHELLKIT_PROMPT`, `SHELLKIT_VERSION` and
//! `SHELLKIT_LOG`. `RUST_LOG` takes precedence over the configured level.

mod console;
mod demo;

use anyhow::{Context, Result};
use shellkit_core::Shell;
use shellkit_core::config::{self, DEFAULT_CONFIG_FILE};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "SHELLKIT_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let path = env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = config::load(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;

    // Logs go to stderr so they never interleave with the prompt line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut shell = Shell::new(config);
    shell
        .register_extension(Box::new(demo::DemoExtension::new()))
        .await
        .context("failed to register the demo extension")?;

    let argv: Vec<String> = env::args().collect();
    let mut prompter = console::TerminalPrompter::new();
    let code = shell.launch(&argv, &mut prompter).await;
    std::process::exit(code)
}
