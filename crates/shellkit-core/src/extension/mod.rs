//! Extensions
//!
//! An extension contributes commands and options through a [`Registrar`]
//! and gets a chance to clean up when the shell shuts down. Registration is
//! all-or-nothing: when `register` fails, every entry it added is rolled
//! back and the extension does not join the active set.

mod host;
mod registrar;

pub use host::ExtensionHost;
pub use registrar::Registrar;

use crate::error::ShellResult;
use async_trait::async_trait;

/// A bundle of commands and options registered together
#[async_trait]
pub trait Extension: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    /// Add commands and options to the shell
    async fn register(&self, surface: &mut Registrar<'_>) -> ShellResult<()>;

    /// Release resources at shutdown
    async fn unregister(&self) -> ShellResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
