//! Error types for shellkit
//!
//! Every fallible operation in the core returns [`ShellResult`]. The variants
//! of [`ShellError`] follow the shell's error taxonomy:
//! - dispatch errors (`UnknownCommand`, `NotACommand`, `MissingRequiredArgument`,
//!   `Handler`) are recovered by the interactive loop and printed as a single
//!   line; in one-shot mode they end the process with [`ShellError::exit_code`]
//! - registration errors (`InvalidOptionDeclaration`, `ExtensionRegistration`)
//!   surface to the host that registered the extension
//! - everything else (prompt, config, IO) is fatal to the current run

mod constructors;
mod conversions;
mod types;

pub use types::{ShellError, ShellResult};
