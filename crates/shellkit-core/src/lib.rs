//! Shellkit core library
//!
//! Builds interactive command shells and matching one-shot command lines
//! from a registry of commands and options contributed by extensions.
//!
//! ```no_run
//! use shellkit_core::{ScriptedPrompter, Shell, ShellConfig};
//! # async fn demo() {
//! let mut shell = Shell::new(ShellConfig::default().with_prompt("demo>"));
//! let mut prompter = ScriptedPrompter::lines(["help", "exit"]);
//! let code = shell.launch(&["demo".to_string()], &mut prompter).await;
//! assert_eq!(code, 0);
//! # }
//! ```

pub mod argument;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod extension;
pub mod history;
pub mod launcher;
pub mod oneshot;
pub mod prompt;
pub mod registry;
pub mod scope;
pub mod shell;
pub mod wizard;

pub use argument::{
    Argument, ArgumentHandler, ArgumentKind, ArgumentOptions, Builtin, Description, Handler,
    Params, handler_fn,
};
pub use autocomplete::Completer;
pub use config::{ShellConfig, load as load_config};
pub use error::{ShellError, ShellResult};
pub use extension::{Extension, ExtensionHost, Registrar};
pub use history::History;
pub use oneshot::OneShotOutcome;
pub use prompt::{
    Answers, BufferEdit, EditKey, KeyHandler, Prompter, Question, QuestionKind, ScriptStep,
    ScriptedPrompter,
};
pub use registry::Registry;
pub use scope::Scope;
pub use shell::{LineOutcome, Phase, ReplState, Shell};
pub use wizard::{Completion, Wizard, WizardSession, WizardState, WizardStep};
