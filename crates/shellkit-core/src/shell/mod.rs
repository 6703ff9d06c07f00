//! Interactive shell
//!
//! [`Shell`] owns the registry, the active scope, the completion cache, the
//! history and the extension set, and drives the read-eval loop:
//!
//! ```text
//!            line (exit ran)
//! Prompting ───────────────────────────► Exiting
//!   │   ▲
//!   │   │ continuation returns Done
//!   │   │
//!   ▼   │
//! WizardActive ◄──┐ continuation returns Repeat
//!        └────────┘
//! ```
//!
//! A line is dispatched only after the previous handler has completed, so
//! registry and scope changes made by one command are visible to the next.

mod builtins;
mod dispatch;
mod keys;

pub use dispatch::{LineOutcome, normalize};
pub use keys::LineKeys;

use crate::autocomplete::Completer;
use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::extension::{Extension, ExtensionHost};
use crate::history::History;
use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::scope::Scope;
use crate::wizard::{WizardSession, WizardState};

/// State of the read-eval loop
#[derive(Debug)]
pub enum ReplState {
    /// The normal command prompt is active
    Prompting,
    /// A wizard sub-prompt is active
    WizardActive(WizardSession),
    /// The loop has ended
    Exiting,
}

/// State tag without the wizard payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Prompting,
    WizardActive,
    Exiting,
}

/// An interactive shell built from registered extensions
pub struct Shell {
    config: ShellConfig,
    registry: Registry,
    scope: Scope,
    completer: Completer,
    history: History,
    extensions: ExtensionHost,
    state: ReplState,
    exit_requested: bool,
}

impl Shell {
    /// Create a shell with the built-in `exit`, `help` and `scope` commands
    pub fn new(config: ShellConfig) -> Self {
        let mut registry = Registry::with_margin(config.help_margin);
        for (name, argument) in builtins::arguments() {
            registry.add(name, argument);
        }

        let scope = Scope::new();
        let mut completer = Completer::new();
        completer.reload(&registry, &scope);

        Self {
            config,
            registry,
            scope,
            completer,
            history: History::new(),
            extensions: ExtensionHost::new(),
            state: ReplState::Prompting,
            exit_requested: false,
        }
    }

    /// Register an extension and refresh completion
    pub async fn register_extension(&mut self, extension: Box<dyn Extension>) -> ShellResult<()> {
        let result = self
            .extensions
            .register(extension, &mut self.registry)
            .await;
        self.reload_completion();
        result
    }

    /// Run every extension's unregister hook
    pub async fn shutdown(&mut self) -> ShellResult<()> {
        let result = self.extensions.unregister_all(&mut self.registry).await;
        self.reload_completion();
        result
    }

    /// Switch the active scope and refresh completion
    pub fn set_scope(&mut self, name: Option<&str>) {
        self.scope.set(name);
        self.reload_completion();
    }

    fn reload_completion(&mut self) {
        self.completer.reload(&self.registry, &self.scope);
    }

    /// Prompt text decorated with the active scope
    pub fn prompt_text(&self) -> String {
        if self.scope.is_global() {
            self.config.prompt.clone()
        } else {
            format!("{} {}", self.scope.active(), self.config.prompt)
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn completer(&self) -> &Completer {
        &self.completer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn extensions(&self) -> &ExtensionHost {
        &self.extensions
    }

    pub fn state(&self) -> &ReplState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            ReplState::Prompting => Phase::Prompting,
            ReplState::WizardActive(_) => Phase::WizardActive,
            ReplState::Exiting => Phase::Exiting,
        }
    }

    /// Drive the loop until `exit` runs or input ends
    pub async fn run(&mut self, prompter: &mut dyn Prompter) -> ShellResult<()> {
        self.exit_requested = false;
        if matches!(self.state, ReplState::Exiting) {
            self.state = ReplState::Prompting;
        }

        loop {
            match std::mem::replace(&mut self.state, ReplState::Prompting) {
                ReplState::Exiting => {
                    self.state = ReplState::Exiting;
                    break;
                }
                ReplState::Prompting => {
                    let prompt = self.prompt_text();
                    let width = prompter.terminal_width();
                    let line = {
                        let mut keys = LineKeys::new(&mut self.history, &self.completer, width);
                        prompter.read_line(&prompt, &mut keys).await?
                    };
                    match line {
                        Some(line) => {
                            self.submit(&line, prompter).await;
                        }
                        None => {
                            tracing::debug!("end of input");
                            self.state = ReplState::Exiting;
                        }
                    }
                }
                ReplState::WizardActive(session) => {
                    self.wizard_round(session, prompter).await?;
                }
            }
        }
        Ok(())
    }

    /// Show the wizard's questions once and route the answers
    async fn wizard_round(
        &mut self,
        mut session: WizardSession,
        prompter: &mut dyn Prompter,
    ) -> ShellResult<()> {
        let answers = prompter.ask(session.questions()).await?;
        match session.feed(&answers) {
            WizardState::Done => {
                tracing::debug!(command = session.command(), rounds = session.rounds(), "wizard finished");
                self.finish();
            }
            WizardState::Repeat | WizardState::AwaitingAnswer => {
                self.state = ReplState::WizardActive(session);
            }
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
