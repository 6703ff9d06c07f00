//! Line dispatch
//!
//! Turns one submitted line into a handler call. Validation happens in a
//! fixed order: unknown or internal name, option or out-of-scope name,
//! missing first required parameter. Only then is the handler awaited.

use super::{ReplState, Shell};
use crate::argument::{Argument, Handler};
use crate::error::{ShellError, ShellResult};
use crate::prompt::Prompter;
use crate::wizard::{Completion, WizardSession};

/// What happened to a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, nothing ran
    Ignored,
    /// The handler ran and the prompt is back
    Completed,
    /// The handler started a wizard
    WizardStarted,
    /// `exit` ran
    Exiting,
    /// Validation or the handler failed; the error was printed
    Rejected(ShellError),
}

/// Split a raw line into tokens, collapsing runs of whitespace
pub fn normalize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

impl Shell {
    /// Handle one line typed at the command prompt
    ///
    /// Failures are printed through `prompter` and never end the loop.
    pub async fn submit(&mut self, line: &str, prompter: &mut dyn Prompter) -> LineOutcome {
        let tokens = normalize(line);
        let Some((name, args)) = tokens.split_first() else {
            return LineOutcome::Ignored;
        };
        self.history.record(line.trim());

        match self.dispatch(name, args.to_vec(), prompter).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if matches!(err, ShellError::Handler { .. }) {
                    tracing::warn!(command = %name, error = %err, "handler failed");
                } else {
                    tracing::debug!(command = %name, error = %err, "line rejected");
                }
                prompter.print_error(&err.to_string());
                self.finish();
                LineOutcome::Rejected(err)
            }
        }
    }

    /// Look up a name typed at the prompt
    fn resolve(&self, name: &str) -> ShellResult<&Argument> {
        let argument = self
            .registry
            .get(name)
            .filter(|a| !a.is_internal())
            .ok_or_else(|| ShellError::unknown_command(name))?;
        if argument.is_option() || !self.scope.is_visible(argument) {
            return Err(ShellError::not_a_command(name));
        }
        Ok(argument)
    }

    async fn dispatch(
        &mut self,
        name: &str,
        args: Vec<String>,
        prompter: &mut dyn Prompter,
    ) -> ShellResult<LineOutcome> {
        let argument = self.resolve(name)?;
        if let Some(param) = argument.missing_required(&args) {
            return Err(ShellError::missing_required(name, param));
        }
        let handler = argument.handler().clone();
        let wizard = argument.is_wizard();
        let args = argument.shape_args(args);

        tracing::debug!(command = %name, ?args, "dispatching");
        let completion = self.invoke(name, &handler, args, prompter).await?;
        Ok(self.complete(name, wizard, completion))
    }

    /// Run a handler and normalise its failure
    pub(crate) async fn invoke(
        &mut self,
        name: &str,
        handler: &Handler,
        args: Vec<String>,
        prompter: &mut dyn Prompter,
    ) -> ShellResult<Completion> {
        match handler {
            Handler::Builtin(builtin) => Ok(self.run_builtin(*builtin, &args, prompter)),
            Handler::Custom(handler) => handler.call(args).await.map_err(|err| match err {
                ShellError::Other { message } => ShellError::handler(name, message),
                err if err.is_recoverable() => err,
                err => ShellError::handler(name, err.to_string()),
            }),
        }
    }

    /// Apply a handler's completion to the loop state
    fn complete(&mut self, name: &str, wizard: bool, completion: Completion) -> LineOutcome {
        match completion {
            Completion::Wizard(payload) if wizard => {
                tracing::debug!(command = %name, "wizard started");
                self.state = ReplState::WizardActive(WizardSession::new(name, payload));
                LineOutcome::WizardStarted
            }
            Completion::Wizard(_) => {
                tracing::warn!(command = %name, "wizard payload ignored for non-wizard command");
                self.finish()
            }
            Completion::Done => self.finish(),
        }
    }

    /// Return to the prompt, or leave if `exit` ran
    pub(super) fn finish(&mut self) -> LineOutcome {
        if self.exit_requested {
            self.state = ReplState::Exiting;
            LineOutcome::Exiting
        } else {
            self.state = ReplState::Prompting;
            LineOutcome::Completed
        }
    }
}
