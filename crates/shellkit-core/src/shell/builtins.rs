//! Commands provided by every shell

use super::Shell;
use crate::argument::{Argument, ArgumentOptions, Builtin};
use crate::prompt::Prompter;
use crate::wizard::Completion;

pub(super) const EXIT: &str = "exit";
pub(super) const HELP: &str = "help";
pub(super) const SCOPE: &str = "scope";

/// Built-in arguments, keyed by name
pub(super) fn arguments() -> [(&'static str, Argument); 3] {
    [
        (
            EXIT,
            Argument::builtin(Builtin::Exit, "exit the shell", ArgumentOptions::default()),
        ),
        (
            HELP,
            Argument::builtin(Builtin::Help, "list of commands", ArgumentOptions::default()),
        ),
        (
            SCOPE,
            Argument::builtin(
                Builtin::Scope,
                "change the active scope",
                ArgumentOptions::default().optional("name"),
            ),
        ),
    ]
}

impl Shell {
    pub(super) fn run_builtin(
        &mut self,
        builtin: Builtin,
        args: &[String],
        prompter: &mut dyn Prompter,
    ) -> Completion {
        match builtin {
            Builtin::Exit => {
                tracing::debug!("exit requested");
                self.exit_requested = true;
            }
            Builtin::Help => {
                for line in self.registry.help_lines(&self.scope) {
                    prompter.print_line(&line);
                }
            }
            Builtin::Scope => self.set_scope(args.first().map(String::as_str)),
        }
        Completion::Done
    }
}
