//! Process entry point for shells
//!
//! Decides between one-shot and interactive mode, runs the shell, shuts the
//! extensions down and turns the result into a process exit code.

use crate::error::ShellResult;
use crate::oneshot::OneShotOutcome;
use crate::prompt::Prompter;
use crate::shell::Shell;

impl Shell {
    /// Run the shell for `argv` and return the process exit code
    ///
    /// With no arguments after the program name the interactive loop runs;
    /// otherwise the arguments are dispatched once. Extensions are shut down
    /// in both cases. Failures are printed through `prompter`.
    pub async fn launch(&mut self, argv: &[String], prompter: &mut dyn Prompter) -> i32 {
        let result = self.launch_inner(argv, prompter).await;
        let shutdown = self.shutdown().await;

        match result.and(shutdown) {
            Ok(()) => 0,
            Err(err) => {
                tracing::debug!(code = err.error_code(), "launch failed: {}", err);
                prompter.print_error(&err.to_string());
                err.exit_code()
            }
        }
    }

    async fn launch_inner(&mut self, argv: &[String], prompter: &mut dyn Prompter) -> ShellResult<()> {
        match self.run_once(argv, prompter).await? {
            OneShotOutcome::Completed => Ok(()),
            OneShotOutcome::Interactive => {
                tracing::debug!("no one-shot command, starting interactive shell");
                self.run(prompter).await
            }
        }
    }
}
