//! One-shot dispatch
//!
//! A process started with arguments runs the matching options and command
//! once and exits instead of opening the prompt. The command line surface
//! is generated from the registry with `clap`: every exposed option becomes
//! a long flag and every exposed command a sub-command. Options run first,
//! in the order they appear on the command line.

mod cli;

pub use cli::SCOPED_FLAG;

use crate::argument::{Argument, Handler};
use crate::error::{ShellError, ShellResult};
use crate::prompt::Prompter;
use crate::shell::Shell;
use crate::wizard::{Completion, WizardSession};
use clap::ArgMatches;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use cli::{EXTRA_ARGS, is_reserved, param_id};

/// Result of a one-shot attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotOutcome {
    /// Nothing to run; the caller should open the interactive loop
    Interactive,
    /// Options and/or a command ran to completion
    Completed,
}

/// A handler picked from the command line, ready to run
struct Planned {
    name: String,
    handler: Handler,
    wizard: bool,
    args: Vec<String>,
}

impl Planned {
    fn new(argument: &Argument, args: Vec<String>) -> Self {
        Self {
            name: argument.name().to_string(),
            handler: argument.handler().clone(),
            wizard: argument.is_wizard(),
            args: argument.shape_args(args),
        }
    }
}

impl Shell {
    /// Run `argv` (program name first) as a one-shot invocation
    pub async fn run_once(
        &mut self,
        argv: &[String],
        prompter: &mut dyn Prompter,
    ) -> ShellResult<OneShotOutcome> {
        if argv.len() <= 1 {
            return Ok(OneShotOutcome::Interactive);
        }

        let scoped = self.scoped_requested(argv);
        let matches = match self.build_cli(scoped).try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                prompter.print_line(err.render().to_string().trim_end());
                return Ok(OneShotOutcome::Completed);
            }
            Err(err) => return Err(err.into()),
        };

        let plan = self.plan(&matches, scoped)?;
        if plan.is_empty() {
            return Ok(OneShotOutcome::Interactive);
        }
        for planned in plan {
            self.run_planned(planned, prompter).await?;
        }
        Ok(OneShotOutcome::Completed)
    }

    /// Whether `--scoped` appears as a top-level flag
    ///
    /// Parsed against the widest surface so that option values and
    /// sub-command arguments spelled `--scoped` are not mistaken for it.
    fn scoped_requested(&self, argv: &[String]) -> bool {
        self.build_cli(true)
            .ignore_errors(true)
            .try_get_matches_from(argv)
            .is_ok_and(|matches| matches.get_flag(SCOPED_FLAG))
    }

    /// Resolve parsed matches into handler calls, options first
    fn plan(&self, matches: &ArgMatches, scoped: bool) -> ShellResult<Vec<Planned>> {
        let exposed = self.one_shot_arguments(scoped);

        let mut options: Vec<(usize, Planned)> = exposed
            .iter()
            .filter(|a| a.is_option() && !is_reserved(a.name()))
            .filter(|a| matches.value_source(a.name()) == Some(ValueSource::CommandLine))
            .map(|argument| {
                let name = argument.name();
                let values = option_value(argument, matches);
                let position = matches.index_of(name).unwrap_or(usize::MAX);
                (position, Planned::new(argument, values))
            })
            .collect();
        options.sort_by_key(|(position, _)| *position);

        let command = match matches.subcommand() {
            Some((name, sub)) => {
                let argument = exposed
                    .iter()
                    .find(|a| a.is_command() && a.name() == name)
                    .ok_or_else(|| ShellError::unknown_command(name))?;
                let args = positional_values(argument, sub);
                if let Some(param) = argument.missing_required(&args) {
                    return Err(ShellError::missing_required(name, param));
                }
                Some(Planned::new(argument, args))
            }
            None => None,
        };

        Ok(options
            .into_iter()
            .map(|(_, planned)| planned)
            .chain(command)
            .collect())
    }

    async fn run_planned(&mut self, planned: Planned, prompter: &mut dyn Prompter) -> ShellResult<()> {
        let Planned {
            name,
            handler,
            wizard,
            args,
        } = planned;
        tracing::debug!(command = %name, ?args, "one-shot dispatch");

        match self.invoke(&name, &handler, args, prompter).await? {
            Completion::Wizard(payload) if wizard => {
                let mut session = WizardSession::new(name, payload);
                let answers = prompter.ask(session.questions()).await?;
                session.feed(&answers);
            }
            Completion::Wizard(_) => {
                tracing::warn!(command = %name, "wizard payload ignored for non-wizard command");
            }
            Completion::Done => {}
        }
        Ok(())
    }
}

/// The value passed to an option
///
/// Options receive at most one value; any further values are dropped.
fn option_value(argument: &Argument, matches: &ArgMatches) -> Vec<String> {
    if argument.required_params().is_empty() {
        return Vec::new();
    }
    let mut values: Vec<String> = matches
        .get_many::<String>(argument.name())
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    if values.len() > 1 {
        tracing::debug!(option = argument.name(), dropped = values.len() - 1, "extra option values dropped");
        values.truncate(1);
    }
    values
}

/// Values bound to a command's declared parameters, extras removed
fn positional_values(argument: &Argument, sub: &ArgMatches) -> Vec<String> {
    let declared = argument.required_params().len() + argument.optional_params().len();
    let mut values = Vec::new();
    for index in 0..declared {
        if let Some(found) = sub.get_many::<String>(&param_id(index)) {
            values.extend(found.cloned());
        }
    }
    if let Ok(Some(extra)) = sub.try_get_raw(EXTRA_ARGS) {
        tracing::debug!(command = argument.name(), dropped = extra.len(), "extra arguments dropped");
    }
    values
}
