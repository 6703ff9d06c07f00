//! Clap declarations generated from the registry

use crate::argument::{Argument, ArgumentKind};
use crate::shell::Shell;
use clap::{Arg, ArgAction, Command};

/// Flag that widens the one-shot surface to every scope
pub const SCOPED_FLAG: &str = "scoped";

/// Hidden positional collecting tokens beyond a command's declared params
pub(super) const EXTRA_ARGS: &str = "__extra";

const RESERVED_FLAGS: [&str; 3] = ["help", "version", SCOPED_FLAG];

/// Whether `name` collides with a flag clap or the shell already defines
pub(super) fn is_reserved(name: &str) -> bool {
    RESERVED_FLAGS.contains(&name)
}

/// Clap id of the positional bound to the `index`-th parameter
pub(super) fn param_id(index: usize) -> String {
    format!("arg{index}")
}

impl Shell {
    /// Arguments exposed on the command line
    ///
    /// Built-in and internal arguments are never exposed. Unless
    /// `include_all` is set, only arguments visible in the active scope are.
    pub fn one_shot_arguments(&self, include_all: bool) -> Vec<&Argument> {
        self.registry()
            .sorted()
            .into_iter()
            .filter(|a| !a.is_built_in() && !a.is_internal())
            .filter(|a| include_all || self.scope().is_visible(a))
            .collect()
    }

    /// Build the one-shot command line parser
    pub fn build_cli(&self, include_all: bool) -> Command {
        let config = self.config();
        let mut cli = Command::new(config.name.clone())
            .version(config.version.clone())
            .disable_help_subcommand(true)
            .allow_external_subcommands(true)
            .arg(
                Arg::new(SCOPED_FLAG)
                    .long(SCOPED_FLAG)
                    .help("Include commands from every scope")
                    .action(ArgAction::SetTrue),
            );

        for argument in self.one_shot_arguments(include_all) {
            cli = match argument.kind() {
                ArgumentKind::Option if is_reserved(argument.name()) => {
                    tracing::warn!(option = argument.name(), "option name is reserved, not exposed");
                    cli
                }
                ArgumentKind::Option => cli.arg(option_arg(argument)),
                ArgumentKind::Command => cli.subcommand(command_subcommand(argument)),
            };
        }
        cli
    }
}

fn option_arg(argument: &Argument) -> Arg {
    let arg = Arg::new(argument.name().to_string())
        .long(argument.name().to_string())
        .help(argument.description());

    let required = argument.required_params();
    if required.is_empty() {
        arg.action(ArgAction::SetTrue)
    } else {
        arg.num_args(1..=required.len())
            .value_names(required.iter().cloned())
            .action(ArgAction::Set)
    }
}

fn command_subcommand(argument: &Argument) -> Command {
    let mut cmd = Command::new(argument.name().to_string()).about(argument.description());

    let params = argument
        .required_params()
        .iter()
        .chain(argument.optional_params());
    for (index, param) in params.enumerate() {
        cmd = cmd.arg(Arg::new(param_id(index)).value_name(param.clone()));
    }

    if argument.takes_rest() {
        let last = param_id(argument.required_params().len() + argument.optional_params().len() - 1);
        cmd = cmd.mut_arg(last, |arg| {
            arg.num_args(1..).trailing_var_arg(true).allow_hyphen_values(true)
        });
    } else {
        cmd = cmd.arg(
            Arg::new(EXTRA_ARGS)
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true),
        );
    }
    cmd
}
