//! Argument record

use super::description::Description;
use super::handler::{ArgumentHandler, Builtin, Handler};
use super::options::{ArgumentOptions, WILDCARD_SCOPE};
use crate::error::{ShellError, ShellResult};
use std::sync::Arc;

/// Marker trailing a variadic parameter name
const VARIADIC_MARKER: &str = "...";

/// Whether a parameter name carries the variadic marker
pub fn is_variadic(param: &str) -> bool {
    param.ends_with(VARIADIC_MARKER)
}

/// Command or option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Positionally invoked, usable interactively and one-shot
    Command,
    /// Flag-style, usable only one-shot
    Option,
}

/// One registered command or option
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    kind: ArgumentKind,
    description: Description,
    options: ArgumentOptions,
    handler: Handler,
    /// Extension that inserted this entry; `None` for host entries
    owner: Option<u64>,
}

impl Argument {
    /// Create a command
    pub fn command(
        description: impl Into<Description>,
        options: ArgumentOptions,
        handler: Arc<dyn ArgumentHandler>,
    ) -> Self {
        Self::new(ArgumentKind::Command, description, options, Handler::Custom(handler))
    }

    /// Create an option
    ///
    /// Options cannot take optional parameters; [`Argument::validate`]
    /// rejects them before they reach the registry.
    pub fn option(
        description: impl Into<Description>,
        options: ArgumentOptions,
        handler: Arc<dyn ArgumentHandler>,
    ) -> Self {
        Self::new(ArgumentKind::Option, description, options, Handler::Custom(handler))
    }

    /// Create a host built-in command, visible in every scope
    pub(crate) fn builtin(
        builtin: Builtin,
        description: impl Into<Description>,
        options: ArgumentOptions,
    ) -> Self {
        Self::new(
            ArgumentKind::Command,
            description,
            options.built_in().scope(WILDCARD_SCOPE),
            Handler::Builtin(builtin),
        )
    }

    fn new(
        kind: ArgumentKind,
        description: impl Into<Description>,
        options: ArgumentOptions,
        handler: Handler,
    ) -> Self {
        Self {
            name: String::new(),
            kind,
            description: description.into(),
            options,
            handler,
            owner: None,
        }
    }

    /// Check the declaration invariants before registration
    pub fn validate(&self, name: &str) -> ShellResult<()> {
        if self.kind == ArgumentKind::Option && !self.options.params.optional.is_empty() {
            return Err(ShellError::invalid_option(name));
        }
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn set_owner(&mut self, owner: u64) {
        self.owner = Some(owner);
    }

    pub(crate) fn owner(&self) -> Option<u64> {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    pub fn is_command(&self) -> bool {
        self.kind == ArgumentKind::Command
    }

    pub fn is_option(&self) -> bool {
        self.kind == ArgumentKind::Option
    }

    pub fn is_wizard(&self) -> bool {
        self.options.wizard
    }

    pub fn is_built_in(&self) -> bool {
        self.options.built_in
    }

    pub fn is_internal(&self) -> bool {
        self.options.internal
    }

    pub fn scope(&self) -> &str {
        &self.options.scope
    }

    pub fn required_params(&self) -> &[String] {
        &self.options.params.required
    }

    pub fn optional_params(&self) -> &[String] {
        &self.options.params.optional
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Resolve the description, evaluating lazy descriptions
    pub fn description(&self) -> String {
        self.description.resolve()
    }

    /// Render the parameter signature, e.g. ` <host> [port]`
    pub fn rendered_params(&self) -> String {
        let required = self.required_params().iter().map(|p| format!(" <{p}>"));
        let optional = self.optional_params().iter().map(|p| format!(" [{p}]"));
        required.chain(optional).collect()
    }

    /// Name of the first required parameter when `args` does not supply it
    pub fn missing_required(&self, args: &[String]) -> Option<&str> {
        let first = self.required_params().first()?;
        match args.first() {
            Some(arg) if !arg.is_empty() => None,
            _ => Some(first.as_str()),
        }
    }

    /// Whether the last declared parameter absorbs the remaining tokens
    pub fn takes_rest(&self) -> bool {
        self.required_params()
            .iter()
            .chain(self.optional_params())
            .last()
            .is_some_and(|p| is_variadic(p))
    }

    /// Trim `args` to the declared parameter slots
    pub fn shape_args(&self, mut args: Vec<String>) -> Vec<String> {
        if !self.takes_rest() {
            args.truncate(self.required_params().len() + self.optional_params().len());
        }
        args
    }
}
