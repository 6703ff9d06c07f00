//! Registry types and core implementation

use crate::argument::Argument;
use crate::scope::Scope;
use std::collections::HashMap;

/// Spaces between the widest signature and the description column
pub const DEFAULT_HELP_MARGIN: usize = 5;

/// Registry of commands and options
#[derive(Debug, Clone)]
pub struct Registry {
    /// Registered arguments by name
    arguments: HashMap<String, Argument>,
    /// Widest `name + params` rendering seen so far
    max_width: usize,
    margin: usize,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_margin(DEFAULT_HELP_MARGIN)
    }

    /// Create an empty registry with a custom help margin
    pub fn with_margin(margin: usize) -> Self {
        Self {
            arguments: HashMap::new(),
            max_width: 0,
            margin,
        }
    }

    /// Register an argument under `name`
    ///
    /// An existing entry with the same name is replaced and returned.
    pub fn add(&mut self, name: &str, mut argument: Argument) -> Option<Argument> {
        argument.set_name(name);
        let width = name.chars().count() + argument.rendered_params().chars().count();
        self.max_width = self.max_width.max(width);
        self.arguments.insert(name.to_string(), argument)
    }

    /// Remove an argument; absent names are ignored
    pub fn remove(&mut self, name: &str) -> Option<Argument> {
        self.arguments.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.values()
    }

    /// All arguments ordered by name
    pub fn sorted(&self) -> Vec<&Argument> {
        let mut arguments: Vec<_> = self.arguments.values().collect();
        arguments.sort_by(|a, b| a.name().cmp(b.name()));
        arguments
    }

    /// Column where descriptions start in help listings
    pub fn help_width(&self) -> usize {
        self.max_width + self.margin
    }

    /// One help line: ` name <req> [opt]`, padded, then the description
    pub fn help_line(&self, argument: &Argument) -> String {
        let head = format!(" {}{}", argument.name(), argument.rendered_params());
        format!(
            "{:<width$}{}",
            head,
            argument.description(),
            width = self.help_width().saturating_sub(1)
        )
    }

    /// Help lines for every non-internal argument visible in `scope`
    pub fn help_lines(&self, scope: &Scope) -> Vec<String> {
        self.sorted()
            .into_iter()
            .filter(|a| !a.is_internal() && scope.is_visible(a))
            .map(|a| self.help_line(a))
            .collect()
    }

    /// Names of commands that can be typed at the prompt in `scope`
    pub fn command_names(&self, scope: &Scope) -> Vec<&str> {
        self.sorted()
            .into_iter()
            .filter(|a| a.is_command() && !a.is_internal() && scope.is_visible(a))
            .map(Argument::name)
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
