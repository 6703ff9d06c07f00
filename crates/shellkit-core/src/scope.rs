//! Scope manager
//!
//! The active scope partitions which arguments are reachable. An argument
//! is visible when its scope is the wildcard `"*"` or equals the active
//! scope.

use crate::argument::{Argument, GLOBAL_SCOPE, WILDCARD_SCOPE};

/// Active scope of a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    active: String,
}

impl Scope {
    /// Start in the global scope
    pub fn new() -> Self {
        Self {
            active: GLOBAL_SCOPE.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_global(&self) -> bool {
        self.active == GLOBAL_SCOPE
    }

    /// Switch scope; `None` or an empty name resets to `"global"`
    pub fn set(&mut self, name: Option<&str>) {
        self.active = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => GLOBAL_SCOPE.to_string(),
        };
        tracing::debug!(scope = %self.active, "scope changed");
    }

    pub fn is_visible(&self, argument: &Argument) -> bool {
        let scope = argument.scope();
        scope == WILDCARD_SCOPE || scope == self.active
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
