//! Registration surface handed to extensions

use crate::argument::{Argument, ArgumentHandler, ArgumentOptions, Description};
use crate::error::ShellResult;
use crate::registry::Registry;
use std::sync::Arc;

/// Validates and adds arguments on behalf of one extension
///
/// Every insertion is journaled so a failed registration can be undone.
pub struct Registrar<'a> {
    registry: &'a mut Registry,
    owner: u64,
    journal: Journal,
}

/// Inserted names paired with the entries they replaced, in insertion order
pub(crate) type Journal = Vec<(String, Option<Argument>)>;

impl<'a> Registrar<'a> {
    pub(crate) fn new(registry: &'a mut Registry, owner: u64) -> Self {
        Self {
            registry,
            owner,
            journal: Vec::new(),
        }
    }

    /// Register a command
    pub fn command(
        &mut self,
        name: &str,
        description: impl Into<Description>,
        options: ArgumentOptions,
        handler: Arc<dyn ArgumentHandler>,
    ) -> ShellResult<&mut Self> {
        self.add(name, Argument::command(description, options, handler))
    }

    /// Register an option
    ///
    /// Fails with `InvalidOptionDeclaration` if `options` declares optional
    /// parameters; nothing is added in that case.
    pub fn option(
        &mut self,
        name: &str,
        description: impl Into<Description>,
        options: ArgumentOptions,
        handler: Arc<dyn ArgumentHandler>,
    ) -> ShellResult<&mut Self> {
        self.add(name, Argument::option(description, options, handler))
    }

    /// Register a prebuilt argument
    pub fn add(&mut self, name: &str, mut argument: Argument) -> ShellResult<&mut Self> {
        argument.validate(name)?;
        argument.set_owner(self.owner);
        let previous = self.registry.add(name, argument);
        if previous.is_some() {
            tracing::debug!(name, "argument replaced by a later registration");
        }
        self.journal.push((name.to_string(), previous));
        Ok(self)
    }

    /// Names registered through this surface, in order
    pub fn names(&self) -> Vec<String> {
        self.journal.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Keep the insertions and hand back their journal
    pub(crate) fn commit(self) -> Journal {
        self.journal
    }

    /// Undo every insertion, restoring replaced entries
    pub(crate) fn rollback(self) {
        let Registrar {
            registry, journal, ..
        } = self;
        for (name, previous) in journal.into_iter().rev() {
            match previous {
                Some(argument) => {
                    registry.add(&name, argument);
                }
                None => {
                    registry.remove(&name);
                }
            }
        }
    }
}
