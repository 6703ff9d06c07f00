//! Active extension set

use super::Extension;
use super::registrar::{Journal, Registrar};
use crate::argument::Argument;
use crate::error::{ShellError, ShellResult};
use crate::registry::Registry;

struct ActiveExtension {
    id: u64,
    extension: Box<dyn Extension>,
    journal: Journal,
}

/// Extensions that registered successfully, in registration order
///
/// Every registry entry an extension inserts is tagged with the extension's
/// id. On unregister only entries still carrying that tag are removed, and
/// the entries they replaced come back.
#[derive(Default)]
pub struct ExtensionHost {
    active: Vec<ActiveExtension>,
    next_id: u64,
}

impl ExtensionHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `extension`'s register hook against `registry`
    ///
    /// On failure the registry is restored and the extension is dropped.
    pub async fn register(
        &mut self,
        extension: Box<dyn Extension>,
        registry: &mut Registry,
    ) -> ShellResult<()> {
        let id = self.next_id;
        self.next_id += 1;

        let mut registrar = Registrar::new(registry, id);
        match extension.register(&mut registrar).await {
            Ok(()) => {
                let journal = registrar.commit();
                tracing::debug!(
                    extension = extension.name(),
                    arguments = journal.len(),
                    "extension registered"
                );
                self.active.push(ActiveExtension {
                    id,
                    extension,
                    journal,
                });
                Ok(())
            }
            Err(err) => {
                registrar.rollback();
                tracing::warn!(extension = extension.name(), error = %err, "extension registration failed");
                Err(match err {
                    ShellError::InvalidOptionDeclaration { .. } => err,
                    other => ShellError::registration(extension.name(), other.to_string()),
                })
            }
        }
    }

    /// Run every unregister hook in registration order
    ///
    /// Stops at the first failure and returns it; the failing extension and
    /// the ones after it stay active.
    pub async fn unregister_all(&mut self, registry: &mut Registry) -> ShellResult<()> {
        while let Some(first) = self.active.first() {
            first
                .extension
                .unregister()
                .await
                .map_err(|e| ShellError::shutdown(first.extension.name(), e.to_string()))?;

            let done = self.active.remove(0);
            tracing::debug!(extension = done.extension.name(), "extension unregistered");
            self.release(done.id, done.journal, registry);
        }
        Ok(())
    }

    /// Withdraw the entries recorded in `journal`, newest first
    ///
    /// An entry still owned by `id` is replaced by what it shadowed. An entry
    /// that a later extension has since shadowed stays; the later
    /// extension's journal inherits what `id` had shadowed instead.
    fn release(&mut self, id: u64, journal: Journal, registry: &mut Registry) {
        for (name, previous) in journal.into_iter().rev() {
            let owned = registry.get(&name).is_some_and(|a| a.owner() == Some(id));
            if owned {
                match previous {
                    Some(argument) => {
                        registry.add(&name, argument);
                    }
                    None => {
                        registry.remove(&name);
                    }
                }
            } else if let Some(slot) = self.shadowing_slot(&name, id) {
                *slot = previous;
            }
        }
    }

    /// Journal slot of an active extension that saved `owner`'s `name` entry
    fn shadowing_slot(&mut self, name: &str, owner: u64) -> Option<&mut Option<Argument>> {
        self.active
            .iter_mut()
            .flat_map(|active| active.journal.iter_mut())
            .find(|(saved, previous)| {
                saved == name && previous.as_ref().is_some_and(|a| a.owner() == Some(owner))
            })
            .map(|(_, previous)| previous)
    }

    /// Names of the active extensions
    pub fn names(&self) -> Vec<&str> {
        self.active.iter().map(|a| a.extension.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
