//! Argument handlers

use crate::error::ShellResult;
use crate::wizard::Completion;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Code run when a command or option is dispatched
///
/// The returned [`Completion`] plays the role of the completion callback:
/// the shell does not read the next line until the future resolves.
#[async_trait]
pub trait ArgumentHandler: Send + Sync {
    async fn call(&self, args: Vec<String>) -> ShellResult<Completion>;
}

/// Adapter turning an async closure into an [`ArgumentHandler`]
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> ArgumentHandler for FnHandler<F>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = ShellResult<Completion>> + Send,
{
    async fn call(&self, args: Vec<String>) -> ShellResult<Completion> {
        (self.0)(args).await
    }
}

/// Wrap an async closure as a shareable handler
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn ArgumentHandler>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ShellResult<Completion>> + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Commands implemented by the shell itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Help,
    Scope,
}

/// What runs when an argument is dispatched
#[derive(Clone)]
pub enum Handler {
    Builtin(Builtin),
    Custom(Arc<dyn ArgumentHandler>),
}

impl From<Arc<dyn ArgumentHandler>> for Handler {
    fn from(handler: Arc<dyn ArgumentHandler>) -> Self {
        Self::Custom(handler)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
