//! Help descriptions

use std::fmt;
use std::sync::Arc;

/// Description shown in help listings
///
/// A `Lazy` description is evaluated every time help is rendered, so it can
/// reflect state that changes after registration.
#[derive(Clone)]
pub enum Description {
    Text(String),
    Lazy(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Description {
    /// Build a description evaluated at help time
    pub fn lazy(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Lazy(Arc::new(f))
    }

    /// Resolve the description text
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lazy(f) => f(),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
