//! Registration options

use serde::{Deserialize, Deserializer, Serialize};

/// Scope every argument belongs to unless told otherwise
pub const GLOBAL_SCOPE: &str = "global";

/// Scope value that matches every active scope
pub const WILDCARD_SCOPE: &str = "*";

/// Options recognised when registering a command or option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArgumentOptions {
    /// Honour wizard payloads returned by the handler
    pub wizard: bool,
    /// Provided by the shell host; left out of one-shot declarations
    pub built_in: bool,
    /// Never listed, completed or dispatched
    pub internal: bool,
    /// Scope the argument is visible in
    pub scope: String,
    /// Positional parameters
    pub params: Params,
}

impl Default for ArgumentOptions {
    fn default() -> Self {
        Self {
            wizard: false,
            built_in: false,
            internal: false,
            scope: GLOBAL_SCOPE.to_string(),
            params: Params::default(),
        }
    }
}

impl ArgumentOptions {
    /// Mark the argument as able to start a wizard
    pub fn wizard(mut self) -> Self {
        self.wizard = true;
        self
    }

    /// Mark the argument as a host built-in
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }

    /// Hide the argument from listing, completion and dispatch
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    /// Restrict the argument to a scope (`"*"` for every scope)
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Append a required parameter
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.required.push(name.into());
        self
    }

    /// Append an optional parameter
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.optional.push(name.into());
        self
    }
}

/// Required and optional positional parameter names
///
/// Each list deserializes from either a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    #[serde(deserialize_with = "one_or_many")]
    pub required: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub optional: Vec<String>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) if name.is_empty() => Vec::new(),
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
