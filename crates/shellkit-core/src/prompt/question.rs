//! Wizard questions and answers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of input a question collects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text
    Input,
    /// Yes/no, answered as `"true"` or `"false"`
    Confirm,
    /// Hidden text
    Password,
    /// One of a fixed list of choices
    Select { choices: Vec<String> },
}

/// One question of a wizard round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Key the answer is stored under
    pub name: String,
    /// Text shown to the user
    pub message: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Question {
    fn new(name: impl Into<String>, message: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
            default: None,
        }
    }

    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Input)
    }

    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Confirm)
    }

    pub fn password(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Password)
    }

    pub fn select<I, S>(name: impl Into<String>, message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices = choices.into_iter().map(Into::into).collect();
        Self::new(name, message, QuestionKind::Select { choices })
    }

    /// Set the default answer
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Answers of one wizard round, keyed by question name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Whether a confirm question was answered yes
    pub fn is_yes(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Answers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
