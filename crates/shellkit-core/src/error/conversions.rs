//! From trait implementations for ShellError conversions

use super::types::ShellError;

impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(format!("Failed to parse JSON config: {}", error))
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML config: {}", error))
    }
}

impl From<serde_yaml::Error> for ShellError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("Failed to parse YAML config: {}", error))
    }
}

impl From<clap::Error> for ShellError {
    fn from(error: clap::Error) -> Self {
        Self::usage(error.render().to_string().trim_end())
    }
}
