//! Core error type for shellkit

use thiserror::Error;

/// Result type alias for shellkit operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for shellkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The name is absent from the registry, or refers to an internal entry
    #[error("command {name} unknown")]
    UnknownCommand { name: String },

    /// The name resolves to an option, or to a command outside the active scope
    #[error("{name} is not a command")]
    NotACommand { name: String },

    /// The first required parameter was not supplied
    #[error("missing required argument <{param}>")]
    MissingRequiredArgument { command: String, param: String },

    /// An option declared optional parameters
    #[error("optional parameter is not allowed for options (option {name})")]
    InvalidOptionDeclaration { name: String },

    /// An extension's register hook failed
    #[error("extension {extension} failed to register: {message}")]
    ExtensionRegistration { extension: String, message: String },

    /// An extension's unregister hook failed during shutdown
    #[error("extension {extension} failed to unregister: {message}")]
    ExtensionShutdown { extension: String, message: String },

    /// A command or option handler returned an error
    #[error("{name} failed: {message}")]
    Handler { name: String, message: String },

    /// The prompt collaborator failed to collect input
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// The one-shot command line could not be parsed
    #[error("{message}")]
    Usage { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl ShellError {
    /// Stable code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "SHELL_UNKNOWN_COMMAND",
            Self::NotACommand { .. } => "SHELL_NOT_A_COMMAND",
            Self::MissingRequiredArgument { .. } => "SHELL_MISSING_ARGUMENT",
            Self::InvalidOptionDeclaration { .. } => "SHELL_INVALID_OPTION",
            Self::ExtensionRegistration { .. } => "SHELL_EXTENSION_REGISTER",
            Self::ExtensionShutdown { .. } => "SHELL_EXTENSION_UNREGISTER",
            Self::Handler { .. } => "SHELL_HANDLER",
            Self::Prompt { .. } => "SHELL_PROMPT",
            Self::Usage { .. } => "SHELL_USAGE",
            Self::Config { .. } => "SHELL_CONFIG",
            Self::Io { .. } => "SHELL_IO",
            Self::Other { .. } => "SHELL_OTHER",
        }
    }

    /// Process exit code used when this error ends a one-shot invocation
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand { .. } | Self::NotACommand { .. } => 127,
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }

    /// Whether the interactive loop prints this error and keeps going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. }
                | Self::NotACommand { .. }
                | Self::MissingRequiredArgument { .. }
                | Self::Handler { .. }
        )
    }

    /// Optional context attached to the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }
}
