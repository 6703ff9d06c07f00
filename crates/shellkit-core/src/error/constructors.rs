//! Constructor methods for ShellError

use super::types::ShellError;

impl ShellError {
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    pub fn not_a_command(name: impl Into<String>) -> Self {
        Self::NotACommand { name: name.into() }
    }

    pub fn missing_required(command: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingRequiredArgument {
            command: command.into(),
            param: param.into(),
        }
    }

    pub fn invalid_option(name: impl Into<String>) -> Self {
        Self::InvalidOptionDeclaration { name: name.into() }
    }

    /// Wrap a failure raised while an extension was registering
    pub fn registration(extension: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExtensionRegistration {
            extension: extension.into(),
            message: message.into(),
        }
    }

    pub fn shutdown(extension: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExtensionShutdown {
            extension: extension.into(),
            message: message.into(),
        }
    }

    pub fn handler(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
