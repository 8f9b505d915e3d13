//! Error types for commander user interfaces.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid status color key '{0}': status codes must be integers")]
    InvalidStatusKey(String),

    #[error("Invalid console setting: {0}")]
    InvalidConsole(String),

    #[error("Invalid logging setting: {0}")]
    InvalidLogging(String),
}

/// Errors surfaced by a `UserInterface` to the command that called it
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Malformed payload: expected a key-value mapping, got {0}")]
    MalformedPayload(String),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },
}
