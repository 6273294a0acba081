//! Domain error types

use thiserror::Error;

/// Error when the year field does not hold a whole number
#[derive(Debug, Clone, Error)]
#[error("Invalid year: \"{input}\". Expected a whole number (e.g., 2024)")]
pub struct InvalidYearError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
