//! Error handling module for the numcheck CLI.
//!
//! Literal-level failures are not errors here: they are reported per
//! literal and summarized into a single `Validation` error at the end of a
//! command so the process exits with a failure status.

use thiserror::Error;

/// Main error type for the numcheck CLI application.
#[derive(Error, Debug)]
pub enum NumcheckError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when one or more literals were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML configuration file cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using NumcheckError.
pub type Result<T> = std::result::Result<T, NumcheckError>;
