//! Error handling for the apiforge generation library.
//!
//! Defines the main `Error` type used throughout the library along with a
//! convenient `Result` alias. Uses `thiserror` and implements conversions
//! from the common error types produced by the ambient stack.

use thiserror::Error;

/// Result type for apiforge generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apiforge generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template engine error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Requested design pattern is not in the registry
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// Requested client language has no renderer
    #[error("Unsupported client language: {0}")]
    UnsupportedLanguage(String),
}
