//! Error handling for the calculator
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the calculator
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed catalog record errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CalculatorError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog(message.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }
}
