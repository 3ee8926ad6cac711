//! Error types for the cascade text splitter.
//!
//! This module defines a unified error enum covering configuration,
//! input validation, I/O and serialization failures.

use thiserror::Error;

/// Unified error type for the cascade workspace.
///
/// Splitting itself never fails once a configuration has been built;
/// every error surfaces either while building configuration or while
/// validating caller input.
#[derive(Error, Debug)]
pub enum AppError {
    /// Chunk size / overlap relationship is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Caller-supplied inputs that do not line up
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidConfiguration("overlap 10 >= size 5".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: overlap 10 >= size 5");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: [a list").unwrap_err();
        let err: AppError = yaml_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
