//! Error types for the calculator host
//!
//! The engine itself has no failure paths; these cover configuration,
//! logging setup and terminal I/O.

use thiserror::Error;

/// Result type for host operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur while running the calculator application
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::config("unknown theme");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("unknown theme"));
    }

    #[test]
    fn test_logging_error() {
        let err = AppError::logging("subscriber already set");
        assert!(err.to_string().starts_with("Logging setup failed"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("not a number").unwrap_err();
        let err: AppError = yaml_err.into();
        assert!(err.to_string().contains("Invalid configuration file"));
    }
}
