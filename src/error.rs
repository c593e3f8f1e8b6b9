//! Error types and handling for the weather advisory service

use thiserror::Error;

/// Main error type for the weather advisory service
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed request input
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl AdvisoryError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisoryError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AdvisoryError::Validation { message } => {
                format!("Error generating advisory: {message}")
            }
        }
    }

    /// Whether the caller, not the service, is at fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, AdvisoryError::Validation { .. })
    }
}
