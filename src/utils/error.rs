//! Error handling module
//!
//! Defines error types and handling logic used in the project

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error (missing or invalid settings, fatal before any API call)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// External API error (unexpected status or response shape)
    #[error("Revcontent API error: {0}")]
    Api(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (output sinks)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error kind string (stable identifier for logs)
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration_error",
            AppError::Authentication(_) => "authentication_error",
            AppError::Api(_) => "api_error",
            AppError::HttpClient(_) => "http_client_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// Whether the error occurred before any API call could be made
    pub fn is_fatal_before_call(&self) -> bool {
        matches!(self, AppError::Configuration(_))
    }
}

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create configuration error
    pub fn configuration_error(message: impl Into<String>) -> AppError {
        AppError::Configuration(message.into())
    }

    /// Create authentication error
    pub fn auth_error(message: impl Into<String>) -> AppError {
        AppError::Authentication(message.into())
    }

    /// Create API error
    pub fn api_error(message: impl Into<String>) -> AppError {
        AppError::Api(message.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
