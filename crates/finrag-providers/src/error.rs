//! Error types for the provider wrappers

use thiserror::Error;

/// Errors that can occur when calling an external provider
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// Authentication failed (never includes key details)
    #[error("Authentication failed")]
    AuthError,

    /// Rate limited by provider
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Network error occurred
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Generic provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Provider("Request timeout".to_string())
        } else if err.is_connect() {
            ProviderError::NetworkError(err.to_string())
        } else {
            ProviderError::Provider(err.to_string())
        }
    }
}
