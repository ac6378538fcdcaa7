//! Error handling for the admin client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the admin client
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin client
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures (request never reached or never returned)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Login rejected by the backend
    #[error("Authentication error: {0}")]
    Auth(String),

    /// 401 on any authenticated call other than login
    #[error("Session expired")]
    SessionExpired,

    /// Backend rejected a malformed payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success response
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message extracted from the response body
        message: String,
    },
}

/// Helper functions for creating specific errors
impl AdminError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    /// Whether this error should be handled globally as "session expired"
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AdminError::SessionExpired)
    }

    /// Whether this error stems from the transport rather than the backend
    pub fn is_network_error(&self) -> bool {
        matches!(self, AdminError::Network(_))
    }
}
