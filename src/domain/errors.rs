//! Domain error types
//!
//! This module defines the error hierarchy for GitExport.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main GitExport error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum GitExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors, raised before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export service errors
    #[error("Export service error: {0}")]
    Service(#[from] ServiceError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Export-service-specific errors
///
/// Errors that occur when talking to the export service over HTTP.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure: the request was issued but no response arrived
    #[error("Failed to reach export service: {0}")]
    ConnectionFailed(String),

    /// The service answered but rejected the export request
    #[error("{message}")]
    TaskRejected {
        /// Server-supplied message, or a generic fallback
        message: String,
    },

    /// The service answered with a body that could not be interpreted
    #[error("Invalid response from export service: {0}")]
    InvalidResponse(String),

    /// A status poll could not be completed
    #[error("status unavailable")]
    StatusUnavailable,
}

impl ServiceError {
    /// Whether this error means no usable response was received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ServiceError::ConnectionFailed(_) | ServiceError::StatusUnavailable
        )
    }

    /// The message to show the user
    ///
    /// Every failure path funnels into a single human-readable message;
    /// the variant is kept internally for diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::TaskRejected { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for GitExportError {
    fn from(err: std::io::Error) -> Self {
        GitExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for GitExportError {
    fn from(err: serde_json::Error) -> Self {
        GitExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for GitExportError {
    fn from(err: toml::de::Error) -> Self {
        GitExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
