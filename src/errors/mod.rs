//! Error handling module for the admin content client.
//!
//! Provides a single error type covering the client-side taxonomy: local
//! validation failures, API/network errors, missing-record preconditions,
//! upload failures and configuration problems.

use crate::schema::Issue;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UPLOAD_ERROR: &str = "UPLOAD_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AdminError {
    /// Schema validation rejected a payload before any network call.
    /// Surfaced inline per field, never as a notification.
    Validation(Vec<Issue>),
    /// The API answered with a non-success status, or the transport failed.
    /// Carries the server-provided message when one was present.
    Api { status: Option<u16>, message: String },
    /// Update/delete target missing from local state. Caller bug class;
    /// fails loudly before any request is issued.
    NotFound(String),
    /// Image upload failed. Scoped to the image field.
    Upload(String),
    /// Missing or malformed configuration.
    Config(String),
}

impl AdminError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Validation(_) => codes::VALIDATION_ERROR,
            AdminError::Api { .. } => codes::API_ERROR,
            AdminError::NotFound(_) => codes::NOT_FOUND,
            AdminError::Upload(_) => codes::UPLOAD_ERROR,
            AdminError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the user-facing error message.
    pub fn message(&self) -> String {
        match self {
            AdminError::Validation(issues) => issues
                .first()
                .map(|issue| issue.message.clone())
                .unwrap_or_else(|| "Validation failed".to_string()),
            AdminError::Api { message, .. } => message.clone(),
            AdminError::NotFound(msg) => msg.clone(),
            AdminError::Upload(msg) => msg.clone(),
            AdminError::Config(msg) => msg.clone(),
        }
    }

    /// The HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Api { status, .. } => *status,
            _ => None,
        }
    }
}

impl std::fmt::Display for AdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AdminError {}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Request error: {:?}", err);
        AdminError::Api {
            status: err.status().map(|s| s.as_u16()),
            message: format!("Request error: {}", err),
        }
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AdminError::Api {
            status: None,
            message: format!("JSON error: {}", err),
        }
    }
}
