//! Tool-specific error types.
//!
//! The `Display` output of a [`ToolError`] is what a caller sees after the
//! `Error: ` prefix of a failed tool result.

use thiserror::Error;

use crate::core::backend::BackendError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The backend call itself failed (transport or HTTP status).
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The backend answered but the body did not have the expected shape.
    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "unexpected response" error.
    pub fn unexpected_response(endpoint: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            endpoint: endpoint.into(),
            message: msg.into(),
        }
    }
}
