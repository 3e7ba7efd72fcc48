//! Backend client error types.

use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors raised by a single backend round trip.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {status} for {path}{}", format_body(.body))]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    /// The backend answered 2xx but the body was not JSON.
    #[error("Invalid JSON from {path}: {message}")]
    Decode { path: String, message: String },
}

fn format_body(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", body.trim())
    }
}

impl BackendError {
    /// Create a request (transport) error.
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a status error.
    pub fn status(status: u16, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            path: path.into(),
            body: body.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }
}
