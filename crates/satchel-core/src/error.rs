//! Error types for the satchel client core.

use thiserror::Error;

/// Errors surfaced by calls against the remote school-management API.
///
/// This covers the login path and the authenticated feed endpoints. Storage
/// failures never appear here: the secure store absorbs them at its own
/// boundary and degrades to "no value".
///
/// Callers branch on the variant rather than catching by type, so the
/// variants carry the server's message verbatim for user-facing display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the supplied credentials (or the bearer token).
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server responded, but not with success. Carries the HTTP or
    /// application-level status code when one was available.
    #[error("server error{}: {}", status_suffix(.status), .message)]
    Server { status: Option<u16>, message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl ApiError {
    /// Creates an InvalidCredentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Server error, optionally tagged with a status code.
    pub fn server(status: impl Into<Option<u16>>, message: impl Into<String>) -> Self {
        Self::Server {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Check if this is an InvalidCredentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials(_))
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

/// A type alias for `Result<T, ApiError>`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
