//! Collaborator call errors.

use thiserror::Error;

/// Typed result of every collaborator call.
///
/// Every network failure maps to one of these variants; the caller picks a
/// display string from the outcome. No variant is ever fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Could not establish a connection.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The call exceeded the client timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The call was cancelled by the caller.
    #[error("operation cancelled")]
    Cancelled,

    /// Anything the other variants do not cover.
    #[error("{0}")]
    Other(String),
}
