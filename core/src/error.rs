//! Error types for the expense API client.
//!
//! # Design
//! Failures are propagated raw. Every non-2xx response lands in `Status` with
//! the status code and body untouched; callers decide what, if anything, a
//! particular code means.

/// Errors returned by `ExpenseClient` parse methods and `Transport`s.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection,
    /// timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
