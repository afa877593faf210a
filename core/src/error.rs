//! Errors returned by `TodoClient`.
//!
//! A 400 carrying a field-error map gets its own variant so callers can show
//! per-field messages; any other unexpected status lands in `Http` with the
//! raw body.

use crate::types::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the payload with one message per invalid field.
    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
