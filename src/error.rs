//! Error taxonomy surfaced to callers.

use crate::framework::FrameworkError;
use serde_json::{json, Value};
use thiserror::Error;

/// Every way an operation can fail.
///
/// Each variant aborts only the current operation; the store is left as it
/// was before the request arrived.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A required field is missing or malformed, or a guard refused the change.
    #[error("{0}")]
    Validation(String),

    /// No entity with the requested identifier (or no such path).
    #[error("{0}")]
    NotFound(String),

    /// The resource does not support the requested operation.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The actor behind a client could not be reached, or it ran out of identifiers.
    #[error("Actor communication error: {0}")]
    Framework(#[from] FrameworkError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Numeric status the transport should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::Framework(_) => 500,
        }
    }

    /// Transport body: `{ "error": message }`.
    pub fn to_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
