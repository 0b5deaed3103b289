//! # Framework Errors
//!
//! Failures of the plumbing between a client and its actor. Domain failures
//! (validation, missing entities) live in [`crate::error::ApiError`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Identifier space exhausted")]
    IdsExhausted,
}
