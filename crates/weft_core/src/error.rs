//! Error taxonomy
//!
//! Per-item failures (a colliding variable name, a rejected value, a missing
//! font) are absorbed where they occur; only a wholly missing input payload
//! escalates to [`EngineError::MissingPayload`].

use thiserror::Error;

/// Errors raised by a host backend
#[derive(Debug, Error)]
pub enum HostError {
    /// A variable with this name already exists in the collection
    #[error("variable name collision: {0}")]
    NameCollision(String),

    /// The host refused to add another mode to the collection
    #[error("mode capacity reached for collection {collection} ({modes} modes)")]
    ModeCapacity { collection: String, modes: usize },

    /// The value's type does not match the variable's declared type
    #[error("type mismatch assigning to {path}: expected {expected}")]
    TypeMismatch { path: String, expected: String },

    /// A referenced id does not exist on the host
    #[error("unknown handle: {0}")]
    UnknownHandle(String),

    /// The requested font variant is not available
    #[error("font not available: {family} {style}")]
    FontUnavailable { family: String, style: String },

    /// Catch-all for backend-specific failures
    #[error("host error: {0}")]
    Backend(String),
}

/// Fatal run-level errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// No token payload was supplied and no bundled payload exists
    #[error("no token payload available")]
    MissingPayload,

    /// The payload could not be parsed
    #[error("invalid token payload: {0}")]
    InvalidPayload(String),
}
