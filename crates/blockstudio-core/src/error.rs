//! Error taxonomy for the canvas core.
//!
//! Nothing here is fatal: validation and decode failures degrade to
//! "no mutation occurred" at the call site, with a logged diagnostic.

use thiserror::Error;

/// Rejection of bad geometry, ids or kinds at construction/update time.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("component id must be a non-empty string")]
    EmptyId,
    #[error("duplicate component id: {0}")]
    DuplicateId(String),
    #[error("component kind must be a non-empty string")]
    EmptyKind,
    #[error("position is not finite: ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },
    #[error("size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Failure to decode an externally serialized drop payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed drop payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("drop payload has no component kind")]
    MissingKind,
}
