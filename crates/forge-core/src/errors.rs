//! Cross-cutting error types for Forge.
//!
//! Domain-specific errors (`ResponseError`, `LlmError`, `StoreError`) live in
//! their respective crates. A unified error is deferred to `forge-cli` where
//! all crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Forge crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operating system random source failed.
    #[error("Random source unavailable: {0}")]
    Random(String),
}
