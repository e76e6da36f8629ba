//! Feature store error types.

use forge_core::errors::CoreError;
use forge_llm::LlmError;
use forge_schema::ResponseError;
use thiserror::Error;

/// Everything a store operation can fail with.
///
/// Every variant is handled the same way at the store boundary: its message
/// becomes the store's error string and a `Failed` event.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The completion request failed in transport or at the API.
    #[error("Completion request failed: {0}")]
    Transport(#[from] LlmError),

    /// The reply was not usable JSON for this domain.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// No entity with this id exists in the store.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// The submitted input was rejected before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing durable storage failed.
    #[error("Storage error: {0}")]
    Persistence(String),

    /// The result arrived after the store was reset and was dropped.
    #[error("Result discarded: the store was reset while the request was in flight")]
    Discarded,

    /// ID generation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn persistence(
        context: impl std::fmt::Display,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::Persistence(format!("{context}: {err}"))
    }
}
