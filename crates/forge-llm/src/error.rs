//! Completion client error types.

use thiserror::Error;

/// Errors that can occur while obtaining a completion.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response. Not retried.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked the caller to wait.
        retry_after_secs: u64,
    },

    /// The reply had no choices or an empty message.
    #[error("completion response contained no content")]
    EmptyResponse,

    /// The client could not be built from configuration.
    #[error(transparent)]
    Config(#[from] forge_config::ConfigError),
}
