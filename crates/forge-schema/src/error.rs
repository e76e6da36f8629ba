//! Reply validation and schema registry error types.

use thiserror::Error;

/// Why a model reply was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The reply text is not JSON.
    #[error("Response is not valid JSON: {0}")]
    Parse(String),

    /// A required key is missing or holds the wrong kind of value.
    #[error("Response field `{path}`: expected {expected}, found {found}")]
    Schema {
        path: String,
        expected: String,
        found: String,
    },

    /// A value is well-formed but outside its allowed set.
    #[error("Response field `{path}`: {value:?} is not one of {allowed:?}")]
    Validation {
        path: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Errors from the entity schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
