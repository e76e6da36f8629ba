//! # forge-schema
//!
//! Response schemas, reply validation, and the entity schema registry.
//!
//! This crate provides:
//! - [`Field`] / [`FieldKind`]: each domain's expected response shape declared
//!   as static data ([`domains`])
//! - [`validate`]: the pure check-and-coerce step between the raw model reply
//!   and a typed payload from `forge-core`
//! - [`describe`]: the same shape rendered as text for prompts, so prompt and
//!   validator read one table
//! - [`SchemaRegistry`]: JSON Schemas of every persisted entity, used to check
//!   snapshots on load and by the `forge schema` command
//!
//! ## Architecture
//!
//! Entity and payload types are defined in `forge-core`. This crate binds each
//! payload type to its response schema through the [`Payload`] trait.

pub mod domains;
mod error;
mod field;
mod registry;
mod validator;

pub use error::{ResponseError, SchemaError};
pub use field::{Field, FieldKind, ResponseSchema, describe};
pub use registry::SchemaRegistry;
pub use validator::{Payload, clamp_score, strip_code_fence, validate, validate_value};
