//! # forge-core
//!
//! Core types, ID generation, and error types for Forge.
//!
//! This crate provides the foundational types shared across all Forge crates:
//! - Entity structs for the five feature domains (automation, brainstorm,
//!   risk, timeline, problem-solving) and the [`entities::Entity`] trait
//!   the persistence layer is generic over
//! - Input forms the prompt builders consume
//! - Validated response payloads produced by `forge-schema`
//! - Domain and value enums
//! - ID prefix constants and generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod inputs;
pub mod payloads;
