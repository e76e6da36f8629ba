//! # forge-llm
//!
//! Prompt builders and chat-completion clients for Forge.
//!
//! - [`prompts`]: one builder per domain action, producing a [`Prompt`] whose
//!   user message embeds the expected reply shape from `forge-schema`
//! - [`CompletionClient`]: the seam the feature stores call through
//! - [`OpenAiClient`]: HTTPS client for any OpenAI-compatible
//!   `/chat/completions` endpoint
//! - [`connect`]: picks the OpenAI client, or [`DisabledClient`] when no key
//!   is configured
//! - `MockClient` (feature `mock`): scripted, gateable replies for tests

mod client;
mod error;
mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompts;

pub use client::{
    ChatMessage, CompletionClient, CompletionRequest, DisabledClient, OpenAiClient, Role, connect,
};
pub use error::LlmError;
pub use prompts::Prompt;
