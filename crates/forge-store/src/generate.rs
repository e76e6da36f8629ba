//! Prompt → completion → validation, shared by every store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use forge_core::entities::Entity;
use forge_llm::{CompletionClient, CompletionRequest, Prompt};
use forge_schema::Payload;

use crate::error::StoreError;
use crate::store_core::StoreCore;

/// Runs one prompt through the completion client and validates the reply.
#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn CompletionClient>,
}

impl Generator {
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Send `prompt` and validate the reply as `P`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Transport` if the call fails, or
    /// `StoreError::Response` if the reply does not validate.
    pub async fn run<P: Payload>(&self, prompt: &Prompt) -> Result<P, StoreError> {
        let raw = self.client.complete(CompletionRequest::from(prompt)).await?;
        tracing::debug!(
            schema = P::SCHEMA.name,
            chars = raw.len(),
            "validating reply"
        );
        Ok(forge_schema::validate::<P>(&raw)?)
    }

    /// Full create cycle on `core`: enter Loading, run the prompt, then commit
    /// the built entity or record the failure.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`]; the store's error flag and notifications are
    /// already updated when this returns.
    pub async fn create<T, P>(
        &self,
        core: &StoreCore<T>,
        prompt: &Prompt,
        build: impl FnOnce(P, String, DateTime<Utc>) -> T,
    ) -> Result<T, StoreError>
    where
        T: Entity,
        P: Payload,
    {
        let ticket = core.begin();
        match self.run::<P>(prompt).await {
            Ok(payload) => core.commit(ticket, |id, created_at| build(payload, id, created_at)),
            Err(err) => Err(core.fail(ticket, err)),
        }
    }
}
