use forge_core::entities::Risk;
use forge_core::inputs::RiskInput;
use forge_core::payloads::RiskPayload;
use forge_llm::prompts;

use super::{FeatureStore, StoreContext};
use crate::error::StoreError;
use crate::generate::Generator;
use crate::store_core::StoreCore;

/// Risk assessments.
pub struct RiskStore {
    core: StoreCore<Risk>,
    generator: Generator,
}

impl RiskStore {
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored list cannot be read.
    pub fn open(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            core: ctx.open_core()?,
            generator: ctx.generator.clone(),
        })
    }

    /// Assess a risk.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the request, validation, or persistence.
    pub async fn assess(&self, input: RiskInput) -> Result<Risk, StoreError> {
        let prompt = prompts::risk(&input);
        self.generator
            .create(&self.core, &prompt, |p: RiskPayload, id, created_at| Risk {
                id,
                name: input.name,
                description: input.description,
                category: input.category,
                analysis: p.analysis,
                recommendations: p.recommendations,
                created_at,
            })
            .await
    }
}

impl FeatureStore for RiskStore {
    type Entity = Risk;

    fn core(&self) -> &StoreCore<Risk> {
        &self.core
    }
}
