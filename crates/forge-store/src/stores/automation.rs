use forge_core::entities::AutomationResult;
use forge_core::inputs::BusinessInfo;
use forge_core::payloads::AutomationPayload;
use forge_llm::prompts;

use super::{FeatureStore, StoreContext};
use crate::error::StoreError;
use crate::generate::Generator;
use crate::store_core::StoreCore;

/// Automation opportunity analyses.
pub struct AutomationStore {
    core: StoreCore<AutomationResult>,
    generator: Generator,
}

impl AutomationStore {
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored list cannot be read.
    pub fn open(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            core: ctx.open_core()?,
            generator: ctx.generator.clone(),
        })
    }

    /// Analyze a business for automation opportunities.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the request, validation, or persistence.
    pub async fn analyze(&self, info: BusinessInfo) -> Result<AutomationResult, StoreError> {
        let prompt = prompts::automation(&info);
        self.generator
            .create(&self.core, &prompt, |p: AutomationPayload, id, created_at| AutomationResult {
                id,
                business_info: info,
                analysis: p.analysis,
                recommendations: p.recommendations,
                opportunities: p.opportunities,
                created_at,
            })
            .await
    }
}

impl FeatureStore for AutomationStore {
    type Entity = AutomationResult;

    fn core(&self) -> &StoreCore<AutomationResult> {
        &self.core
    }
}
