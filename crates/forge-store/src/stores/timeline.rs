use forge_core::entities::Timeline;
use forge_core::inputs::TimelineInput;
use forge_core::payloads::TimelinePayload;
use forge_llm::prompts;

use super::{FeatureStore, StoreContext};
use crate::error::StoreError;
use crate::generate::Generator;
use crate::store_core::StoreCore;

/// Phased project plans.
pub struct TimelineStore {
    core: StoreCore<Timeline>,
    generator: Generator,
}

impl TimelineStore {
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored list cannot be read.
    pub fn open(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            core: ctx.open_core()?,
            generator: ctx.generator.clone(),
        })
    }

    /// Plan a project between its start and end dates.
    ///
    /// An end date before the start date is rejected before any request is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` for an inverted date window, or any
    /// other [`StoreError`] from the request, validation, or persistence.
    pub async fn plan(&self, input: TimelineInput) -> Result<Timeline, StoreError> {
        if let Err(e) = input.check_dates() {
            return Err(self.core.reject(StoreError::InvalidInput(e.to_string())));
        }

        let prompt = prompts::timeline(&input);
        self.generator
            .create(&self.core, &prompt, |p: TimelinePayload, id, created_at| Timeline {
                id,
                project_name: input.project_name,
                description: input.description,
                start_date: input.start_date,
                end_date: input.end_date,
                analysis: p.analysis,
                recommendations: p.recommendations,
                created_at,
            })
            .await
    }
}

impl FeatureStore for TimelineStore {
    type Entity = Timeline;

    fn core(&self) -> &StoreCore<Timeline> {
        &self.core
    }
}
