use forge_core::entities::Solution;
use forge_core::inputs::ProblemInfo;
use forge_core::payloads::SolutionPayload;
use forge_llm::prompts;

use super::{FeatureStore, StoreContext};
use crate::error::StoreError;
use crate::generate::Generator;
use crate::store_core::StoreCore;

/// Structured solutions to business problems.
pub struct ProblemStore {
    core: StoreCore<Solution>,
    generator: Generator,
}

impl ProblemStore {
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored list cannot be read.
    pub fn open(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            core: ctx.open_core()?,
            generator: ctx.generator.clone(),
        })
    }

    /// Diagnose a problem and plan its solution.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the request, validation, or persistence.
    pub async fn solve(&self, info: ProblemInfo) -> Result<Solution, StoreError> {
        let prompt = prompts::problem(&info);
        self.generator
            .create(&self.core, &prompt, |p: SolutionPayload, id, created_at| Solution {
                id,
                problem_info: info,
                analysis: p.analysis,
                recommendations: p.recommendations,
                roadmap: p.roadmap,
                metrics: p.metrics,
                resources: p.resources,
                created_at,
            })
            .await
    }
}

impl FeatureStore for ProblemStore {
    type Entity = Solution;

    fn core(&self) -> &StoreCore<Solution> {
        &self.core
    }
}
