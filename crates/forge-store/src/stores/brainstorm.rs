use forge_core::entities::{Idea, SipAnalysis};
use forge_core::enums::IdeaSource;
use forge_core::inputs::{BrainstormInput, IdeaDraft};
use forge_core::payloads::{GeneratedIdeaPayload, IdeaAnalysisPayload};
use forge_llm::prompts;

use super::{FeatureStore, StoreContext};
use crate::error::StoreError;
use crate::generate::Generator;
use crate::store_core::{StoreCore, not_found};

/// Startup ideas and their SIP/SPIT evaluations.
pub struct BrainstormStore {
    core: StoreCore<Idea>,
    generator: Generator,
}

impl BrainstormStore {
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored list cannot be read.
    pub fn open(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            core: ctx.open_core()?,
            generator: ctx.generator.clone(),
        })
    }

    /// Have the model invent and analyze an idea.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the request, validation, or persistence.
    pub async fn generate_idea(&self, input: BrainstormInput) -> Result<Idea, StoreError> {
        let prompt = prompts::brainstorm(&input);
        self.generator
            .create(&self.core, &prompt, |p: GeneratedIdeaPayload, id, created_at| Idea {
                id,
                title: p.title,
                description: p.description,
                analysis: p.analysis,
                swot_analysis: p.swot_analysis,
                sip_analysis: None,
                created_at,
                source: IdeaSource::Ai,
            })
            .await
    }

    /// Have the model analyze an idea the user wrote. Title and description
    /// are kept exactly as drafted.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the request, validation, or persistence.
    pub async fn add_idea(&self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let prompt = prompts::idea_analysis(&draft);
        self.generator
            .create(&self.core, &prompt, |p: IdeaAnalysisPayload, id, created_at| Idea {
                id,
                title: draft.title,
                description: draft.description,
                analysis: p.analysis,
                swot_analysis: p.swot_analysis,
                sip_analysis: None,
                created_at,
                source: IdeaSource::User,
            })
            .await
    }

    /// Attach a SIP/SPIT verdict to an existing idea, replacing any earlier
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` without sending a request if `id` is
    /// unknown, or any other [`StoreError`] from the request, validation, or
    /// persistence.
    pub async fn evaluate(&self, id: &str) -> Result<Idea, StoreError> {
        let Some(idea) = self.core.get(id) else {
            return Err(self.core.reject(not_found::<Idea>(id)));
        };

        let prompt = prompts::sip_evaluation(&idea);
        let ticket = self.core.begin();
        match self.generator.run::<SipAnalysis>(&prompt).await {
            Ok(sip) => self
                .core
                .commit_update(ticket, id, |entry| entry.sip_analysis = Some(sip)),
            Err(err) => Err(self.core.fail(ticket, err)),
        }
    }
}

impl FeatureStore for BrainstormStore {
    type Entity = Idea;

    fn core(&self) -> &StoreCore<Idea> {
        &self.core
    }
}
