//! Entity structs for all Forge feature domains.
//!
//! Each entity is owned by one feature store and persisted as an element of
//! that store's JSON array. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation; keys are camelCase
//! to match the shapes the chat-completion API is asked to produce.

mod automation;
mod idea;
mod risk;
mod solution;
mod timeline;

pub use automation::{AutomationAnalysis, AutomationResult};
pub use idea::{Idea, IdeaAnalysis, SipAnalysis, SwotAnalysis};
pub use risk::{Risk, RiskAnalysis};
pub use solution::{Metric, Recommendation, Resource, RoadmapPhase, Solution, SolutionAnalysis};
pub use timeline::{Milestone, Phase, Timeline, TimelineAnalysis};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::Domain;

/// Behaviour shared by every persisted entity.
///
/// The persistence adapter and the feature store core are generic over this
/// trait, so one implementation of snapshotting, ordering, and export serves
/// all five domains.
pub trait Entity: Serialize + DeserializeOwned + JsonSchema + Clone + Send + Sync + 'static {
    /// Domain whose store owns this entity type.
    const DOMAIN: Domain;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Short human-readable label for listings.
    fn label(&self) -> &str;
}
