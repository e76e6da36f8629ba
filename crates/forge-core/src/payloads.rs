//! Validated response payloads.
//!
//! `forge-schema` checks and coerces the raw model reply against a domain
//! response schema, then deserializes it into one of these types. Payloads
//! carry only what the model produced; the store adds `id`, `createdAt`, and
//! the user's original input when it builds the entity.

use serde::Deserialize;

use crate::entities::{
    AutomationAnalysis, IdeaAnalysis, Metric, Recommendation, Resource, RiskAnalysis,
    RoadmapPhase, SipAnalysis, SolutionAnalysis, SwotAnalysis, TimelineAnalysis,
};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPayload {
    pub analysis: AutomationAnalysis,
    pub recommendations: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Reply to a brainstorm prompt: a complete idea.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedIdeaPayload {
    pub title: String,
    pub description: String,
    pub analysis: IdeaAnalysis,
    pub swot_analysis: SwotAnalysis,
}

/// Reply to a user-drafted idea: scores and SWOT only.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAnalysisPayload {
    pub analysis: IdeaAnalysis,
    pub swot_analysis: SwotAnalysis,
}

/// Reply to a SIP/SPIT evaluation prompt.
pub type SipPayload = SipAnalysis;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskPayload {
    pub analysis: RiskAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePayload {
    pub analysis: TimelineAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionPayload {
    pub analysis: SolutionAnalysis,
    pub recommendations: Vec<Recommendation>,
    pub roadmap: Vec<RoadmapPhase>,
    pub metrics: Vec<Metric>,
    pub resources: Vec<Resource>,
}
