use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::{Domain, IdeaSource, Verdict};

/// Idea viability scores, each in `[1, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAnalysis {
    pub market_potential: u8,
    pub feasibility: u8,
    pub innovation: u8,
    pub scalability: u8,
}

/// Strengths, weaknesses, opportunities, threats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Outcome of an explicit SIP/SPIT evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SipAnalysis {
    pub verdict: Verdict,
    pub score: u8,
    pub reasoning: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A startup idea, generated by the model or drafted by the user.
///
/// `sip_analysis` is `None` until the idea is evaluated; it is the only field
/// of any entity that changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub analysis: IdeaAnalysis,
    pub swot_analysis: SwotAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_analysis: Option<SipAnalysis>,
    pub created_at: DateTime<Utc>,
    pub source: IdeaSource,
}

impl Entity for Idea {
    const DOMAIN: Domain = Domain::Brainstorm;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.title
    }
}
