use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::{Domain, Level};
use crate::inputs::ProblemInfo;

/// Problem diagnosis. `impact`, `urgency`, and `complexity` are in `[1, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionAnalysis {
    pub summary: String,
    pub impact: u8,
    pub urgency: u8,
    pub complexity: u8,
    pub root_causes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Level,
    pub timeframe: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub tasks: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub target: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub estimated_cost: Option<String>,
}

/// A structured solution to a user-described problem.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: String,
    pub problem_info: ProblemInfo,
    pub analysis: SolutionAnalysis,
    pub recommendations: Vec<Recommendation>,
    pub roadmap: Vec<RoadmapPhase>,
    pub metrics: Vec<Metric>,
    pub resources: Vec<Resource>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Solution {
    const DOMAIN: Domain = Domain::ProblemSolving;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.problem_info.title
    }
}
