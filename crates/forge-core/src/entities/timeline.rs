use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::{Domain, Level};

/// A checkpoint inside a phase. Dates are kept as the model wrote them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// One phase of a project plan. Milestones keep the order the model gave.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// Length in days.
    pub duration: f64,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineAnalysis {
    /// Total length in days.
    pub total_duration: f64,
    pub critical_path: Vec<String>,
    pub risk_level: Level,
    pub phases: Vec<Phase>,
    pub assumptions: Vec<String>,
    pub constraints: Vec<String>,
}

/// A phased project plan between two calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub analysis: TimelineAnalysis,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Timeline {
    const DOMAIN: Domain = Domain::Timeline;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.project_name
    }
}
