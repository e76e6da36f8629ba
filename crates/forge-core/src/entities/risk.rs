use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::{Domain, Level};

/// Risk scoring plus response plans.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub probability: u8,
    pub impact: u8,
    pub urgency: u8,
    pub severity: Level,
    pub mitigation: Vec<String>,
    pub contingency: Vec<String>,
}

/// An assessed business risk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub analysis: RiskAnalysis,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Risk {
    const DOMAIN: Domain = Domain::Risk;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.name
    }
}
