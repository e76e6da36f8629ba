use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::Domain;
use crate::inputs::BusinessInfo;

/// Automation readiness scores, each in `[1, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationAnalysis {
    pub efficiency: u8,
    pub potential: u8,
    pub risk: u8,
    pub roi: u8,
}

/// Automation opportunities identified for a business.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationResult {
    pub id: String,
    pub business_info: BusinessInfo,
    pub analysis: AutomationAnalysis,
    pub recommendations: Vec<String>,
    pub opportunities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for AutomationResult {
    const DOMAIN: Domain = Domain::Automation;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.business_info.name
    }
}
