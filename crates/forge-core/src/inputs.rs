//! Input forms submitted by the user.
//!
//! Each form feeds one prompt builder in `forge-llm`. Free-text fields are
//! opaque: they are interpolated into prompts verbatim and never interpreted.
//! `BusinessInfo` and `ProblemInfo` are also stored on their resulting
//! entities, so they derive `JsonSchema`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Business profile analyzed for automation opportunities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub industry: String,
    pub description: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Seed for a model-generated startup idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormInput {
    pub topic: String,
    pub industry: Option<String>,
    pub target_audience: Option<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// An idea drafted by the user, to be analyzed by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
}

/// A risk to be assessed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskInput {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// A project to be planned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInput {
    pub project_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_size: Option<u32>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl TimelineInput {
    /// Check that the planning window is not inverted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `end_date` precedes `start_date`.
    pub fn check_dates(&self) -> Result<(), CoreError> {
        if self.end_date < self.start_date {
            return Err(CoreError::Validation(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Calendar days in the planning window, inclusive of both ends.
    #[must_use]
    pub fn window_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A problem statement to be solved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInfo {
    pub title: String,
    pub description: String,
    pub context: Option<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(start: (i32, u32, u32), end: (i32, u32, u32)) -> TimelineInput {
        TimelineInput {
            project_name: "Launch".into(),
            description: "Ship v1".into(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            team_size: None,
            constraints: Vec::new(),
        }
    }

    #[test]
    fn inverted_window_is_rejected() {
        let input = timeline((2026, 5, 1), (2026, 4, 30));
        let err = input.check_dates().unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn single_day_window_is_allowed() {
        let input = timeline((2026, 5, 1), (2026, 5, 1));
        assert!(input.check_dates().is_ok());
        assert_eq!(input.window_days(), 1);
    }

    #[test]
    fn business_info_lists_default_when_absent() {
        let info: BusinessInfo = serde_json::from_str(
            r#"{"name":"Acme","industry":"Retail","description":"Shops"}"#,
        )
        .unwrap();
        assert!(info.challenges.is_empty());
        assert!(info.goals.is_empty());
    }
}
