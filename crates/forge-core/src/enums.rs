//! Domain identifiers and value enums for Forge.
//!
//! Wire spellings follow the JSON the chat-completion API is asked to return:
//! levels are lowercase, SIP verdicts and idea sources are uppercase.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// One of the five feature domains. Each domain owns exactly one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Automation,
    Brainstorm,
    Risk,
    Timeline,
    ProblemSolving,
}

impl Domain {
    pub const ALL: [Self; 5] = [
        Self::Automation,
        Self::Brainstorm,
        Self::Risk,
        Self::Timeline,
        Self::ProblemSolving,
    ];

    /// Slug used in export file names and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::Brainstorm => "brainstorm",
            Self::Risk => "risk",
            Self::Timeline => "timeline",
            Self::ProblemSolving => "problem-solving",
        }
    }

    /// Key of the durable key-value entry holding this domain's entity list.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Automation => "automation-results",
            Self::Brainstorm => "ideas",
            Self::Risk => "risks",
            Self::Timeline => "timelines",
            Self::ProblemSolving => "solutions",
        }
    }

    /// Name of the persisted entity's JSON Schema in the registry.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::Automation => "automation_result",
            Self::Brainstorm => "idea",
            Self::Risk => "risk",
            Self::Timeline => "timeline",
            Self::ProblemSolving => "solution",
        }
    }

    /// Export file name: `<domain>-<YYYY-MM-DD>.json`.
    #[must_use]
    pub fn export_file_name(self, date: NaiveDate) -> String {
        format!("{}-{}.json", self.as_str(), date.format("%Y-%m-%d"))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Three-step rating used for risk severity, timeline risk level, and
/// recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    /// Allowed wire spellings, in the order they are shown to the model.
    pub const WIRE: &'static [&'static str] = &["high", "medium", "low"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// SIP/SPIT verdict attached to an idea by a secondary evaluation call.
///
/// `SIP` means the idea is worth pursuing, `SPIT` means discard it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Sip,
    Spit,
}

impl Verdict {
    pub const WIRE: &'static [&'static str] = &["SIP", "SPIT"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sip => "SIP",
            Self::Spit => "SPIT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IdeaSource
// ---------------------------------------------------------------------------

/// Who authored an idea: generated by the model or drafted by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdeaSource {
    Ai,
    User,
}

impl IdeaSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for IdeaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InsertOrder
// ---------------------------------------------------------------------------

/// Where a freshly generated entity lands in its store's list.
///
/// ```text
/// completion  → front of the list when the response arrives
/// submission  → ordered by call sequence, newest call first
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsertOrder {
    #[default]
    Completion,
    Submission,
}

impl InsertOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completion => "completion",
            Self::Submission => "submission",
        }
    }
}

impl fmt::Display for InsertOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
