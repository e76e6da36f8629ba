//! Prompt builders, one per domain action.
//!
//! Every builder returns a [`Prompt`]: a persona instruction for the system
//! message and a user instruction that embeds the submitted fields plus the
//! reply shape rendered by [`forge_schema::describe`]. User text is
//! interpolated verbatim and never interpreted.

mod automation;
mod brainstorm;
mod problem;
mod risk;
mod timeline;

pub use automation::automation;
pub use brainstorm::{
    CREATIVE_TEMPERATURE, VERDICT_TEMPERATURE, brainstorm, idea_analysis, sip_evaluation,
};
pub use problem::problem;
pub use risk::risk;
pub use timeline::timeline;

use std::fmt::Write as _;

use forge_schema::{Field, FieldKind, ResponseSchema, describe};

/// Placeholder for absent optional fields and empty lists.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Shared tail of every system message.
const JSON_ONLY: &str = "Respond with a single JSON object and nothing else: \
no prose, no Markdown, no code fences.";

/// A system instruction and a user instruction, sent in that order.
///
/// `temperature` overrides the configured sampling temperature for this
/// prompt only.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: Option<f32>,
}

impl Prompt {
    fn new(persona: &str, user: String) -> Self {
        Self {
            system: format!("{persona} {JSON_ONLY}"),
            user,
            temperature: None,
        }
    }

    const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Render a list as `- item` lines, or [`NOT_SPECIFIED`] when empty.
fn bullets(items: &[String]) -> String {
    if items.is_empty() {
        return NOT_SPECIFIED.to_string();
    }
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "- {item}");
    }
    out
}

fn or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// Closing block asking for `schema`'s shape.
fn reply_shape(schema: &ResponseSchema) -> String {
    let mut out = format!(
        "Respond with JSON in exactly this structure:\n{}",
        describe(schema)
    );
    if has_scores(schema.fields) {
        out.push_str("\n\nScores are integers from 1 to 100.");
    }
    out
}

fn has_scores(fields: &[Field]) -> bool {
    fields.iter().any(|field| match field.kind {
        FieldKind::Score => true,
        FieldKind::Object(inner) | FieldKind::ObjectList(inner) => has_scores(inner),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_render_one_line_per_item() {
        let items = vec!["Slow invoicing".to_string(), "Manual stock counts".to_string()];
        assert_eq!(bullets(&items), "- Slow invoicing\n- Manual stock counts");
    }

    #[test]
    fn empty_list_is_not_specified() {
        assert_eq!(bullets(&[]), NOT_SPECIFIED);
    }

    #[test]
    fn blank_optional_is_not_specified() {
        assert_eq!(or_not_specified(None), NOT_SPECIFIED);
        assert_eq!(or_not_specified(Some("  ")), NOT_SPECIFIED);
        assert_eq!(or_not_specified(Some("Students")), "Students");
    }

    #[test]
    fn score_note_only_when_schema_has_scores() {
        assert!(reply_shape(&forge_schema::domains::RISK).ends_with("from 1 to 100."));
        assert!(!reply_shape(&forge_schema::domains::TIMELINE).contains("Scores are"));
    }

    #[test]
    fn system_message_demands_bare_json() {
        let prompt = Prompt::new("You are a tester.", String::new());
        assert!(prompt.system.starts_with("You are a tester."));
        assert!(prompt.system.contains("single JSON object"));
    }
}
