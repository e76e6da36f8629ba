use forge_core::inputs::RiskInput;
use forge_schema::domains;

use super::{Prompt, reply_shape};

const PERSONA: &str = "You are an enterprise risk manager who assesses \
business risks and proposes mitigation and contingency plans.";

/// Prompt for a risk assessment.
#[must_use]
pub fn risk(input: &RiskInput) -> Prompt {
    let user = format!(
        "Assess the following risk.\n\n\
         Risk: {name}\n\
         Category: {category}\n\
         Description: {description}\n\n\
         Rate probability, impact, and urgency, classify overall severity, and \
         give mitigation steps, contingency plans, and recommendations.\n\n\
         {shape}",
        name = input.name,
        category = input.category,
        description = input.description,
        shape = reply_shape(&domains::RISK),
    );
    Prompt::new(PERSONA, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_risk_fields_and_severity_levels() {
        let prompt = risk(&RiskInput {
            name: "Supplier failure".into(),
            description: "One supplier for the main part".into(),
            category: "operational".into(),
        });
        assert!(prompt.user.contains("Risk: Supplier failure"));
        assert!(prompt.user.contains("Category: operational"));
        assert!(prompt.user.contains(r#""severity": "high" | "medium" | "low""#));
    }
}
