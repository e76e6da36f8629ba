use forge_core::inputs::BusinessInfo;
use forge_schema::domains;

use super::{Prompt, bullets, reply_shape};

const PERSONA: &str = "You are a business process automation consultant who \
identifies practical automation opportunities and rates them honestly.";

/// Prompt for an automation opportunity analysis.
#[must_use]
pub fn automation(info: &BusinessInfo) -> Prompt {
    let user = format!(
        "Analyze this business for automation opportunities.\n\n\
         Business name: {name}\n\
         Industry: {industry}\n\
         Description: {description}\n\n\
         Current challenges:\n{challenges}\n\n\
         Goals:\n{goals}\n\n\
         Rate efficiency gains, automation potential, implementation risk, and \
         expected ROI. List concrete recommendations and the specific processes \
         that could be automated.\n\n\
         {shape}",
        name = info.name,
        industry = info.industry,
        description = info.description,
        challenges = bullets(&info.challenges),
        goals = bullets(&info.goals),
        shape = reply_shape(&domains::AUTOMATION),
    );
    Prompt::new(PERSONA, user)
}
