use forge_core::entities::Idea;
use forge_core::inputs::{BrainstormInput, IdeaDraft};
use forge_schema::domains;

use super::{Prompt, bullets, or_not_specified, reply_shape};

const PERSONA: &str = "You are a startup strategist and venture analyst who \
generates and critically evaluates business ideas.";

/// Sampling temperature for inventing new ideas.
pub const CREATIVE_TEMPERATURE: f32 = 0.9;

/// Sampling temperature for SIP/SPIT verdicts.
pub const VERDICT_TEMPERATURE: f32 = 0.2;

/// Prompt for a new model-generated idea.
#[must_use]
pub fn brainstorm(input: &BrainstormInput) -> Prompt {
    let user = format!(
        "Generate one innovative startup idea.\n\n\
         Topic: {topic}\n\
         Industry: {industry}\n\
         Target audience: {audience}\n\n\
         Constraints:\n{constraints}\n\n\
         Give the idea a short title and a description, rate its market \
         potential, feasibility, innovation, and scalability, and add a SWOT \
         analysis.\n\n\
         {shape}",
        topic = input.topic,
        industry = or_not_specified(input.industry.as_deref()),
        audience = or_not_specified(input.target_audience.as_deref()),
        constraints = bullets(&input.constraints),
        shape = reply_shape(&domains::GENERATED_IDEA),
    );
    Prompt::new(PERSONA, user).with_temperature(CREATIVE_TEMPERATURE)
}

/// Prompt analyzing an idea the user wrote themselves.
#[must_use]
pub fn idea_analysis(draft: &IdeaDraft) -> Prompt {
    let user = format!(
        "Analyze the following startup idea.\n\n\
         Title: {title}\n\
         Description: {description}\n\n\
         Rate its market potential, feasibility, innovation, and scalability, \
         and add a SWOT analysis.\n\n\
         {shape}",
        title = draft.title,
        description = draft.description,
        shape = reply_shape(&domains::IDEA_ANALYSIS),
    );
    Prompt::new(PERSONA, user)
}

/// Prompt for a SIP (pursue) or SPIT (discard) verdict on an existing idea.
#[must_use]
pub fn sip_evaluation(idea: &Idea) -> Prompt {
    let a = &idea.analysis;
    let swot = &idea.swot_analysis;
    let user = format!(
        "Decide whether this startup idea is worth pursuing.\n\n\
         Title: {title}\n\
         Description: {description}\n\n\
         Scores: market potential {market}, feasibility {feasibility}, \
         innovation {innovation}, scalability {scalability}\n\n\
         Strengths:\n{strengths}\n\n\
         Weaknesses:\n{weaknesses}\n\n\
         Opportunities:\n{opportunities}\n\n\
         Threats:\n{threats}\n\n\
         Answer SIP if the idea is worth pursuing or SPIT if it should be \
         discarded, with an overall score, the reasoning behind the verdict, \
         and recommendations.\n\n\
         {shape}",
        title = idea.title,
        description = idea.description,
        market = a.market_potential,
        feasibility = a.feasibility,
        innovation = a.innovation,
        scalability = a.scalability,
        strengths = bullets(&swot.strengths),
        weaknesses = bullets(&swot.weaknesses),
        opportunities = bullets(&swot.opportunities),
        threats = bullets(&swot.threats),
        shape = reply_shape(&domains::SIP_EVALUATION),
    );
    Prompt::new(PERSONA, user).with_temperature(VERDICT_TEMPERATURE)
}
