use forge_core::inputs::TimelineInput;
use forge_schema::domains;

use super::{NOT_SPECIFIED, Prompt, bullets, reply_shape};

const PERSONA: &str = "You are a senior project manager who builds realistic, \
phased project plans with milestones and a critical path.";

/// Prompt for a phased project timeline.
#[must_use]
pub fn timeline(input: &TimelineInput) -> Prompt {
    let team_size = input
        .team_size
        .map_or_else(|| NOT_SPECIFIED.to_string(), |n| n.to_string());

    let user = format!(
        "Plan the following project.\n\n\
         Project: {project}\n\
         Description: {description}\n\
         Start date: {start}\n\
         End date: {end}\n\
         Available days: {days}\n\
         Team size: {team_size}\n\n\
         Constraints:\n{constraints}\n\n\
         Break the work into ordered phases inside the date window, each with \
         ordered milestones. Use YYYY-MM-DD for every date and days for every \
         duration. Identify the critical path, the overall risk level, and the \
         assumptions the plan relies on.\n\n\
         {shape}",
        project = input.project_name,
        description = input.description,
        start = input.start_date.format("%Y-%m-%d"),
        end = input.end_date.format("%Y-%m-%d"),
        days = input.window_days(),
        constraints = bullets(&input.constraints),
        shape = reply_shape(&domains::TIMELINE),
    );
    Prompt::new(PERSONA, user)
}
