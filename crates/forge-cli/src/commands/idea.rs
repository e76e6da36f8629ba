use forge_core::inputs::{BrainstormInput, IdeaDraft};
use forge_store::FeatureStore;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::IdeaCommands;
use crate::commands::store;
use crate::output::output;
use crate::progress;

/// Handle `forge idea`.
pub async fn handle(
    action: IdeaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ideas = &ctx.workspace.brainstorm;
    let idea = match action {
        IdeaCommands::Generate(args) => {
            let input = BrainstormInput {
                topic: args.topic,
                industry: args.industry,
                target_audience: args.audience,
                constraints: args.constraint,
            };
            progress::track(
                ideas.subscribe(),
                "Brainstorming",
                ideas.generate_idea(input),
            )
            .await?
        }
        IdeaCommands::Add { title, description } => {
            let draft = IdeaDraft { title, description };
            progress::track(ideas.subscribe(), "Analyzing idea", ideas.add_idea(draft)).await?
        }
        IdeaCommands::Evaluate { id } => {
            progress::track(
                ideas.subscribe(),
                "Evaluating: SIP or SPIT?",
                ideas.evaluate(&id),
            )
            .await?
        }
        IdeaCommands::Store(action) => return store::handle(ideas, &action, ctx, flags),
    };
    output(&idea, flags.format)
}
