use forge_core::inputs::TimelineInput;
use forge_store::FeatureStore;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimelineCommands;
use crate::commands::store;
use crate::output::output;
use crate::progress;

/// Handle `forge timeline`.
pub async fn handle(
    action: TimelineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let timelines = &ctx.workspace.timeline;
    match action {
        TimelineCommands::Plan(args) => {
            let input = TimelineInput {
                project_name: args.project,
                description: args.description,
                start_date: args.start,
                end_date: args.end,
                team_size: args.team_size,
                constraints: args.constraint,
            };
            let timeline = progress::track(
                timelines.subscribe(),
                "Planning timeline",
                timelines.plan(input),
            )
            .await?;
            output(&timeline, flags.format)
        }
        TimelineCommands::Store(action) => store::handle(timelines, &action, ctx, flags),
    }
}
