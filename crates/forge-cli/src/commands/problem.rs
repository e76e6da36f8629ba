use forge_core::inputs::ProblemInfo;
use forge_store::FeatureStore;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProblemCommands;
use crate::commands::store;
use crate::output::output;
use crate::progress;

/// Handle `forge problem`.
pub async fn handle(
    action: ProblemCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let problems = &ctx.workspace.problems;
    match action {
        ProblemCommands::Solve(args) => {
            let info = ProblemInfo {
                title: args.title,
                description: args.description,
                context: args.context,
                constraints: args.constraint,
                goals: args.goal,
            };
            let solution =
                progress::track(problems.subscribe(), "Solving", problems.solve(info)).await?;
            output(&solution, flags.format)
        }
        ProblemCommands::Store(action) => store::handle(problems, &action, ctx, flags),
    }
}
