use forge_core::inputs::BusinessInfo;
use forge_store::FeatureStore;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AutomationCommands;
use crate::commands::store;
use crate::output::output;
use crate::progress;

/// Handle `forge automation`.
pub async fn handle(
    action: AutomationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let automation = &ctx.workspace.automation;
    match action {
        AutomationCommands::Analyze(args) => {
            let info = BusinessInfo {
                name: args.name,
                industry: args.industry,
                description: args.description,
                challenges: args.challenge,
                goals: args.goal,
            };
            let result = progress::track(
                automation.subscribe(),
                "Analyzing automation opportunities",
                automation.analyze(info),
            )
            .await?;
            output(&result, flags.format)
        }
        AutomationCommands::Store(action) => store::handle(automation, &action, ctx, flags),
    }
}
