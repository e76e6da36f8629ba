use forge_core::inputs::RiskInput;
use forge_store::FeatureStore;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::RiskCommands;
use crate::commands::store;
use crate::output::output;
use crate::progress;

/// Handle `forge risk`.
pub async fn handle(
    action: RiskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let risks = &ctx.workspace.risk;
    match action {
        RiskCommands::Assess(args) => {
            let input = RiskInput {
                name: args.name,
                description: args.description,
                category: args.category,
            };
            let risk =
                progress::track(risks.subscribe(), "Assessing risk", risks.assess(input)).await?;
            output(&risk, flags.format)
        }
        RiskCommands::Store(action) => store::handle(risks, &action, ctx, flags),
    }
}
