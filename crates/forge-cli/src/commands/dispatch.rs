use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Automation { action } => commands::automation::handle(action, ctx, flags).await,
        Commands::Idea { action } => commands::idea::handle(action, ctx, flags).await,
        Commands::Risk { action } => commands::risk::handle(action, ctx, flags).await,
        Commands::Timeline { action } => commands::timeline::handle(action, ctx, flags).await,
        Commands::Problem { action } => commands::problem::handle(action, ctx, flags).await,
        Commands::Report => commands::report::handle(ctx, flags),
        Commands::Schema(_) | Commands::Config => {
            unreachable!("schema/config are pre-dispatched in main")
        }
    }
}
