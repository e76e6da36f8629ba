use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `forge report`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.workspace.report(), flags.format)
}
