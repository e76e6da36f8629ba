use clap::{Args, Subcommand};

use super::StoreCommands;

/// Automation analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AutomationCommands {
    /// Analyze a business for automation opportunities.
    Analyze(AnalyzeArgs),
    #[command(flatten)]
    Store(StoreCommands),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub industry: String,
    #[arg(long)]
    pub description: String,
    /// Current challenge (repeatable)
    #[arg(long)]
    pub challenge: Vec<String>,
    /// Business goal (repeatable)
    #[arg(long)]
    pub goal: Vec<String>,
}
