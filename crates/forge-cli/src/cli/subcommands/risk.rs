use clap::{Args, Subcommand};

use super::StoreCommands;

/// Risk assessment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RiskCommands {
    /// Assess a risk.
    Assess(AssessArgs),
    #[command(flatten)]
    Store(StoreCommands),
}

#[derive(Clone, Debug, Args)]
pub struct AssessArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Free-form category, e.g. technical, financial, legal
    #[arg(long)]
    pub category: String,
}
