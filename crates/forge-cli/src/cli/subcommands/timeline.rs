use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::StoreCommands;

/// Timeline planning commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimelineCommands {
    /// Plan a project between two dates.
    Plan(PlanArgs),
    #[command(flatten)]
    Store(StoreCommands),
}

#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub description: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    #[arg(long)]
    pub team_size: Option<u32>,
    /// Constraint the plan must respect (repeatable)
    #[arg(long)]
    pub constraint: Vec<String>,
}
