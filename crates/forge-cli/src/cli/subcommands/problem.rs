use clap::{Args, Subcommand};

use super::StoreCommands;

/// Problem-solving commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProblemCommands {
    /// Produce a solution plan for a problem.
    Solve(SolveArgs),
    #[command(flatten)]
    Store(StoreCommands),
}

#[derive(Clone, Debug, Args)]
pub struct SolveArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub context: Option<String>,
    /// Constraint the solution must respect (repeatable)
    #[arg(long)]
    pub constraint: Vec<String>,
    /// Desired outcome (repeatable)
    #[arg(long)]
    pub goal: Vec<String>,
}
