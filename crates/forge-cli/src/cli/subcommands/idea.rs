use clap::{Args, Subcommand};

use super::StoreCommands;

/// Brainstorm commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IdeaCommands {
    /// Have the model invent and analyze an idea.
    Generate(GenerateArgs),
    /// Analyze an idea you wrote yourself.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Give an idea a SIP/SPIT verdict.
    Evaluate { id: String },
    #[command(flatten)]
    Store(StoreCommands),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[arg(long)]
    pub topic: String,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    /// Constraint the idea must respect (repeatable)
    #[arg(long)]
    pub constraint: Vec<String>,
}
