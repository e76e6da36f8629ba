use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AutomationCommands, IdeaCommands, ProblemCommands, RiskCommands, TimelineCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Automation opportunity analyses.
    Automation {
        #[command(subcommand)]
        action: AutomationCommands,
    },
    /// Startup ideas and SIP/SPIT evaluations.
    Idea {
        #[command(subcommand)]
        action: IdeaCommands,
    },
    /// Risk assessments.
    Risk {
        #[command(subcommand)]
        action: RiskCommands,
    },
    /// Project timelines.
    Timeline {
        #[command(subcommand)]
        action: TimelineCommands,
    },
    /// Problem-solving plans.
    Problem {
        #[command(subcommand)]
        action: ProblemCommands,
    },
    /// Print the JSON Schema of a stored entity type.
    Schema(SchemaArgs),
    /// Counts and average scores across every store.
    Report,
    /// Print the effective configuration (API key redacted).
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `risk`, `automation_result`); omit to list names.
    pub name: Option<String>,
}
