use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `forge` binary.
#[derive(Debug, Parser)]
#[command(
    name = "forge",
    version,
    about = "Forge - AI-assisted automation, idea, risk, timeline and problem analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max entities to list
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress spinners and notices)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (overrides storage.data_dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{
        AutomationCommands, IdeaCommands, RiskCommands, StoreCommands, TimelineCommands,
    };
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "forge", "--format", "table", "--limit", "10", "--verbose", "report",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Report));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "forge", "risk", "list", "--format", "raw", "--quiet", "--data-dir", "/tmp/forge",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(
            cli.global_flags().data_dir,
            Some(PathBuf::from("/tmp/forge"))
        );
        assert!(matches!(
            cli.command,
            Commands::Risk {
                action: RiskCommands::Store(StoreCommands::List)
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["forge", "--format", "xml", "report"]).is_err());
    }

    #[test]
    fn automation_analyze_collects_repeated_lists() {
        let cli = Cli::try_parse_from([
            "forge",
            "automation",
            "analyze",
            "--name",
            "Acme",
            "--industry",
            "Retail",
            "--description",
            "Two shops",
            "--challenge",
            "Stock counts",
            "--challenge",
            "Rota",
            "--goal",
            "Online orders",
        ])
        .unwrap();

        let Commands::Automation {
            action: AutomationCommands::Analyze(args),
        } = cli.command
        else {
            panic!("expected automation analyze");
        };
        assert_eq!(args.challenge, vec!["Stock counts", "Rota"]);
        assert_eq!(args.goal, vec!["Online orders"]);
    }

    #[test]
    fn timeline_dates_parse_as_calendar_dates() {
        let cli = Cli::try_parse_from([
            "forge",
            "timeline",
            "plan",
            "--project",
            "App",
            "--description",
            "Booking app",
            "--start",
            "2026-01-01",
            "--end",
            "2026-03-31",
        ])
        .unwrap();

        let Commands::Timeline {
            action: TimelineCommands::Plan(args),
        } = cli.command
        else {
            panic!("expected timeline plan");
        };
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(args.team_size, None);

        let bad = Cli::try_parse_from([
            "forge", "timeline", "plan", "--project", "App", "--description", "d", "--start",
            "01/01/2026", "--end", "2026-03-31",
        ]);
        assert!(bad.is_err());
    }

    #[test]
    fn idea_evaluate_takes_positional_id() {
        let cli = Cli::try_parse_from(["forge", "idea", "evaluate", "ida-0000abcd"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Idea { action: IdeaCommands::Evaluate { ref id } } if id == "ida-0000abcd"
        ));
    }

    #[test]
    fn export_accepts_optional_dir() {
        let cli = Cli::try_parse_from(["forge", "problem", "export", "--dir", "out"]).unwrap();
        let Commands::Problem { action } = cli.command else {
            panic!("expected problem");
        };
        assert!(matches!(
            action,
            super::subcommands::ProblemCommands::Store(StoreCommands::Export { dir: Some(ref d) })
                if d == &PathBuf::from("out")
        ));
    }
}
