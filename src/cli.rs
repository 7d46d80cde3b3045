//! CLI definitions for Cinebot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cinebot CLI.
#[derive(Parser)]
#[command(name = "cinebot")]
#[command(about = "Weekly programming for cinema playback consoles")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "config/default.toml",
        env = "CINEBOT_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the screening plan for one week
    Plan {
        #[command(flatten)]
        week: WeekArgs,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Pick the content to ingest from a listing file
    Select {
        /// File with one content label per line
        listing: PathBuf,

        /// Take the first item containing this title instead of ranking
        #[arg(short, long)]
        title: Option<String>,

        /// Room key from the configuration
        #[arg(short, long, default_value = "3")]
        room: String,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Run the whole workflow against a scripted console
    Run {
        /// File with one content label per line
        listing: PathBuf,

        /// Room key from the configuration
        #[arg(short, long, default_value = "3")]
        room: String,

        /// Take the first item containing this title instead of ranking
        #[arg(short, long)]
        title: Option<String>,

        /// Block labels shown in the editor, top first (repeatable)
        #[arg(long = "block")]
        blocks: Vec<String>,

        #[command(flatten)]
        week: WeekArgs,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Validate the configuration file
    ConfigCheck,
}

/// Week selection shared by `plan` and `run`.
#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct WeekArgs {
    /// First day of the week (DD/MM/YYYY); defaults to the next Friday
    #[arg(short, long)]
    pub anchor: Option<String>,

    /// Show-time pattern: 00, 15 or 30
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Drop days before this date (DD/MM/YYYY)
    #[arg(long)]
    pub start: Option<String>,

    /// Drop days after this date (DD/MM/YYYY)
    #[arg(long)]
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from([
            "cinebot", "plan", "--anchor", "17/10/2025", "-p", "15", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan { week, format } => {
                assert_eq!(week.anchor.as_deref(), Some("17/10/2025"));
                assert_eq!(week.pattern.as_deref(), Some("15"));
                assert_eq!(format, "json");
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_parse_run_with_blocks() {
        let cli = Cli::try_parse_from([
            "cinebot",
            "--config",
            "cinebot.toml",
            "run",
            "listing.txt",
            "-r",
            "2",
            "--block",
            "Selectotel - S - Old",
            "--block",
            "Selectotel - F - Old",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("cinebot.toml"));
        match cli.command {
            Commands::Run {
                listing,
                room,
                blocks,
                ..
            } => {
                assert_eq!(listing, PathBuf::from("listing.txt"));
                assert_eq!(room, "2");
                assert_eq!(blocks.len(), 2);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_config_check() {
        let cli = Cli::try_parse_from(["cinebot", "config-check"]).unwrap();
        assert!(matches!(cli.command, Commands::ConfigCheck));
    }

    #[test]
    fn test_select_requires_listing() {
        assert!(Cli::try_parse_from(["cinebot", "select"]).is_err());
    }
}
