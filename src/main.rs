//! Cinebot - weekly programming for cinema playback consoles.
//!
//! Main entry point for the Cinebot CLI.

mod cli;
mod cmd_config;
mod cmd_plan;
mod cmd_run;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinebot_config::{ConfigLoader, ConfigValidator, LoggingConfig};

use cli::{Cli, Commands};

/// Log directory: `logging.dir` if set, else `~/.cinebot/logs`.
fn log_dir(logging: &LoggingConfig) -> PathBuf {
    logging
        .dir
        .as_deref()
        .map(ConfigLoader::expand_path)
        .unwrap_or_else(|| ConfigLoader::home_dir().join("logs"))
}

/// Initialize tracing with console and file output.
///
/// Log files rotate daily; the last 30 are kept.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir(logging);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&logging.file_prefix)
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the file writer flushing until exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console on stderr so JSON output stays clean
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::ConfigCheck = cli.command {
        return cmd_config::handle_config_check(&cli.config);
    }

    let config = ConfigLoader::load_or_default(&cli.config)?;
    let warnings = ConfigValidator::validate(&config).into_result()?;
    init_tracing(&config.logging)?;
    debug!(config = %cli.config.display(), rooms = config.rooms.len(), "Configuration loaded");
    for warning in &warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    match cli.command {
        Commands::Plan { week, format } => cmd_plan::handle_plan_command(&config, &week, &format),
        Commands::Select {
            listing,
            title,
            room,
            format,
        } => cmd_plan::handle_select_command(&config, &listing, title.as_deref(), &room, &format),
        Commands::Run {
            listing,
            room,
            title,
            blocks,
            week,
            format,
        } => {
            cmd_run::handle_run_command(&config, &listing, &room, title, blocks, &week, &format)
                .await
        }
        Commands::ConfigCheck => cmd_config::handle_config_check(&cli.config),
    }
}
