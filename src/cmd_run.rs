//! `run` command: full workflow against the scripted console.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use cinebot_config::Config;
use cinebot_runtime::{RetryConfig, RunOptions, RunReport, ScriptedDriver, StepStatus, Workflow};

use crate::cli::WeekArgs;
use crate::cmd_plan::{resolve_anchor, resolve_bounds, resolve_pattern};

pub(crate) async fn handle_run_command(
    config: &Config,
    listing: &Path,
    room_key: &str,
    title: Option<String>,
    blocks: Vec<String>,
    week: &WeekArgs,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let anchor = resolve_anchor(week.anchor.as_deref())?;
    let mut options = RunOptions::from_config(config, room_key, anchor)?
        .with_pattern(resolve_pattern(
            week.pattern.as_deref(),
            config.schedule.pattern(),
        ))
        .with_bounds(resolve_bounds(week)?);
    if let Some(title) = title {
        options = options.with_target_title(title);
    }

    let blocks = if blocks.is_empty() {
        vec![
            format!("{} - S - Libre", options.room_label),
            format!("{} - F - Libre", options.room_label),
        ]
    } else {
        blocks
    };

    let driver = Arc::new(
        ScriptedDriver::from_lines(&std::fs::read_to_string(listing)?)
            .with_blocks(blocks)
            .with_max_blocks(config.selection.max_blocks),
    );
    info!(room = %options.room_label, listing = %listing.display(), "Starting scripted run");

    let workflow = Workflow::new(driver.clone()).with_retry(RetryConfig::from(&config.retry));
    let report = workflow.run(&options).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }
    info!(calls = driver.calls().len(), "Scripted console released");
    Ok(())
}

fn print_report(report: &RunReport) {
    println!("Room:   {}", report.room);
    if let Some(block) = &report.block_name {
        println!("Block:  {}", block);
    }
    if let Some(selection) = &report.selection {
        println!("Source: {}", selection.descriptor.text());
    }
    println!();

    for outcome in &report.steps {
        match &outcome.status {
            StepStatus::Succeeded => println!("  ok    {}", outcome.step),
            StepStatus::Failed { reason } => println!("  FAIL  {} ({})", outcome.step, reason),
            StepStatus::Skipped { reason } => println!("  skip  {} ({})", outcome.step, reason),
        }
    }

    let failures = report.failures().count();
    if failures == 0 {
        println!("\nAll steps completed.");
    } else {
        println!("\n{} step(s) failed; review the schedule on the console.", failures);
    }
}
