//! `plan` and `select` commands.

use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use cinebot_config::Config;
use cinebot_core::{
    block_name, default_anchor, extract_title, format_date, parse_anchor_date, plan_week,
    select_candidate, ContentDescriptor, PlanBounds, Realization, SelectionReason, ShowKind,
    TimePattern, WeekPlan, window_end,
};

use crate::cli::WeekArgs;

/// Anchor from `--anchor`, or the next programming Friday.
pub(crate) fn resolve_anchor(anchor: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match anchor {
        Some(text) => Ok(parse_anchor_date(text)?),
        None => Ok(default_anchor(Local::now().naive_local())),
    }
}

/// Pattern from `--pattern`; unknown codes fall back to `00`.
pub(crate) fn resolve_pattern(code: Option<&str>, default: TimePattern) -> TimePattern {
    match code {
        None => default,
        Some(code) => {
            if TimePattern::parse(code).is_none() {
                warn!("Unknown time pattern '{}', using 00", code);
            }
            TimePattern::from_code(code)
        }
    }
}

pub(crate) fn resolve_bounds(week: &WeekArgs) -> Result<PlanBounds, Box<dyn std::error::Error>> {
    let start = week.start.as_deref().map(parse_anchor_date).transpose()?;
    let end = week.end.as_deref().map(parse_anchor_date).transpose()?;
    Ok(PlanBounds::new(start, end))
}

pub(crate) fn read_listing(path: &Path) -> Result<Vec<ContentDescriptor>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(ContentDescriptor::parse_listing(&text))
}

pub(crate) fn handle_plan_command(
    config: &Config,
    week: &WeekArgs,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let anchor = resolve_anchor(week.anchor.as_deref())?;
    let pattern = resolve_pattern(week.pattern.as_deref(), config.schedule.pattern());
    let bounds = resolve_bounds(week)?;

    let plan = plan_week(anchor, pattern, &bounds);
    info!(anchor = %anchor, pattern = %pattern, placements = plan.placements.len(), "Week planned");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&plan)?),
        _ => print_plan(&plan),
    }
    Ok(())
}

fn print_plan(plan: &WeekPlan) {
    println!(
        "Week of {} to {} (pattern {})",
        format_date(plan.anchor),
        format_date(window_end(plan.anchor)),
        plan.pattern
    );
    if plan.is_empty() {
        println!("No screening day inside the date bounds.");
        return;
    }

    println!(
        "{:<5} {:<12} {:<8} {:<6} {:<6} {}",
        "DAY", "DATE", "KIND", "START", "END", "VIA"
    );
    println!("{}", "-".repeat(56));
    for p in &plan.placements {
        let kind = match p.kind {
            ShowKind::Evening => "evening",
            ShowKind::Matinee => "matinee",
        };
        let via = match p.realization {
            Realization::Direct => "direct".to_string(),
            Realization::Copied { source_day_offset } => format!("copy of day {}", source_day_offset),
        };
        println!(
            "{:<5} {:<12} {:<8} {:<6} {:<6} {}",
            p.date.format("%a").to_string(),
            format_date(p.date),
            kind,
            p.start.to_string(),
            p.end_marker.to_string(),
            via
        );
    }

    if let Some(copy) = &plan.copy {
        println!(
            "\nBulk copy: day {} -> days {:?}",
            copy.source_day_offset, copy.target_day_offsets
        );
    }
}

pub(crate) fn handle_select_command(
    config: &Config,
    listing: &Path,
    title: Option<&str>,
    room: &str,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let room = config.room(room)?;
    let items = read_listing(listing)?;
    let target = title.or(config.selection.target_title.as_deref());

    let selection = select_candidate(&items, target)?;
    let film = extract_title(selection.descriptor.text());
    let block = block_name(&room.label, selection.format, &film);
    info!(descriptor = %selection.descriptor.text(), block = %block, "Content selected");

    if format == "json" {
        let value = serde_json::json!({
            "selection": selection,
            "title": film,
            "block_name": block,
            "ratio": selection.format.ratio(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let reason = match &selection.reason {
        SelectionReason::ExplicitTitle { title } => format!("title match '{}'", title),
        SelectionReason::Tier { tier } => tier.to_string(),
    };
    println!("Content:  {}", selection.descriptor.text());
    println!("Line:     {}", selection.index + 1);
    println!("Reason:   {}", reason);
    println!("Format:   {} ({})", selection.format, selection.format.ratio());
    println!("Title:    {}", film);
    println!("Block:    {}", block);
    Ok(())
}
