//! Programming workflow.
//!
//! One run picks the content, renames its block, then lays the week out on
//! the schedule grid. Content preparation is all-or-nothing; scheduling is
//! best effort and every failure there lands in the [`RunReport`].

use std::sync::Arc;

use chrono::NaiveDate;
use cinebot_config::{Config, ConfigError};
use cinebot_core::{
    block_name, extract_title, plan_week, select_candidate, PlanBounds, ShowKind, ShowPlacement,
    TimePattern, WeekPlan,
};
use tracing::{debug, error, info, instrument};

use crate::driver::{PresentationDriver, ShowRequest};
use crate::error::{ExecutionError, WorkflowError};
use crate::report::RunReport;
use crate::retry::RetryConfig;

pub const STEP_LIST: &str = "list content";
pub const STEP_SELECT: &str = "select content";
pub const STEP_INGEST: &str = "ingest";
pub const STEP_OPEN_BLOCK: &str = "open block";
pub const STEP_REPLACE: &str = "replace content";
pub const STEP_VOLUME: &str = "set volume";
pub const STEP_OPEN_WEEK: &str = "open schedule week";
pub const STEP_BULK_COPY: &str = "bulk copy";

/// Inputs of one programming run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Room name used in the block label.
    pub room_label: String,
    pub anchor: NaiveDate,
    pub pattern: TimePattern,
    pub bounds: PlanBounds,
    pub target_title: Option<String>,
    /// Volume to set after the block update; `None` leaves it alone.
    pub volume: Option<u8>,
    /// Position of the closing entry in the room's show list.
    pub end_marker_index: usize,
}

impl RunOptions {
    pub fn new(room_label: impl Into<String>, anchor: NaiveDate) -> Self {
        Self {
            room_label: room_label.into(),
            anchor,
            pattern: TimePattern::default(),
            bounds: PlanBounds::default(),
            target_title: None,
            volume: None,
            end_marker_index: 1,
        }
    }

    /// Options for `room_key` with the configured defaults.
    pub fn from_config(
        config: &Config,
        room_key: &str,
        anchor: NaiveDate,
    ) -> Result<Self, ConfigError> {
        let room = config.room(room_key)?;
        Ok(Self {
            room_label: room.label.clone(),
            anchor,
            pattern: config.schedule.pattern(),
            bounds: PlanBounds::default(),
            target_title: config.selection.target_title.clone(),
            volume: config
                .schedule
                .set_volume
                .then_some(config.schedule.volume),
            end_marker_index: room.end_marker_index,
        })
    }

    pub fn with_pattern(mut self, pattern: TimePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_bounds(mut self, bounds: PlanBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_target_title(mut self, title: impl Into<String>) -> Self {
        self.target_title = Some(title.into());
        self
    }
}

/// Executes programming runs against a driver.
pub struct Workflow {
    driver: Arc<dyn PresentationDriver>,
    retry: RetryConfig,
}

impl Workflow {
    pub fn new(driver: Arc<dyn PresentationDriver>) -> Self {
        Self {
            driver,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Run the whole sequence.
    ///
    /// Returns an error only when content preparation fails; scheduling
    /// failures are recorded in the report.
    #[instrument(skip(self, options), fields(room = %options.room_label, anchor = %options.anchor))]
    pub async fn run(&self, options: &RunOptions) -> Result<RunReport, WorkflowError> {
        info!(pattern = %options.pattern, "Starting programming run");
        let mut report = RunReport::new(options.room_label.clone());

        let block = match self.prepare_block(options, &mut report).await {
            Ok(block) => block,
            Err(e) => {
                error!(error = %e, "Programming run aborted");
                return Err(e);
            }
        };

        if let Some(level) = options.volume {
            match self
                .retry
                .run(STEP_VOLUME, || self.driver.set_volume(level))
                .await
            {
                Ok(()) => report.record_success(STEP_VOLUME),
                Err(e) => report.record_failure(STEP_VOLUME, e),
            }
        }

        let plan = plan_week(options.anchor, options.pattern, &options.bounds);
        debug!(placements = plan.placements.len(), copy = plan.copy.is_some(), "Week planned");
        self.schedule(&plan, &block, options, &mut report).await;
        report.plan = Some(plan);

        info!(
            failures = report.failures().count(),
            block = %block,
            "Programming run finished"
        );
        Ok(report)
    }

    /// Select, ingest, and rename. Any failure here is terminal.
    async fn prepare_block(
        &self,
        options: &RunOptions,
        report: &mut RunReport,
    ) -> Result<String, WorkflowError> {
        let items = self
            .retry
            .run(STEP_LIST, || self.driver.list_available_content())
            .await
            .map_err(WorkflowError::Listing)?;
        report.record_success(STEP_LIST);

        let selection = select_candidate(&items, options.target_title.as_deref())?;
        info!(
            descriptor = %selection.descriptor.text(),
            reason = ?selection.reason,
            format = %selection.format,
            "Content selected"
        );
        report.record_success(STEP_SELECT);

        // Ingest and rename are not idempotent, so they get one attempt.
        self.driver
            .ingest(&selection.descriptor)
            .await
            .map_err(|source| WorkflowError::Ingest {
                descriptor: selection.descriptor.text().to_string(),
                source,
            })?;
        report.record_success(STEP_INGEST);

        let title = extract_title(selection.descriptor.text());
        let block = block_name(&options.room_label, selection.format, &title);

        let found = self
            .retry
            .run(STEP_OPEN_BLOCK, || {
                self.driver.open_block_matching(selection.format)
            })
            .await
            .map_err(WorkflowError::BlockSearch)?;
        if !found {
            return Err(WorkflowError::BlockNotFound(selection.format));
        }
        report.record_success(STEP_OPEN_BLOCK);

        self.driver
            .replace_content(&title, &block)
            .await
            .map_err(|source| WorkflowError::ContentReplace {
                block_name: block.clone(),
                source,
            })?;
        report.record_success(STEP_REPLACE);

        report.selection = Some(selection);
        report.title = Some(title);
        report.block_name = Some(block.clone());
        Ok(block)
    }

    /// Anchor evening, bulk copy, then matinees.
    async fn schedule(
        &self,
        plan: &WeekPlan,
        block: &str,
        options: &RunOptions,
        report: &mut RunReport,
    ) {
        if plan.is_empty() {
            report.record_skip(STEP_OPEN_WEEK, "no screening day inside the date bounds");
            return;
        }

        match self
            .retry
            .run(STEP_OPEN_WEEK, || self.driver.open_schedule_week(plan.anchor))
            .await
        {
            Ok(()) => report.record_success(STEP_OPEN_WEEK),
            Err(e) => {
                report.record_failure(STEP_OPEN_WEEK, e);
                return;
            }
        }

        for placement in plan.direct_evenings() {
            self.place(placement, block, options, report).await;
        }

        if let Some(copy) = &plan.copy {
            match self
                .driver
                .apply_bulk_copy(copy.source_day_offset, &copy.target_day_offsets)
                .await
            {
                Ok(()) => report.record_success(STEP_BULK_COPY),
                Err(source) => report.record_failure(
                    STEP_BULK_COPY,
                    ExecutionError::BulkCopy {
                        source_day_offset: copy.source_day_offset,
                        targets: copy.target_day_offsets.clone(),
                        source,
                    },
                ),
            }
        }

        for placement in plan.matinees() {
            self.place(placement, block, options, report).await;
        }
    }

    /// Place a show and, once it is on the grid, its end marker.
    async fn place(
        &self,
        placement: &ShowPlacement,
        block: &str,
        options: &RunOptions,
        report: &mut RunReport,
    ) {
        let step = placement_step(placement);
        let marker_step = format!("{} end marker", step);

        let feature = ShowRequest::feature(placement, block);
        if let Err(source) = self
            .retry
            .run(&step, || self.driver.place_show(&feature))
            .await
        {
            report.record_failure(
                &step,
                ExecutionError::SlotPlacement {
                    date: placement.date,
                    time: placement.start,
                    entry: feature.entry.to_string(),
                    source,
                },
            );
            report.record_skip(&marker_step, "show not placed");
            return;
        }
        report.record_success(&step);

        let marker = ShowRequest::end_marker(placement, options.end_marker_index);
        match self
            .retry
            .run(&marker_step, || self.driver.place_show(&marker))
            .await
        {
            Ok(()) => report.record_success(&marker_step),
            Err(source) => report.record_failure(
                &marker_step,
                ExecutionError::SlotPlacement {
                    date: placement.date,
                    time: placement.end_marker,
                    entry: marker.entry.to_string(),
                    source,
                },
            ),
        }
    }
}

/// Report step name of a placement, e.g. `evening 2025-10-17 18:50`.
pub fn placement_step(placement: &ShowPlacement) -> String {
    let kind = match placement.kind {
        ShowKind::Evening => "evening",
        ShowKind::Matinee => "matinee",
    };
    format!("{} {} {}", kind, placement.date, placement.start)
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
