//! Runtime errors.

use chrono::NaiveDate;
use cinebot_core::{ClockTime, CoreError, FormatKind};
use thiserror::Error;

/// Failure reported by a presentation driver for a single action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Timed out after {0}ms")]
    Timeout(u64),

    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Anchor day {0} not found in the displayed week")]
    AnchorDayNotFound(NaiveDate),

    #[error("Console session closed")]
    SessionClosed,
}

impl From<CoreError> for DriverError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AnchorDayNotFound(date) => DriverError::AnchorDayNotFound(date),
            other => DriverError::ActionFailed(other.to_string()),
        }
    }
}

/// Non-fatal scheduling failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("Failed to place {entry} on {date} at {time}: {source}")]
    SlotPlacement {
        date: NaiveDate,
        time: ClockTime,
        entry: String,
        source: DriverError,
    },

    #[error("Bulk copy from day {source_day_offset} to {targets:?} failed: {source}")]
    BulkCopy {
        source_day_offset: u8,
        targets: Vec<u8>,
        source: DriverError,
    },
}

/// Failure that ends a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Failed to list content: {0}")]
    Listing(#[source] DriverError),

    #[error(transparent)]
    NoCandidate(#[from] CoreError),

    #[error("Failed to ingest '{descriptor}': {source}")]
    Ingest {
        descriptor: String,
        source: DriverError,
    },

    #[error("Block search failed: {0}")]
    BlockSearch(#[source] DriverError),

    #[error("No {0} block found")]
    BlockNotFound(FormatKind),

    #[error("Failed to rename block to '{block_name}': {source}")]
    ContentReplace {
        block_name: String,
        source: DriverError,
    },
}
