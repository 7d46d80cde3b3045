//! Presentation driver abstraction.
//!
//! A driver owns the console session and every UI detail: element lookup,
//! navigation, drag gestures. The workflow only issues the abstract
//! commands below and reads back text or acknowledgements.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use cinebot_core::{ClockTime, ContentDescriptor, FormatKind, ShowPlacement, SlotOffset};
use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// What gets dropped onto the schedule grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum EntryKind {
    /// The programming block carrying the feature.
    Feature { block_name: String },
    /// The closing event, picked by its position in the console's show list.
    EndMarker { list_index: usize },
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Feature { block_name } => write!(f, "feature '{}'", block_name),
            EntryKind::EndMarker { .. } => f.write_str("end marker"),
        }
    }
}

/// A single drop onto the schedule grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRequest {
    pub day_offset: u8,
    pub date: NaiveDate,
    pub hour: u8,
    pub minute: u8,
    /// Position inside the hour cell.
    pub offset: SlotOffset,
    pub entry: EntryKind,
}

impl ShowRequest {
    pub fn new(day_offset: u8, date: NaiveDate, time: ClockTime, entry: EntryKind) -> Self {
        Self {
            day_offset,
            date,
            hour: time.hour,
            minute: time.minute,
            offset: SlotOffset::for_minute(time.minute),
            entry,
        }
    }

    /// Feature drop at the placement's start time.
    pub fn feature(placement: &ShowPlacement, block_name: &str) -> Self {
        Self::new(
            placement.day_offset,
            placement.date,
            placement.start,
            EntryKind::Feature {
                block_name: block_name.to_string(),
            },
        )
    }

    /// Closing event at the placement's end-marker time.
    pub fn end_marker(placement: &ShowPlacement, list_index: usize) -> Self {
        Self::new(
            placement.day_offset,
            placement.date,
            placement.end_marker,
            EntryKind::EndMarker { list_index },
        )
    }

    pub fn time(&self) -> ClockTime {
        ClockTime::new(self.hour, self.minute)
    }
}

/// Console operations the workflow depends on.
///
/// Every call may fail independently; the workflow decides which failures
/// end the run.
#[async_trait]
pub trait PresentationDriver: Send + Sync {
    /// Read the labels of every item available for ingest.
    async fn list_available_content(&self) -> Result<Vec<ContentDescriptor>, DriverError>;

    /// Start ingesting one item.
    async fn ingest(&self, descriptor: &ContentDescriptor) -> Result<(), DriverError>;

    /// Open the first block whose label carries the format marker.
    ///
    /// Returns `false` when no block in the searched range matches.
    async fn open_block_matching(&self, format: FormatKind) -> Result<bool, DriverError>;

    /// Swap the feature inside the open block for `title` and rename the
    /// block.
    async fn replace_content(&self, title: &str, new_block_name: &str)
    -> Result<(), DriverError>;

    async fn set_volume(&self, level: u8) -> Result<(), DriverError>;

    /// Show the schedule week containing `anchor`.
    async fn open_schedule_week(&self, anchor: NaiveDate) -> Result<(), DriverError>;

    /// Duplicate one day's programming onto other days of the open week.
    async fn apply_bulk_copy(
        &self,
        source_day_offset: u8,
        target_day_offsets: &[u8],
    ) -> Result<(), DriverError>;

    async fn place_show(&self, request: &ShowRequest) -> Result<(), DriverError>;
}
