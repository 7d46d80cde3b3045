//! In-memory presentation driver.
//!
//! Plays back a fixed content listing and block list, keeps a log of every
//! call, and fails on demand. Used by `cinebot run` for dry runs and by the
//! workflow tests.

use async_trait::async_trait;
use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};
use cinebot_core::{
    format_date, locate_anchor_column, matches_format, week_shift, ContentDescriptor, DayColumn,
    FormatKind,
};
use parking_lot::Mutex;
use tracing::debug;

use crate::driver::{EntryKind, PresentationDriver, ShowRequest};
use crate::error::DriverError;

const DEFAULT_MAX_BLOCKS: usize = 10;

/// Driver operations, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverAction {
    ListContent,
    Ingest,
    OpenBlock,
    ReplaceContent,
    SetVolume,
    OpenWeek,
    BulkCopy,
    PlaceFeature,
    PlaceEndMarker,
}

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    ListContent,
    Ingest(String),
    OpenBlock {
        format: FormatKind,
        opened: Option<String>,
    },
    ReplaceContent {
        title: String,
        block_name: String,
    },
    SetVolume(u8),
    OpenWeek {
        anchor: NaiveDate,
        shift: i64,
    },
    BulkCopy {
        source_day_offset: u8,
        target_day_offsets: Vec<u8>,
    },
    PlaceShow(ShowRequest),
}

impl DriverCall {
    pub fn action(&self) -> DriverAction {
        match self {
            DriverCall::ListContent => DriverAction::ListContent,
            DriverCall::Ingest(_) => DriverAction::Ingest,
            DriverCall::OpenBlock { .. } => DriverAction::OpenBlock,
            DriverCall::ReplaceContent { .. } => DriverAction::ReplaceContent,
            DriverCall::SetVolume(_) => DriverAction::SetVolume,
            DriverCall::OpenWeek { .. } => DriverAction::OpenWeek,
            DriverCall::BulkCopy { .. } => DriverAction::BulkCopy,
            DriverCall::PlaceShow(request) => match request.entry {
                EntryKind::Feature { .. } => DriverAction::PlaceFeature,
                EntryKind::EndMarker { .. } => DriverAction::PlaceEndMarker,
            },
        }
    }
}

struct InjectedFailure {
    action: DriverAction,
    date: Option<NaiveDate>,
    /// `None` fails forever.
    remaining: Option<u32>,
    error: DriverError,
}

#[derive(Default)]
struct ConsoleState {
    blocks: Vec<String>,
    open_block: Option<usize>,
    displayed_first: Option<NaiveDate>,
    week_open: bool,
    volume: Option<u8>,
}

/// Scripted console.
pub struct ScriptedDriver {
    listing: Vec<ContentDescriptor>,
    max_blocks: usize,
    state: Mutex<ConsoleState>,
    failures: Mutex<Vec<InjectedFailure>>,
    calls: Mutex<Vec<DriverCall>>,
}

impl ScriptedDriver {
    pub fn new(listing: Vec<ContentDescriptor>) -> Self {
        Self {
            listing,
            max_blocks: DEFAULT_MAX_BLOCKS,
            state: Mutex::new(ConsoleState::default()),
            failures: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Build from a listing file, one descriptor per non-blank line.
    pub fn from_lines(text: &str) -> Self {
        Self::new(ContentDescriptor::parse_listing(text))
    }

    /// Block labels, top of the editor list first.
    pub fn with_blocks<I, S>(self, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.lock().blocks = blocks.into_iter().map(Into::into).collect();
        self
    }

    /// How many blocks from the top are searched.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// First day of the week the schedule grid shows on open.
    pub fn with_displayed_week(self, first: NaiveDate) -> Self {
        self.state.lock().displayed_first = Some(first);
        self
    }

    /// Fail every call of `action`.
    pub fn fail(self, action: DriverAction, error: DriverError) -> Self {
        self.inject(action, None, None, error)
    }

    /// Fail the first `times` calls of `action`.
    pub fn fail_times(self, action: DriverAction, times: u32, error: DriverError) -> Self {
        self.inject(action, None, Some(times), error)
    }

    /// Fail every placement of `action` on `date`.
    pub fn fail_on(self, action: DriverAction, date: NaiveDate, error: DriverError) -> Self {
        self.inject(action, Some(date), None, error)
    }

    fn inject(
        self,
        action: DriverAction,
        date: Option<NaiveDate>,
        remaining: Option<u32>,
        error: DriverError,
    ) -> Self {
        self.failures.lock().push(InjectedFailure {
            action,
            date,
            remaining,
            error,
        });
        self
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().clone()
    }

    pub fn blocks(&self) -> Vec<String> {
        self.state.lock().blocks.clone()
    }

    pub fn volume(&self) -> Option<u8> {
        self.state.lock().volume
    }

    fn record(&self, call: DriverCall) {
        debug!(?call, "Scripted driver call");
        self.calls.lock().push(call);
    }

    fn check(&self, action: DriverAction, date: Option<NaiveDate>) -> Result<(), DriverError> {
        let mut failures = self.failures.lock();
        let hit = failures.iter_mut().find(|f| {
            f.action == action && f.remaining != Some(0) && (f.date.is_none() || f.date == date)
        });
        match hit {
            Some(failure) => {
                if let Some(n) = failure.remaining.as_mut() {
                    *n -= 1;
                }
                Err(failure.error.clone())
            }
            None => Ok(()),
        }
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    }
}

fn week_columns(first: NaiveDate) -> Vec<DayColumn> {
    first
        .iter_days()
        .take(7)
        .map(|day| DayColumn::new(weekday_label(day.weekday()), format_date(day)))
        .collect()
}

#[async_trait]
impl PresentationDriver for ScriptedDriver {
    async fn list_available_content(&self) -> Result<Vec<ContentDescriptor>, DriverError> {
        self.record(DriverCall::ListContent);
        self.check(DriverAction::ListContent, None)?;
        Ok(self.listing.clone())
    }

    async fn ingest(&self, descriptor: &ContentDescriptor) -> Result<(), DriverError> {
        self.record(DriverCall::Ingest(descriptor.text().to_string()));
        self.check(DriverAction::Ingest, None)?;
        if !self.listing.contains(descriptor) {
            return Err(DriverError::ElementNotFound(format!(
                "content '{}'",
                descriptor.text()
            )));
        }
        Ok(())
    }

    async fn open_block_matching(&self, format: FormatKind) -> Result<bool, DriverError> {
        let mut state = self.state.lock();
        let index = state
            .blocks
            .iter()
            .take(self.max_blocks)
            .position(|label| matches_format(label, format));
        self.record(DriverCall::OpenBlock {
            format,
            opened: index.map(|i| state.blocks[i].clone()),
        });
        self.check(DriverAction::OpenBlock, None)?;
        state.open_block = index;
        Ok(index.is_some())
    }

    async fn replace_content(
        &self,
        title: &str,
        new_block_name: &str,
    ) -> Result<(), DriverError> {
        self.record(DriverCall::ReplaceContent {
            title: title.to_string(),
            block_name: new_block_name.to_string(),
        });
        self.check(DriverAction::ReplaceContent, None)?;
        let mut state = self.state.lock();
        let index = state
            .open_block
            .ok_or_else(|| DriverError::ElementNotFound("open block".to_string()))?;
        state.blocks[index] = new_block_name.to_string();
        Ok(())
    }

    async fn set_volume(&self, level: u8) -> Result<(), DriverError> {
        self.record(DriverCall::SetVolume(level));
        self.check(DriverAction::SetVolume, None)?;
        self.state.lock().volume = Some(level);
        Ok(())
    }

    async fn open_schedule_week(&self, anchor: NaiveDate) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        let shift = state
            .displayed_first
            .map(|first| week_shift(first, anchor))
            .unwrap_or(0);
        self.record(DriverCall::OpenWeek { anchor, shift });
        self.check(DriverAction::OpenWeek, Some(anchor))?;

        if let Some(first) = state.displayed_first {
            let first = first
                .checked_add_signed(TimeDelta::days(shift * 7))
                .ok_or(DriverError::AnchorDayNotFound(anchor))?;
            locate_anchor_column(&week_columns(first), anchor)?;
            state.displayed_first = Some(first);
        }
        state.week_open = true;
        Ok(())
    }

    async fn apply_bulk_copy(
        &self,
        source_day_offset: u8,
        target_day_offsets: &[u8],
    ) -> Result<(), DriverError> {
        self.record(DriverCall::BulkCopy {
            source_day_offset,
            target_day_offsets: target_day_offsets.to_vec(),
        });
        self.check(DriverAction::BulkCopy, None)?;
        if !self.state.lock().week_open {
            return Err(DriverError::ElementNotFound("schedule grid".to_string()));
        }
        Ok(())
    }

    async fn place_show(&self, request: &ShowRequest) -> Result<(), DriverError> {
        self.record(DriverCall::PlaceShow(request.clone()));
        let action = match request.entry {
            EntryKind::Feature { .. } => DriverAction::PlaceFeature,
            EntryKind::EndMarker { .. } => DriverAction::PlaceEndMarker,
        };
        self.check(action, Some(request.date))?;

        let state = self.state.lock();
        if !state.week_open {
            return Err(DriverError::ElementNotFound("schedule grid".to_string()));
        }
        if let Some(first) = state.displayed_first {
            let last = first.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
            if request.date < first || request.date > last {
                return Err(DriverError::ElementNotFound(format!(
                    "day column {}",
                    format_date(request.date)
                )));
            }
        }
        Ok(())
    }
}
