//! Weekly screening plan.
//!
//! A programming week runs from the anchor day (nominally a Friday) through
//! the following Thursday. Evenings are shown on Fri/Sat/Sun/Wed/Thu and
//! matinees on Sat/Sun; Monday and Tuesday stay dark. The anchor evening is
//! programmed once and bulk-copied onto the other evening days, then the
//! matinees are added on top.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day offsets (from the anchor) that carry an evening show.
pub const EVENING_OFFSETS: [u8; 5] = [0, 1, 2, 5, 6];
/// Day offsets that also carry a matinee.
pub const MATINEE_OFFSETS: [u8; 2] = [1, 2];
/// Day whose programming is copied onto the other evening days.
pub const COPY_SOURCE_OFFSET: u8 = 0;
/// Days produced by copying the source day.
pub const COPY_TARGET_OFFSETS: [u8; 4] = [1, 2, 5, 6];
/// Length of a programming window.
pub const WINDOW_DAYS: u8 = 7;
/// Delay between a show's start and its closing event.
pub const END_MARKER_DELAY_MINUTES: u16 = 2 * 60 + 10;

/// Wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Add minutes, wrapping around midnight.
    pub fn plus_minutes(&self, minutes: u16) -> Self {
        let total = (u32::from(self.hour) * 60 + u32::from(self.minute) + u32::from(minutes))
            % (24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Coarse show-time selection.
///
/// Each pattern names the nominal minute past the hour; actual start times
/// sit 10 minutes earlier to leave room for the pre-show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePattern {
    #[default]
    #[serde(rename = "00")]
    OnTheHour,
    #[serde(rename = "15")]
    Quarter,
    #[serde(rename = "30")]
    Half,
}

impl TimePattern {
    /// Strict parse of `00`, `15` or `30`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "00" | "0" => Some(TimePattern::OnTheHour),
            "15" => Some(TimePattern::Quarter),
            "30" => Some(TimePattern::Half),
            _ => None,
        }
    }

    /// Lenient parse: unknown codes behave as `00`.
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            TimePattern::OnTheHour => "00",
            TimePattern::Quarter => "15",
            TimePattern::Half => "30",
        }
    }

    pub fn evening(&self) -> ClockTime {
        match self {
            TimePattern::OnTheHour => ClockTime::new(18, 50),
            TimePattern::Quarter => ClockTime::new(19, 5),
            TimePattern::Half => ClockTime::new(19, 20),
        }
    }

    pub fn matinee(&self) -> ClockTime {
        match self {
            TimePattern::OnTheHour => ClockTime::new(12, 50),
            TimePattern::Quarter => ClockTime::new(13, 5),
            TimePattern::Half => ClockTime::new(13, 20),
        }
    }
}

impl fmt::Display for TimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowKind {
    Evening,
    Matinee,
}

/// How a placement comes into existence on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum Realization {
    /// Placed on its own day.
    Direct,
    /// Produced by the bulk copy from the given day offset.
    Copied { source_day_offset: u8 },
}

/// One show on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowPlacement {
    pub day_offset: u8,
    pub date: NaiveDate,
    pub kind: ShowKind,
    pub start: ClockTime,
    /// Closing event after the show.
    pub end_marker: ClockTime,
    pub realization: Realization,
}

impl ShowPlacement {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn is_direct(&self) -> bool {
        self.realization == Realization::Direct
    }
}

/// Duplicate the source day's programming onto the target days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyInstruction {
    pub source_day_offset: u8,
    pub target_day_offsets: Vec<u8>,
}

/// Optional inclusive date bounds; each side is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl PlanBounds {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// Full screening plan for one programming week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub anchor: NaiveDate,
    pub pattern: TimePattern,
    /// Direct evenings, copied evenings, then matinees.
    pub placements: Vec<ShowPlacement>,
    pub copy: Option<CopyInstruction>,
}

impl WeekPlan {
    pub fn evenings(&self) -> impl Iterator<Item = &ShowPlacement> {
        self.placements
            .iter()
            .filter(|p| p.kind == ShowKind::Evening)
    }

    pub fn matinees(&self) -> impl Iterator<Item = &ShowPlacement> {
        self.placements
            .iter()
            .filter(|p| p.kind == ShowKind::Matinee)
    }

    /// Evening placements that must be placed individually.
    pub fn direct_evenings(&self) -> impl Iterator<Item = &ShowPlacement> {
        self.evenings().filter(|p| p.is_direct())
    }

    pub fn copied(&self) -> impl Iterator<Item = &ShowPlacement> {
        self.placements.iter().filter(|p| !p.is_direct())
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Lay out the screenings for the week starting at `anchor`.
///
/// Day offsets whose date falls outside `bounds` are dropped. The copy
/// instruction only exists while the anchor day and at least one target
/// survive; otherwise every remaining evening is placed directly.
pub fn plan_week(anchor: NaiveDate, pattern: TimePattern, bounds: &PlanBounds) -> WeekPlan {
    let date_in_bounds = |offset: u8| {
        anchor
            .checked_add_days(Days::new(u64::from(offset)))
            .filter(|date| bounds.contains(*date))
    };

    let copy = date_in_bounds(COPY_SOURCE_OFFSET)
        .map(|_| {
            COPY_TARGET_OFFSETS
                .into_iter()
                .filter(|offset| date_in_bounds(*offset).is_some())
                .collect::<Vec<_>>()
        })
        .filter(|targets| !targets.is_empty())
        .map(|target_day_offsets| CopyInstruction {
            source_day_offset: COPY_SOURCE_OFFSET,
            target_day_offsets,
        });

    let realization_for = |offset: u8| match &copy {
        Some(c) if c.target_day_offsets.contains(&offset) => Realization::Copied {
            source_day_offset: c.source_day_offset,
        },
        _ => Realization::Direct,
    };

    let mut placements = Vec::with_capacity(EVENING_OFFSETS.len() + MATINEE_OFFSETS.len());

    let evening = pattern.evening();
    for offset in EVENING_OFFSETS {
        if let Some(date) = date_in_bounds(offset) {
            placements.push(ShowPlacement {
                day_offset: offset,
                date,
                kind: ShowKind::Evening,
                start: evening,
                end_marker: evening.plus_minutes(END_MARKER_DELAY_MINUTES),
                realization: realization_for(offset),
            });
        }
    }

    let matinee = pattern.matinee();
    for offset in MATINEE_OFFSETS {
        if let Some(date) = date_in_bounds(offset) {
            placements.push(ShowPlacement {
                day_offset: offset,
                date,
                kind: ShowKind::Matinee,
                start: matinee,
                end_marker: matinee.plus_minutes(END_MARKER_DELAY_MINUTES),
                realization: Realization::Direct,
            });
        }
    }

    WeekPlan {
        anchor,
        pattern,
        placements,
        copy,
    }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
