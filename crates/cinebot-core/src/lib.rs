//! # Cinebot Core
//!
//! Pure decision logic for programming a cinema playback console.
//! Nothing in this crate performs I/O; every operation is a deterministic
//! function of its inputs.
//!
//! ## Components
//!
//! - [`FormatKind::detect`] - aspect-ratio format from a content descriptor
//! - [`extract_title`] - human title from a content descriptor
//! - [`block_name`] - canonical block label
//! - [`select_candidate`] - tiered content selection
//! - [`plan_week`] - seven-day screening plan
//! - [`SlotOffset`] - sub-hour click position inside an hour cell

pub mod block;
pub mod calendar;
pub mod error;
pub mod format;
pub mod planner;
pub mod selector;
pub mod slot;
pub mod title;

pub use block::{block_name, matches_format};
pub use calendar::{
    canonical_weekday, default_anchor, format_date, locate_anchor_column, parse_anchor_date,
    week_shift, window_end, DayColumn,
};
pub use error::CoreError;
pub use format::FormatKind;
pub use planner::{
    plan_week, ClockTime, CopyInstruction, PlanBounds, Realization, ShowKind, ShowPlacement,
    TimePattern, WeekPlan,
};
pub use selector::{select_candidate, ContentDescriptor, Selection, SelectionReason, SelectionTier};
pub use slot::SlotOffset;
pub use title::extract_title;
