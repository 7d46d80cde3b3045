//! Calendar helpers: anchor dates, weekday labels, displayed weeks.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Operator-facing date format.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Weekday label prefixes, French and English.
const WEEKDAY_PREFIXES: [(&str, Weekday); 14] = [
    ("lun", Weekday::Mon),
    ("mar", Weekday::Tue),
    ("mer", Weekday::Wed),
    ("jeu", Weekday::Thu),
    ("ven", Weekday::Fri),
    ("sam", Weekday::Sat),
    ("dim", Weekday::Sun),
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

/// Parse a `DD/MM/YYYY` anchor date.
pub fn parse_anchor_date(text: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| CoreError::DateParse {
        input: text.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The next programming Friday as seen from `now`.
///
/// On a Friday morning that is today; from Friday noon on it is the
/// following week.
pub fn default_anchor(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    let mut days = (7 + Weekday::Fri.num_days_from_monday()
        - today.weekday().num_days_from_monday())
        % 7;
    if days == 0 && now.hour() >= 12 {
        days = 7;
    }
    today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(today)
}

/// Last day of the 7-day window starting at `anchor`.
pub fn window_end(anchor: NaiveDate) -> NaiveDate {
    anchor
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Map a displayed weekday label (`Vendredi`, `ven.`, `Friday`, ...) to a
/// weekday.
pub fn canonical_weekday(label: &str) -> Option<Weekday> {
    let label = label.trim().to_lowercase();
    WEEKDAY_PREFIXES
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix))
        .map(|(_, day)| *day)
}

/// One column header of a displayed week, as read from the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    pub label: String,
    /// Date text in `DD/MM/YYYY`.
    pub date: String,
}

impl DayColumn {
    pub fn new(label: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            date: date.into(),
        }
    }
}

/// Index of the column holding the anchor day.
///
/// The first column with the anchor's weekday dated on or after the anchor
/// wins. Columns whose date cannot be read are skipped.
pub fn locate_anchor_column(columns: &[DayColumn], anchor: NaiveDate) -> Result<usize, CoreError> {
    columns
        .iter()
        .position(|column| {
            canonical_weekday(&column.label) == Some(anchor.weekday())
                && parse_anchor_date(&column.date).is_ok_and(|d| d >= anchor)
        })
        .ok_or(CoreError::AnchorDayNotFound(anchor))
}

/// Whole weeks to page from the displayed week to the one holding `target`.
///
/// Positive values page forward.
pub fn week_shift(displayed_first: NaiveDate, target: NaiveDate) -> i64 {
    (target - displayed_first).num_days().div_euclid(7)
}
