//! Core errors.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No content candidate: {0}")]
    NoCandidate(String),

    #[error("Invalid anchor date '{input}': expected DD/MM/YYYY")]
    DateParse { input: String },

    #[error("Anchor day {0} not found in the displayed week")]
    AnchorDayNotFound(NaiveDate),
}
