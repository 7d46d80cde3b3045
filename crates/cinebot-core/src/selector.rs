//! Content candidate selection.
//!
//! The content listing is supplied newest-first. Candidates are ranked by six
//! tiers of decreasing specificity; within a tier the first (newest) match
//! wins, so recency breaks ties.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::format::FormatKind;

const VOLUME_MARKERS: [&str; 8] = [
    "_51_", "-51-", "_51-", "-51_", "_71_", "-71-", "_71-", "-71_",
];
const FR_MARKERS: [&str; 4] = ["_FR", "-FR", "FR-", "_FR_"];

/// Raw text label of one ingestible item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentDescriptor {
    text: String,
    upper: String,
}

impl ContentDescriptor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let upper = text.to_uppercase();
        Self { text, upper }
    }

    /// One descriptor per non-blank line of a content listing.
    pub fn parse_listing(text: &str) -> Vec<Self> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::new)
            .collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_qfc(&self) -> bool {
        self.upper.contains("QFC")
    }

    pub fn is_fr(&self) -> bool {
        FR_MARKERS.iter().any(|m| self.upper.contains(m))
    }

    /// Closed captions present without open captions.
    pub fn has_ccap_not_ocap(&self) -> bool {
        self.upper.contains("CCAP") && !self.upper.contains("OCAP")
    }

    /// 5.1 or 7.1 audio marker between separators.
    pub fn has_volume_marker(&self) -> bool {
        VOLUME_MARKERS.iter().any(|m| self.upper.contains(m))
    }

    /// The best tier this descriptor satisfies, if any.
    pub fn tier(&self) -> Option<SelectionTier> {
        SelectionTier::ALL.into_iter().find(|t| t.accepts(self))
    }
}

impl From<&str> for ContentDescriptor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ContentDescriptor {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<ContentDescriptor> for String {
    fn from(item: ContentDescriptor) -> Self {
        item.text
    }
}

/// Match policy, ordered from most to least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SelectionTier {
    QfcCaptionedSurround = 1,
    FrCaptionedSurround = 2,
    QfcSurround = 3,
    FrSurround = 4,
    Qfc = 5,
    Fr = 6,
}

impl SelectionTier {
    pub const ALL: [SelectionTier; 6] = [
        SelectionTier::QfcCaptionedSurround,
        SelectionTier::FrCaptionedSurround,
        SelectionTier::QfcSurround,
        SelectionTier::FrSurround,
        SelectionTier::Qfc,
        SelectionTier::Fr,
    ];

    /// Tier rank, 1 being the highest priority.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn accepts(&self, item: &ContentDescriptor) -> bool {
        match self {
            SelectionTier::QfcCaptionedSurround => {
                item.is_qfc() && item.has_ccap_not_ocap() && item.has_volume_marker()
            }
            SelectionTier::FrCaptionedSurround => {
                item.is_fr() && item.has_ccap_not_ocap() && item.has_volume_marker()
            }
            SelectionTier::QfcSurround => item.is_qfc() && item.has_volume_marker(),
            SelectionTier::FrSurround => item.is_fr() && item.has_volume_marker(),
            SelectionTier::Qfc => item.is_qfc(),
            SelectionTier::Fr => item.is_fr(),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SelectionTier::QfcCaptionedSurround => "QFC + CCAP + 51/71",
            SelectionTier::FrCaptionedSurround => "FR + CCAP + 51/71",
            SelectionTier::QfcSurround => "QFC + 51/71",
            SelectionTier::FrSurround => "FR + 51/71",
            SelectionTier::Qfc => "QFC",
            SelectionTier::Fr => "FR",
        }
    }
}

impl fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {} ({})", self.rank(), self.describe())
    }
}

/// Why a descriptor was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionReason {
    ExplicitTitle { title: String },
    Tier { tier: SelectionTier },
}

/// Outcome of candidate selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub descriptor: ContentDescriptor,
    /// Position in the input listing.
    pub index: usize,
    pub reason: SelectionReason,
    pub format: FormatKind,
}

/// Pick the content item to ingest.
///
/// With `target_title`, the first descriptor containing it is chosen;
/// otherwise the tiered policy applies.
pub fn select_candidate(
    items: &[ContentDescriptor],
    target_title: Option<&str>,
) -> Result<Selection, CoreError> {
    if let Some(title) = target_title {
        return items
            .iter()
            .enumerate()
            .find(|(_, item)| item.text().contains(title))
            .map(|(index, item)| Selection {
                descriptor: item.clone(),
                index,
                reason: SelectionReason::ExplicitTitle {
                    title: title.to_string(),
                },
                format: FormatKind::detect(item.text()),
            })
            .ok_or_else(|| {
                CoreError::NoCandidate(format!(
                    "no item contains '{}' among {} entries",
                    title,
                    items.len()
                ))
            });
    }

    for tier in SelectionTier::ALL {
        if let Some((index, item)) = items.iter().enumerate().find(|(_, item)| tier.accepts(item)) {
            return Ok(Selection {
                descriptor: item.clone(),
                index,
                reason: SelectionReason::Tier { tier },
                format: FormatKind::detect(item.text()),
            });
        }
    }

    Err(CoreError::NoCandidate(format!(
        "no QFC or FR item among {} entries",
        items.len()
    )))
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
