//! Aspect-ratio format detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Projection format of a feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// 2.39:1 anamorphic.
    #[default]
    Scope,
    /// 1.85:1.
    Flat,
}

const SCOPE_MARKERS: [&str; 3] = ["SCOPE", "_S_", "-S-"];
const FLAT_MARKERS: [&str; 3] = ["FLAT", "_F_", "-F-"];

const SCOPE_BLOCK_MARKERS: [&str; 4] = [" - s - ", "- s -", " -s- ", "-s-"];
const FLAT_BLOCK_MARKERS: [&str; 4] = [" - f - ", "- f -", " -f- ", "-f-"];

impl FormatKind {
    /// Detect the format of a content descriptor.
    ///
    /// Scope markers win over flat markers; text with neither is scope.
    pub fn detect(text: &str) -> Self {
        let upper = text.to_uppercase();
        if SCOPE_MARKERS.iter().any(|m| upper.contains(m)) {
            FormatKind::Scope
        } else if FLAT_MARKERS.iter().any(|m| upper.contains(m)) {
            FormatKind::Flat
        } else {
            FormatKind::Scope
        }
    }

    /// Single-letter code used in block labels.
    pub fn letter(&self) -> char {
        match self {
            FormatKind::Scope => 'S',
            FormatKind::Flat => 'F',
        }
    }

    /// Projection ratio label.
    pub fn ratio(&self) -> &'static str {
        match self {
            FormatKind::Scope => "2.39:1",
            FormatKind::Flat => "1.85:1",
        }
    }

    /// Lower-case markers identifying a block of this format.
    pub fn block_markers(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Scope => &SCOPE_BLOCK_MARKERS,
            FormatKind::Flat => &FLAT_BLOCK_MARKERS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Scope => "scope",
            FormatKind::Flat => "flat",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
