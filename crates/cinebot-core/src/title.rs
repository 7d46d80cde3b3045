//! Film title extraction from content descriptors.
//!
//! Distribution labels pack the title together with technical codes, e.g.
//! `Mercy_TLR-1-IMMINA_S_QFC-QFC-CCAP_CA_51_4K_MGM_20251001_DLX_SMPTE_OV`.
//! The title is almost always the leading alphanumeric run; the remaining
//! steps only matter for short or oddly prefixed labels.

use once_cell::sync::Lazy;
use regex::Regex;

/// Title returned when nothing usable remains.
pub const FALLBACK_TITLE: &str = "Film";

static LEADING_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+").expect("leading run regex"));

/// Technical-code tails, applied in order. Each match truncates the label.
static CODE_TAILS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)[_-]TLR.*$",    // trailer
        r"(?i)[_-]FTR.*$",    // feature
        r"(?i)[_-]TSR.*$",    // teaser
        r"(?i)[_-]QFC.*$",
        r"(?i)[_-]DCP.*$",
        r"(?i)[_-]\d+[_-].*$",
        r"(?i)[_-][SF][_-].*$",
        r"(?i)[_-]SMPTE.*$",
        r"(?i)[_-]CCAP.*$",
        r"(?i)[_-]OCAP.*$",
        r"(?i)[_-]OV$",
        r"(?i)[_-]\d{8}.*$",
        r"(?i)[_-]\d+K.*$",   // resolution
    ]
    .iter()
    .map(|p| Regex::new(p).expect("code tail regex"))
    .collect()
});

/// Derive a human title from a raw content descriptor.
pub fn extract_title(text: &str) -> String {
    let line = text.trim().lines().next().unwrap_or("");

    if let Some(run) = LEADING_RUN.find(line) {
        if run.as_str().len() >= 3 {
            return title_case(run.as_str());
        }
    }

    let stripped = strip_code_tails(line);

    if let Some(segment) = stripped.split(['_', '-']).find(|s| !s.is_empty()) {
        if segment.chars().count() >= 2 {
            return title_case(segment);
        }
    }

    let spaced = stripped.replace(['_', '-'], " ");
    match spaced.split_whitespace().next() {
        Some(word) => title_case(word),
        None => FALLBACK_TITLE.to_string(),
    }
}

fn strip_code_tails(line: &str) -> String {
    let mut name = line.to_string();
    for re in CODE_TAILS.iter() {
        if let Some(m) = re.find(&name) {
            name.truncate(m.start());
        }
    }
    name
}

/// Upper-case letters that start a word, lower-case the rest.
///
/// Any non-letter starts a new word, so `2FAST` becomes `2Fast`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
