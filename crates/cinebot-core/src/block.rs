//! Block naming.

use crate::format::FormatKind;

/// Compose the canonical block label: `"{room} - {S|F} - {title}"`.
pub fn block_name(room: &str, format: FormatKind, title: &str) -> String {
    format!("{} - {} - {}", room, format.letter(), title)
}

/// Whether an existing block label carries the marker of `format`.
///
/// Only the first line of the label is inspected.
pub fn matches_format(label: &str, format: FormatKind) -> bool {
    let first_line = label.lines().next().unwrap_or("").to_lowercase();
    format
        .block_markers()
        .iter()
        .any(|marker| first_line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_name_flat() {
        assert_eq!(
            block_name("Brunet", FormatKind::Flat, "Norvege"),
            "Brunet - F - Norvege"
        );
    }

    #[test]
    fn test_block_name_scope() {
        assert_eq!(
            block_name("Selectotel", FormatKind::Scope, "Mercy"),
            "Selectotel - S - Mercy"
        );
    }

    #[test]
    fn test_generated_name_matches_its_own_format() {
        let name = block_name("Brunet", FormatKind::Scope, "Mercy");
        assert!(matches_format(&name, FormatKind::Scope));
        assert!(!matches_format(&name, FormatKind::Flat));
    }

    #[test]
    fn test_matches_format_compact_marker() {
        assert!(matches_format("Brunet-f-Ancien film", FormatKind::Flat));
        assert!(matches_format("BRUNET -S- OLD", FormatKind::Scope));
    }

    #[test]
    fn test_matches_format_ignores_later_lines() {
        let label = "Brunet matinee\nBrunet - F - Norvege";
        assert!(!matches_format(label, FormatKind::Flat));
    }

    #[test]
    fn test_matches_format_requires_separators() {
        assert!(!matches_format("Festival Selection", FormatKind::Scope));
        assert!(!matches_format("", FormatKind::Flat));
    }
}
