//! Escape filtering: resolve backslash escapes over the occurrence
//! sequence.
//!
//! An Escape occurrence never survives this stage. When the next occurrence
//! starts at the very next character, that occurrence was escaped and is
//! removed as well; otherwise the escape alone disappears and the next
//! occurrence is re-examined on its own.

use crate::catalog::TagKind;
use crate::parser::DelimiterOccurrence;

/// Remove escape semantics from a scanned occurrence sequence.
pub fn filter_escapes(occurrences: Vec<DelimiterOccurrence>) -> Vec<DelimiterOccurrence> {
    let mut filtered = Vec::with_capacity(occurrences.len());
    let mut i = 0;

    while i < occurrences.len() {
        let occ = occurrences[i];
        if occ.kind != TagKind::Escape {
            filtered.push(occ);
            i += 1;
            continue;
        }

        match occurrences.get(i + 1) {
            // The escaped character is the one right after the backslash:
            // both the escape and the escaped marker disappear.
            Some(next) if next.start == occ.start + 1 => {
                log::debug!("Escaped {:?} marker at char {}", next.kind, next.start);
                i += 2;
            }
            // Lone escape: drop it and re-examine whatever follows.
            _ => i += 1,
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagCatalog;
    use crate::parser::scanner;

    fn scan_and_filter(text: &str) -> Vec<DelimiterOccurrence> {
        filter_escapes(scanner::scan(&TagCatalog::default(), text))
    }

    #[test]
    fn test_escape_removes_adjacent_marker() {
        let filtered = scan_and_filter("a\\*b");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_escape_without_adjacent_marker() {
        // The backslash escapes a plain character; the later marker stays.
        let filtered = scan_and_filter("a\\b *c");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, TagKind::Italic);
    }

    #[test]
    fn test_trailing_escape_is_dropped() {
        let filtered = scan_and_filter("text\\");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_escaped_escape() {
        // `\\` escapes the second backslash; a following marker survives.
        let filtered = scan_and_filter("\\\\*a");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, TagKind::Italic);
        assert_eq!(filtered[0].start, 2);
    }

    #[test]
    fn test_non_adjacent_escape_chain() {
        // The first escape consumes nothing; the second escapes the marker.
        let filtered = scan_and_filter("\\a\\*b");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_non_escape_occurrences_pass_through() {
        let occurrences = scanner::scan(&TagCatalog::default(), "*a* **b**");
        let filtered = filter_escapes(occurrences.clone());
        assert_eq!(filtered, occurrences);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        for text in ["a\\*b", "\\a\\*b", "\\\\*a", "text\\", "*a* \\_b_"] {
            let once = scan_and_filter(text);
            let twice = filter_escapes(once.clone());
            assert_eq!(twice, once, "second pass changed output for {text:?}");
            assert!(once.iter().all(|o| o.kind != TagKind::Escape));
        }
    }
}
