//! Delimiter scanning: locate marker occurrences in the input text.
//!
//! Rules:
//! - Positions are character indices; the scan walks left to right.
//! - At each position the longest matching marker wins. Opening markers are
//!   preferred over closing markers, earlier catalog definitions over later
//!   ones.
//! - Occurrences never overlap; scanning resumes after each match.
//! - Neighbor classification uses boundary defaults: the left edge of the
//!   text behaves like whitespace, the right edge like a non-letter.

use crate::catalog::{TagCatalog, TagKind};
use crate::parser::DelimiterOccurrence;

/// Scan `text` and return its delimiter occurrences in position order.
pub fn scan(catalog: &TagCatalog, text: &str) -> Vec<DelimiterOccurrence> {
    let chars: Vec<char> = text.chars().collect();
    let mut occurrences = Vec::new();
    // The start of the text counts as a whitespace boundary.
    let mut seen_whitespace = true;
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos].is_whitespace() {
            seen_whitespace = true;
        }

        if let Some((kind, end)) = longest_match_at(catalog, &chars, pos) {
            log::trace!("Matched {:?} marker at chars {}..={}", kind, pos, end);
            occurrences.push(classify(&chars, kind, pos, end, seen_whitespace));
            seen_whitespace = false;
            pos = end + 1;
        } else {
            pos += 1;
        }
    }

    occurrences
}

/// Greedy longest-prefix match against the catalog at `start`.
///
/// Extends the probe one character at a time while any marker still has it
/// as a prefix, remembering the last definition that matched the probe
/// exactly. Returns the winning kind and the inclusive end index.
fn longest_match_at(
    catalog: &TagCatalog,
    chars: &[char],
    start: usize,
) -> Option<(TagKind, usize)> {
    let mut best = None;
    let mut len = 1;

    while start + len <= chars.len() {
        let probe = &chars[start..start + len];
        let mut extendable = false;
        let mut exact_opening = None;
        let mut exact_closing = None;

        for def in catalog.definitions() {
            if let Some(marker) = def.opening_marker()
                && marker_starts_with(marker, probe)
            {
                if marker.chars().count() == probe.len() {
                    exact_opening.get_or_insert(def.kind());
                } else {
                    extendable = true;
                }
            }
            if let Some(marker) = def.closing_marker()
                && marker_starts_with(marker, probe)
            {
                if marker.chars().count() == probe.len() {
                    exact_closing.get_or_insert(def.kind());
                } else {
                    extendable = true;
                }
            }
        }

        // Opening matches take precedence over closing matches.
        if let Some(kind) = exact_opening.or(exact_closing) {
            best = Some((kind, start + len - 1));
        }
        if !extendable {
            break;
        }
        len += 1;
    }

    best
}

/// Character-wise prefix test of `probe` against `marker`.
fn marker_starts_with(marker: &str, probe: &[char]) -> bool {
    let mut marker_chars = marker.chars();
    probe.iter().all(|&c| marker_chars.next() == Some(c))
}

/// Derive the five adjacency facts from the characters immediately outside
/// the marker span `[start, end]`.
fn classify(
    chars: &[char],
    kind: TagKind,
    start: usize,
    end: usize,
    preceded_by_whitespace: bool,
) -> DelimiterOccurrence {
    let before = start.checked_sub(1).map(|i| chars[i]);
    let after = chars.get(end + 1).copied();

    let letter_before = before.is_some_and(char::is_alphabetic);
    let letter_after = after.is_some_and(char::is_alphabetic);

    DelimiterOccurrence {
        kind,
        start,
        end,
        preceded_by_whitespace,
        inside_number: before.is_some_and(char::is_numeric) && after.is_some_and(char::is_numeric),
        inside_word: before
            .is_some_and(|c| c.is_alphabetic() || (c.is_ascii_punctuation() && c != '\\'))
            && letter_after,
        is_opening_candidate: before.is_none_or(|c| !c.is_alphanumeric()) && letter_after,
        is_closing_candidate: after.is_none_or(|c| !c.is_alphanumeric()) && letter_before,
    }
}
