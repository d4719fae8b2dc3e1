//! Stack-based pairing of delimiter occurrences.
//!
//! Openers wait on a LIFO stack. Each new occurrence is classified against
//! the stack top and either closes it, abandons it, is pushed as a new
//! opener, or is ignored. Line feeds close everything still open,
//! synthesizing zero-width closers so no span crosses a line boundary.
//! Whatever remains open at end of input is discarded unmatched.

use crate::catalog::{TagCatalog, TagKind};
use crate::parser::{DelimiterOccurrence, MatchedPair};

/// Consume the filtered occurrence sequence once, in order, and emit
/// matched pairs in pop order (innermost close first).
pub fn match_pairs(
    catalog: &TagCatalog,
    occurrences: Vec<DelimiterOccurrence>,
) -> Vec<MatchedPair> {
    let mut stack: Vec<DelimiterOccurrence> = Vec::new();
    let mut pairs = Vec::new();

    for cur in occurrences {
        match stack.last().copied() {
            Some(top) if top.kind == cur.kind => {
                if !cur.is_closing_candidate && !cur.inside_word {
                    // Not shaped like a closer: leave the opener waiting.
                } else if top.inside_word && cur.preceded_by_whitespace {
                    // A word-internal opener cannot close across a
                    // whitespace boundary.
                    log::debug!(
                        "Abandoning word-internal {:?} opener at char {}",
                        top.kind,
                        top.start
                    );
                    stack.pop();
                } else {
                    stack.pop();
                    if cur.kind == TagKind::Bold
                        && stack.last().is_some_and(|t| t.kind == TagKind::Italic)
                    {
                        // A bold close may not resolve directly under an
                        // unclosed italic opener; the pair is discarded.
                        log::debug!("Suppressing bold pair under open italic at char {}", cur.start);
                    } else {
                        pairs.push(MatchedPair {
                            opening: top,
                            closing: cur,
                        });
                    }
                }
            }
            _ if cur.kind == TagKind::LineFeed => {
                // No span survives a line boundary.
                while let Some(top) = stack.pop() {
                    if catalog.has_closing_marker(top.kind) {
                        pairs.push(MatchedPair {
                            opening: top,
                            closing: synthetic_close(top.kind, cur.start),
                        });
                    }
                }
            }
            Some(top) if cur.is_closing_candidate => {
                // A closing-shaped token of a different kind abandons the
                // waiting opener.
                log::debug!(
                    "Abandoning {:?} opener at char {} on foreign closer",
                    top.kind,
                    top.start
                );
                stack.pop();
            }
            _ => {
                if cur.is_opening_candidate || cur.inside_word {
                    stack.push(cur);
                }
            }
        }
    }

    pairs
}

/// Zero-width closing occurrence manufactured during line-boundary
/// auto-close, positioned at the line feed's start index.
fn synthetic_close(kind: TagKind, at: usize) -> DelimiterOccurrence {
    DelimiterOccurrence {
        kind,
        start: at,
        end: at,
        preceded_by_whitespace: false,
        inside_number: false,
        inside_word: false,
        is_opening_candidate: false,
        is_closing_candidate: true,
    }
}
