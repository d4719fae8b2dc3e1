//! The inline tag-pair parsing pipeline.
//!
//! Parsing runs in three stages over the input text:
//! 1. The scanner locates delimiter occurrences (longest marker match wins).
//! 2. The escape filter resolves backslash escapes.
//! 3. The matcher pairs openers with closers on a stack.
//!
//! Each stage consumes its input once, start to finish. The pipeline never
//! fails: malformed markup is resolved by policy (ignore, abandon, or
//! auto-close), not by error.

use crate::catalog::{TagCatalog, TagKind};

mod escapes;
mod matcher;
mod scanner;

/// One located marker instance in the source text, with adjacency
/// classification derived at scan time.
///
/// `start` and `end` are inclusive character indices into the input.
/// Synthetic occurrences manufactured during line-boundary auto-close have
/// `start == end` at the line feed's position and carry no span of their
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelimiterOccurrence {
    pub kind: TagKind,
    pub start: usize,
    pub end: usize,
    /// Whitespace appeared somewhere since the previous occurrence
    /// (or since the start of the text).
    pub preceded_by_whitespace: bool,
    /// A digit sits immediately on both sides of the marker.
    pub inside_number: bool,
    /// A letter or non-backslash punctuation sits immediately before the
    /// marker and a letter immediately after it.
    pub inside_word: bool,
    /// The left neighbor is whitespace or non-alphanumeric and the right
    /// neighbor is a letter.
    pub is_opening_candidate: bool,
    /// The right neighbor is whitespace or non-alphanumeric and the left
    /// neighbor is a letter.
    pub is_closing_candidate: bool,
}

/// One renderable inline span: an opening occurrence matched with its
/// closing occurrence. Produced only by the pair matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedPair {
    pub opening: DelimiterOccurrence,
    pub closing: DelimiterOccurrence,
}

/// Pairs inline markup delimiters in a text against a tag catalog.
///
/// The catalog is read-only for the parser's lifetime, so one parser can
/// serve any number of texts, including from multiple threads at once.
pub struct TagPairParser {
    catalog: TagCatalog,
}

impl TagPairParser {
    pub fn new(catalog: TagCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Run the full pipeline over `text`.
    ///
    /// Returns matched pairs in pop order (innermost close first), each
    /// referencing character positions in `text`. Text outside the returned
    /// spans is the caller's to handle verbatim.
    pub fn parse(&self, text: &str) -> Vec<MatchedPair> {
        #[cfg(debug_assertions)]
        crate::init_logger();

        let occurrences = scanner::scan(&self.catalog, text);
        log::debug!("Scanned {} delimiter occurrences", occurrences.len());

        let filtered = escapes::filter_escapes(occurrences);
        let pairs = matcher::match_pairs(&self.catalog, filtered);
        log::debug!("Matched {} tag pairs", pairs.len());

        pairs
    }
}
