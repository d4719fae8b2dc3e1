//! Inline markup delimiter pairing for markdown-style text.
//!
//! `filigree` locates emphasis markers, escapes, and line breaks in raw
//! text, resolves backslash escapes, and pairs opening markers with closing
//! markers into abstract spans. It deliberately stops there: turning the
//! matched spans into output markup, and everything block-level, belongs to
//! the caller.
//!
//! The marker set is supplied as a [`TagCatalog`] — an ordered list of
//! definitions, each naming a markup kind and its opening/closing marker
//! text. [`TagCatalog::default`] covers the conventional markdown markers.
//!
//! # Examples
//!
//! ```rust
//! use filigree::parse_tag_pairs;
//!
//! let pairs = parse_tag_pairs("some *emphasized* text");
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].opening.start, 5);
//! assert_eq!(pairs[0].closing.start, 16);
//! ```

pub mod catalog;
pub mod parser;

pub use catalog::CatalogBuilder;
pub use catalog::TagCatalog;
pub use catalog::TagDefinition;
pub use catalog::TagKind;
pub use parser::DelimiterOccurrence;
pub use parser::MatchedPair;
pub use parser::TagPairParser;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses `text` with the default markdown catalog.
///
/// Returns matched pairs in pop order (innermost close first), each
/// referencing character positions in `text`.
///
/// # Arguments
///
/// * `text` - The text to scan for inline markup delimiters
pub fn parse_tag_pairs(text: &str) -> Vec<MatchedPair> {
    TagPairParser::new(TagCatalog::default()).parse(text)
}
