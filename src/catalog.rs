//! Tag definitions and the ordered catalog that drives delimiter scanning.
//!
//! A catalog is an ordered list of [`TagDefinition`]s. Order matters: when
//! two definitions match the same text, the earlier one wins. The catalog is
//! read-only once built and can be shared between concurrent parses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The markup kind a tag definition describes.
///
/// `Escape` and `LineFeed` carry special meaning in the pipeline: `Escape`
/// feeds the escape filter, and `LineFeed` triggers auto-closing of open
/// spans at line boundaries. Everything else is ordinary paired markup;
/// `Custom` leaves room for caller-defined kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagKind {
    Escape,
    LineFeed,
    Bold,
    Italic,
    Strikeout,
    Custom(u16),
}

/// One catalog entry: a markup kind plus its textual markers.
///
/// A definition without a closing marker is self-closing (escapes, line
/// feeds); it never waits on the matcher stack for a close.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagDefinition {
    kind: TagKind,
    opening_marker: Option<String>,
    closing_marker: Option<String>,
}

impl TagDefinition {
    /// A definition whose opening and closing markers are the same text,
    /// like `**` for bold.
    pub fn symmetric(kind: TagKind, marker: &str) -> Self {
        Self {
            kind,
            opening_marker: Some(marker.to_string()),
            closing_marker: Some(marker.to_string()),
        }
    }

    /// A definition with distinct opening and closing markers.
    pub fn asymmetric(kind: TagKind, opening: &str, closing: &str) -> Self {
        Self {
            kind,
            opening_marker: Some(opening.to_string()),
            closing_marker: Some(closing.to_string()),
        }
    }

    /// A self-closing definition: an opening marker and no closing marker.
    pub fn self_closing(kind: TagKind, marker: &str) -> Self {
        Self {
            kind,
            opening_marker: Some(marker.to_string()),
            closing_marker: None,
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn opening_marker(&self) -> Option<&str> {
        self.opening_marker.as_deref()
    }

    pub fn closing_marker(&self) -> Option<&str> {
        self.closing_marker.as_deref()
    }
}

/// An ordered set of tag definitions.
///
/// Iteration order is the tie-break for marker ambiguity: the first
/// definition whose marker matches the scanned text wins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagCatalog {
    definitions: Vec<TagDefinition>,
}

impl TagCatalog {
    pub fn new(definitions: Vec<TagDefinition>) -> Self {
        Self { definitions }
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn definitions(&self) -> &[TagDefinition] {
        &self.definitions
    }

    /// Whether any definition of `kind` carries a closing marker.
    /// Kinds without one are self-closing and never get a synthetic close.
    pub fn has_closing_marker(&self, kind: TagKind) -> bool {
        self.definitions
            .iter()
            .any(|def| def.kind == kind && def.closing_marker.is_some())
    }
}

impl Default for TagCatalog {
    /// The conventional markdown marker set: backslash escapes, line feeds,
    /// bold (`**`/`__`), italic (`*`/`_`), and strikeout (`~~`).
    fn default() -> Self {
        Self::new(vec![
            TagDefinition::self_closing(TagKind::Escape, "\\"),
            TagDefinition::self_closing(TagKind::LineFeed, "\n"),
            TagDefinition::symmetric(TagKind::Bold, "**"),
            TagDefinition::symmetric(TagKind::Bold, "__"),
            TagDefinition::symmetric(TagKind::Italic, "*"),
            TagDefinition::symmetric(TagKind::Italic, "_"),
            TagDefinition::symmetric(TagKind::Strikeout, "~~"),
        ])
    }
}

#[derive(Default, Clone)]
pub struct CatalogBuilder {
    definitions: Vec<TagDefinition>,
}

impl CatalogBuilder {
    pub fn symmetric(mut self, kind: TagKind, marker: &str) -> Self {
        self.definitions.push(TagDefinition::symmetric(kind, marker));
        self
    }

    pub fn asymmetric(mut self, kind: TagKind, opening: &str, closing: &str) -> Self {
        self.definitions
            .push(TagDefinition::asymmetric(kind, opening, closing));
        self
    }

    pub fn self_closing(mut self, kind: TagKind, marker: &str) -> Self {
        self.definitions
            .push(TagDefinition::self_closing(kind, marker));
        self
    }

    pub fn definition(mut self, definition: TagDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn build(self) -> TagCatalog {
        TagCatalog::new(self.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_escape_and_linefeed() {
        let catalog = TagCatalog::default();
        assert!(
            catalog
                .definitions()
                .iter()
                .any(|d| d.kind() == TagKind::Escape)
        );
        assert!(
            catalog
                .definitions()
                .iter()
                .any(|d| d.kind() == TagKind::LineFeed)
        );
    }

    #[test]
    fn test_self_closing_kinds_have_no_closing_marker() {
        let catalog = TagCatalog::default();
        assert!(!catalog.has_closing_marker(TagKind::Escape));
        assert!(!catalog.has_closing_marker(TagKind::LineFeed));
        assert!(catalog.has_closing_marker(TagKind::Bold));
        assert!(catalog.has_closing_marker(TagKind::Italic));
    }

    #[test]
    fn test_builder_preserves_order() {
        let catalog = TagCatalog::builder()
            .symmetric(TagKind::Bold, "**")
            .symmetric(TagKind::Italic, "*")
            .build();

        assert_eq!(catalog.definitions().len(), 2);
        assert_eq!(catalog.definitions()[0].kind(), TagKind::Bold);
        assert_eq!(catalog.definitions()[1].kind(), TagKind::Italic);
    }

    #[test]
    fn test_asymmetric_markers() {
        let def = TagDefinition::asymmetric(TagKind::Custom(1), "<b>", "</b>");
        assert_eq!(def.opening_marker(), Some("<b>"));
        assert_eq!(def.closing_marker(), Some("</b>"));
    }

    #[test]
    fn test_shared_marker_text_across_kinds() {
        // Two kinds may share marker text; catalog order decides ties.
        let catalog = TagCatalog::builder()
            .symmetric(TagKind::Custom(1), "*")
            .symmetric(TagKind::Custom(2), "*")
            .build();

        assert!(catalog.has_closing_marker(TagKind::Custom(1)));
        assert!(catalog.has_closing_marker(TagKind::Custom(2)));
    }
}
