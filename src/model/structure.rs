//! Document-level structural projections.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// The full structural model extracted from an OOXML package.
///
/// Built once per call, immutable afterwards; every map that feeds it
/// (relationships, numbering, footnotes) is call-scoped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStructure {
    /// Headings in document order.
    pub outline: Vec<OutlineEntry>,

    /// List items in document order.
    pub lists: Vec<ListItem>,

    /// Tables in document order.
    pub tables: Vec<Table>,

    /// Hyperlinks (including footnote pseudo-links) with resolved targets.
    pub links: Vec<Hyperlink>,

    /// Footnotes keyed by their package id.
    pub footnotes: Vec<Footnote>,

    /// Embedded images resolved through the relationship map.
    pub images: Vec<ImageRef>,

    /// Non-empty body paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentStructure {
    /// Check whether anything at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
            && self.lists.is_empty()
            && self.tables.is_empty()
            && self.links.is_empty()
            && self.footnotes.is_empty()
            && self.images.is_empty()
            && self.paragraphs.is_empty()
    }
}

/// A heading in the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level, 1-6.
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Raw body paragraph index, counting dropped empty paragraphs too.
    pub index: usize,
}

/// A list item resolved through the numbering definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Indentation level (`ilvl`).
    pub level: u32,

    /// Whether the level's number format renders an ordered marker.
    pub ordered: bool,

    /// Item text.
    pub text: String,

    /// The paragraph's `numId`.
    pub num_id: String,
}

/// A hyperlink with its resolved target.
///
/// Links whose relationship id does not resolve are omitted entirely, never
/// emitted with a dangling href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Link text (falls back to the enclosing paragraph text).
    pub text: String,

    /// Resolved target.
    pub href: String,
}

/// A footnote body, extracted once per package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    /// Footnote id as declared in the package.
    pub id: i64,

    /// Newline-joined footnote paragraph text.
    pub text: String,
}

/// An embedded image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Relationship id (`blip@embed`).
    pub rid: String,

    /// Target path inside the package.
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_structure() {
        assert!(DocumentStructure::default().is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let structure = DocumentStructure {
            lists: vec![ListItem {
                level: 0,
                ordered: true,
                text: "item".into(),
                num_id: "1".into(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&structure).unwrap();
        assert_eq!(json["lists"][0]["numId"], "1");
        assert!(json["paragraphs"].as_array().unwrap().is_empty());
    }
}
