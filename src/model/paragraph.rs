//! Paragraph type.

use super::Run;
use crate::segment::PlaceholderSpan;
use serde::{Deserialize, Serialize};

/// A body paragraph with its runs and sentence anchors.
///
/// Empty and whitespace-only paragraphs are never emitted; a `Paragraph`
/// always carries non-empty trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Heading level 1-6, when the paragraph is a heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    /// Paragraph style name (`pStyle` value), when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,

    /// Plain text derived from the runs, trimmed.
    pub text: String,

    /// Ordered runs making up the paragraph.
    pub runs: Vec<Run>,

    /// Sentence spans partitioning `text` exactly.
    pub placeholder_spans: Vec<PlaceholderSpan>,
}

impl Paragraph {
    /// Check if this paragraph is a heading.
    pub fn is_heading(&self) -> bool {
        self.level.is_some()
    }

    /// Reassemble the text from the placeholder spans.
    ///
    /// Always equals [`Paragraph::text`]; exists for invariant checks.
    pub fn span_text(&self) -> String {
        self.placeholder_spans
            .iter()
            .map(|s| s.text.as_str())
            .collect()
    }
}
