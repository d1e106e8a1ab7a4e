//! Format handlers and their registry.
//!
//! Each supported [`SourceFormat`] has one handler that turns raw bytes into
//! an [`Extraction`]. The registry dispatches on the classified format and is
//! the seam for swapping or adding handlers.

mod docx;
mod pdf;
mod text;

pub use docx::DocxHandler;
pub use pdf::PdfHandler;
pub use text::TextHandler;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classify::SourceFormat;
use crate::error::{Error, Result};
use crate::model::DocumentStructure;
use crate::resolve::Deadline;

/// The result of extracting one source.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Plain-text rendition, empty when nothing could be extracted.
    pub text: String,
    /// HTML preview, empty (and omitted on the wire) for formats that have
    /// none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
    /// Media type of the source, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Structured facets, present only for structured formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured: Option<DocumentStructure>,
}

impl Extraction {
    /// The empty extraction every failure collapses into.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.html.is_empty() && self.structured.is_none()
    }
}

/// A format-specific byte-to-extraction conversion.
pub trait FormatHandler: Send + Sync {
    /// The format this handler accepts.
    fn format(&self) -> SourceFormat;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Extract from raw bytes. `content_type` is the resolver's hint and
    /// `deadline` bounds any expensive parsing.
    fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        deadline: &Deadline,
    ) -> Result<Extraction>;
}

/// Maps formats to handlers.
pub struct HandlerRegistry {
    handlers: HashMap<SourceFormat, Arc<dyn FormatHandler>>,
}

impl HandlerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A registry with the built-in text, PDF, and DOCX handlers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TextHandler));
        registry.register(Arc::new(PdfHandler));
        registry.register(Arc::new(DocxHandler));
        registry
    }

    /// Register a handler, replacing any existing one for the same format.
    pub fn register(&mut self, handler: Arc<dyn FormatHandler>) {
        self.handlers.insert(handler.format(), handler);
    }

    pub fn get(&self, format: SourceFormat) -> Option<&Arc<dyn FormatHandler>> {
        self.handlers.get(&format)
    }

    /// Dispatch to the handler for `format`.
    pub fn extract(
        &self,
        format: SourceFormat,
        bytes: &[u8],
        content_type: Option<&str>,
        deadline: &Deadline,
    ) -> Result<Extraction> {
        let handler = self
            .handlers
            .get(&format)
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;
        handler.extract(bytes, content_type, deadline)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_cover_all_formats() {
        let registry = HandlerRegistry::with_defaults();
        for format in [SourceFormat::Text, SourceFormat::Pdf, SourceFormat::Docx] {
            assert!(registry.get(format).is_some(), "missing {format}");
        }
    }

    #[test]
    fn test_empty_registry_rejects() {
        let registry = HandlerRegistry::new();
        let deadline = Deadline::within(Duration::from_secs(1));
        let err = registry
            .extract(SourceFormat::Text, b"x", None, &deadline)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extraction_serializes_camel_case() {
        let extraction = Extraction {
            text: "t".into(),
            html: String::new(),
            content_type: Some("text/plain".into()),
            structured: None,
        };
        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["contentType"], "text/plain");
        assert!(json.get("structured").is_none());
        // An empty HTML preview is omitted, not serialized as "".
        assert!(json.get("html").is_none());
    }
}
