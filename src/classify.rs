//! Source format classification.
//!
//! Picks a handler category from content-type and extension signals. An
//! unrecognized input is not an error: classification returns `None` and the
//! pipeline yields an empty result instead of aborting.

use serde::{Deserialize, Serialize};

/// DOCX content-type signature (substring match, the full type is the usual
/// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`).
pub const DOCX_SIGNATURE: &str = "officedocument.wordprocessingml.document";

/// Canonical DOCX content type, used as the hint for `.docx` local files.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extensions treated as plain text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "log"];

/// A source format the pipeline knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Plain text (UTF-8 decode, verbatim).
    Text,
    /// PDF, delegated to the external extractor.
    Pdf,
    /// OOXML word-processing package.
    Docx,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceFormat::Text => "text",
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
        };
        f.write_str(name)
    }
}

/// Classify a source from its content type and extension.
///
/// Both signals are consulted; the text category wins ties (a `text/plain`
/// response serving a `.docx` URL classifies as text). The extension is
/// matched without a leading dot and case-insensitively.
///
/// # Example
///
/// ```
/// use undocx::classify::{classify, SourceFormat};
///
/// assert_eq!(classify("application/pdf", ""), Some(SourceFormat::Pdf));
/// assert_eq!(classify("", "md"), Some(SourceFormat::Text));
/// assert_eq!(classify("application/octet-stream", "bin"), None);
/// ```
pub fn classify(content_type: &str, extension: &str) -> Option<SourceFormat> {
    let ct = content_type.to_lowercase();
    let ext = extension.trim_start_matches('.').to_lowercase();

    let is_text = ct.starts_with("text/")
        || ct.contains("plain")
        || TEXT_EXTENSIONS.contains(&ext.as_str());
    if is_text {
        return Some(SourceFormat::Text);
    }
    if ct.contains("pdf") || ext == "pdf" {
        return Some(SourceFormat::Pdf);
    }
    if ct.contains(DOCX_SIGNATURE) || ext == "docx" {
        return Some(SourceFormat::Docx);
    }
    None
}

/// Content-type hint for a local file extension, or `""` when unknown.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    let ext = extension.trim_start_matches('.').to_lowercase();
    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        "text/plain"
    } else if ext == "pdf" {
        "application/pdf"
    } else if ext == "docx" {
        DOCX_CONTENT_TYPE
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_content_type() {
        assert_eq!(classify("text/plain", ""), Some(SourceFormat::Text));
        assert_eq!(
            classify("text/markdown; charset=utf-8", ""),
            Some(SourceFormat::Text)
        );
        assert_eq!(classify("application/pdf", ""), Some(SourceFormat::Pdf));
        assert_eq!(classify(DOCX_CONTENT_TYPE, ""), Some(SourceFormat::Docx));
    }

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify("", "txt"), Some(SourceFormat::Text));
        assert_eq!(classify("", ".csv"), Some(SourceFormat::Text));
        assert_eq!(classify("", "PDF"), Some(SourceFormat::Pdf));
        assert_eq!(classify("", "docx"), Some(SourceFormat::Docx));
    }

    #[test]
    fn test_text_wins_ties() {
        // A text content type beats a docx extension, and vice versa.
        assert_eq!(classify("text/plain", "docx"), Some(SourceFormat::Text));
        assert_eq!(classify(DOCX_CONTENT_TYPE, "txt"), Some(SourceFormat::Text));
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(classify("", ""), None);
        assert_eq!(classify("application/octet-stream", "bin"), None);
        assert_eq!(classify("image/png", "png"), None);
    }

    #[test]
    fn test_content_type_hints() {
        assert_eq!(content_type_for_extension("md"), "text/plain");
        assert_eq!(content_type_for_extension(".pdf"), "application/pdf");
        assert_eq!(content_type_for_extension("docx"), DOCX_CONTENT_TYPE);
        assert_eq!(content_type_for_extension("exe"), "");
    }
}
