//! DOCX handler, wrapping the OOXML structural extractor.

use super::{Extraction, FormatHandler};
use crate::classify::{SourceFormat, DOCX_CONTENT_TYPE};
use crate::docx;
use crate::error::Result;
use crate::resolve::Deadline;

/// Full structural extraction for WordprocessingML packages.
///
/// An unreadable package (not a zip, missing or malformed main document
/// part) degrades to an empty extraction that still reports the docx content
/// type, rather than failing the call.
pub struct DocxHandler;

impl FormatHandler for DocxHandler {
    fn format(&self) -> SourceFormat {
        SourceFormat::Docx
    }

    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(
        &self,
        bytes: &[u8],
        _content_type: Option<&str>,
        deadline: &Deadline,
    ) -> Result<Extraction> {
        let parsed = match docx::parse_structure(bytes, deadline) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("docx structure extraction failed: {err}");
                return Ok(Extraction {
                    content_type: Some(DOCX_CONTENT_TYPE.to_string()),
                    ..Extraction::empty()
                });
            }
        };
        Ok(Extraction {
            text: parsed.preview_text,
            html: parsed.preview_html,
            content_type: Some(DOCX_CONTENT_TYPE.to_string()),
            structured: Some(parsed.structure),
        })
    }
}
