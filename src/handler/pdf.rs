//! PDF handler.

use super::{Extraction, FormatHandler};
use crate::classify::SourceFormat;
use crate::error::Result;
use crate::resolve::Deadline;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Linearized text extraction from PDF bytes.
///
/// Encrypted or malformed documents degrade to an empty extraction rather
/// than failing the whole ingestion.
pub struct PdfHandler;

impl FormatHandler for PdfHandler {
    fn format(&self) -> SourceFormat {
        SourceFormat::Pdf
    }

    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(
        &self,
        bytes: &[u8],
        _content_type: Option<&str>,
        deadline: &Deadline,
    ) -> Result<Extraction> {
        deadline.check()?;
        let text = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("pdf text extraction failed: {err}");
                String::new()
            }
        };
        Ok(Extraction {
            text,
            html: String::new(),
            content_type: Some(PDF_CONTENT_TYPE.to_string()),
            structured: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_garbage_degrades_to_empty() {
        let deadline = Deadline::within(Duration::from_secs(5));
        let out = PdfHandler
            .extract(b"not a pdf at all", None, &deadline)
            .unwrap();
        assert!(out.text.is_empty());
        assert_eq!(out.content_type.as_deref(), Some("application/pdf"));
    }
}
