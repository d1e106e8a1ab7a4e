//! Plain-text handler.

use super::{Extraction, FormatHandler};
use crate::classify::SourceFormat;
use crate::error::Result;
use crate::resolve::Deadline;

/// Decodes bytes as UTF-8, replacing invalid sequences.
pub struct TextHandler;

impl FormatHandler for TextHandler {
    fn format(&self) -> SourceFormat {
        SourceFormat::Text
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        _deadline: &Deadline,
    ) -> Result<Extraction> {
        Ok(Extraction {
            text: String::from_utf8_lossy(bytes).into_owned(),
            html: String::new(),
            content_type: Some(content_type.unwrap_or("text/plain").to_string()),
            structured: None,
        })
    }
}
