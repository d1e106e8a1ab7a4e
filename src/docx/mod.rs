//! OOXML (WordprocessingML) structural extraction.
//!
//! A `.docx` file is a ZIP package of XML parts. [`parse_structure`] opens the
//! package, parses the parts it needs, and walks the document body into a
//! [`DocumentStructure`](crate::model::DocumentStructure) plus plain-text and
//! HTML previews.

mod extract;
mod html;
mod package;
mod parts;
mod xml;

pub use package::OoxmlPackage;

use crate::error::Result;
use crate::model::DocumentStructure;
use crate::resolve::Deadline;

/// Everything pulled out of one package.
#[derive(Debug, Default)]
pub struct DocxExtraction {
    /// Structured facets of the document body.
    pub structure: DocumentStructure,
    /// Paragraph texts joined with newlines.
    pub preview_text: String,
    /// Concatenated HTML fragments, one per paragraph.
    pub preview_html: String,
}

/// Parse a `.docx` package from memory.
///
/// A package without a readable main document part is an error; optional
/// parts (styles, numbering, footnotes, relationships) degrade to absent.
/// A document without a `body` element yields an empty extraction.
pub fn parse_structure(bytes: &[u8], deadline: &Deadline) -> Result<DocxExtraction> {
    deadline.check()?;
    let package = OoxmlPackage::open(bytes)?;
    deadline.check()?;
    Ok(extract::extract_package(&package))
}
