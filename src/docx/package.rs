//! OOXML package part loading.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{Error, Result};

use super::xml::{self, Element};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";
const FOOTNOTES_PART: &str = "word/footnotes.xml";
const RELS_PART: &str = "word/_rels/document.xml.rels";

/// The parsed parts of an OOXML word-processing package.
///
/// Only the main document part is required; every other part degrades to
/// `None` when missing or malformed, and extraction carries on with that
/// facet empty.
#[derive(Debug)]
pub struct OoxmlPackage {
    /// `word/document.xml`, the main document part.
    pub document: Element,

    /// `word/styles.xml`. Loaded alongside the other parts; heading
    /// detection reads `pStyle` values directly and does not consult it.
    pub styles: Option<Element>,

    /// `word/numbering.xml`.
    pub numbering: Option<Element>,

    /// `word/footnotes.xml`.
    pub footnotes: Option<Element>,

    /// `word/_rels/document.xml.rels`.
    pub relationships: Option<Element>,
}

impl OoxmlPackage {
    /// Open a package from its zip bytes.
    ///
    /// Fails with [`Error::Package`] when the container is not a readable
    /// zip, [`Error::MissingPart`] when the main document part is absent,
    /// and [`Error::Xml`] when the main document part is malformed.
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let document_xml = read_part(&mut archive, DOCUMENT_PART)
            .ok_or(Error::MissingPart("word/document.xml"))?;
        let document = xml::parse(&document_xml)?;

        Ok(Self {
            document,
            styles: optional_part(&mut archive, STYLES_PART),
            numbering: optional_part(&mut archive, NUMBERING_PART),
            footnotes: optional_part(&mut archive, FOOTNOTES_PART),
            relationships: optional_part(&mut archive, RELS_PART),
        })
    }
}

/// Read a named part as text, or `None` when absent or unreadable.
fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> Option<String> {
    let mut file = archive.by_name(name).ok()?;
    let mut content = String::new();
    file.read_to_string(&mut content).ok()?;
    Some(content)
}

/// Read and parse an optional part, degrading to `None` with a warning.
fn optional_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Option<Element> {
    let content = read_part(archive, name)?;
    match xml::parse(&content) {
        Ok(element) => Some(element),
        Err(e) => {
            log::warn!("ignoring malformed package part {name}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package_with(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const MINIMAL_DOC: &str =
        r#"<w:document xmlns:w="http://x"><w:body><w:p/></w:body></w:document>"#;

    #[test]
    fn test_open_minimal_package() {
        let bytes = package_with(&[("word/document.xml", MINIMAL_DOC)]);
        let package = OoxmlPackage::open(&bytes).unwrap();
        assert_eq!(package.document.name, "document");
        assert!(package.numbering.is_none());
        assert!(package.relationships.is_none());
    }

    #[test]
    fn test_not_a_zip() {
        let result = OoxmlPackage::open(b"definitely not a zip archive");
        assert!(matches!(result, Err(Error::Package(_))));
    }

    #[test]
    fn test_missing_document_part() {
        let bytes = package_with(&[("word/styles.xml", "<styles/>")]);
        let result = OoxmlPackage::open(&bytes);
        assert!(matches!(result, Err(Error::MissingPart(_))));
    }

    #[test]
    fn test_malformed_document_part_is_fatal() {
        let bytes = package_with(&[("word/document.xml", "<w:document><unclosed")]);
        assert!(matches!(OoxmlPackage::open(&bytes), Err(Error::Xml(_))));
    }

    #[test]
    fn test_malformed_optional_part_degrades() {
        let bytes = package_with(&[
            ("word/document.xml", MINIMAL_DOC),
            ("word/numbering.xml", "<numbering><broken"),
        ]);
        let package = OoxmlPackage::open(&bytes).unwrap();
        assert!(package.numbering.is_none());
    }
}
