//! Error types for the undocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document ingestion.
///
/// Only a handful of these ever reach callers of the public
/// [`extract_from_reference`](crate::extract_from_reference) boundary, which
/// collapses every failure into an empty [`Extraction`](crate::Extraction)
/// after logging it. The typed variants exist for the lower-level APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading local files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A local reference resolved outside the sandbox root.
    #[error("local path escapes the sandbox root: {0}")]
    PathEscape(PathBuf),

    /// The source is larger than the configured byte cap.
    #[error("source is {size} bytes, over the {limit} byte cap")]
    SizeExceeded {
        /// Observed size (stat or content-length).
        size: u64,
        /// Configured cap.
        limit: u64,
    },

    /// The wall-clock budget for resolve + parse expired.
    #[error("extraction deadline expired")]
    Timeout,

    /// A remote fetch failed (transport error or non-success status).
    #[error("fetch failed: {reason}")]
    Fetch {
        /// What went wrong.
        reason: String,
        /// Content type of the failed response, when the server sent one.
        /// Carried so the boundary can report it alongside the empty result.
        content_type: Option<String>,
    },

    /// No handler is registered for the classified format.
    #[error("no handler for format: {0}")]
    UnsupportedFormat(String),

    /// The OOXML container could not be opened as a zip archive.
    #[error("OOXML package error: {0}")]
    Package(String),

    /// A required package part is absent.
    #[error("missing package part: {0}")]
    MissingPart(&'static str),

    /// A package part holds malformed XML.
    #[error("XML parsing error: {0}")]
    Xml(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Package(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Fetch {
                reason: err.to_string(),
                content_type: None,
            }
        }
    }
}
