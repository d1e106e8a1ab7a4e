//! # undocx
//!
//! Document ingestion core: resolve a reference (path or URL) to bytes,
//! classify the format, and extract plain text, an HTML preview, structured
//! facets, and sentence placeholder spans.
//!
//! Supported formats are plain text, PDF, and DOCX. DOCX gets the full
//! structural treatment (outline, lists, tables, links, footnotes, images,
//! styled runs); PDF yields linearized text; text passes through.
//!
//! ## Quick start
//!
//! ```no_run
//! let extraction = undocx::extract_from_reference("report.docx", "/srv/uploads");
//! println!("{}", extraction.text);
//! if let Some(structure) = &extraction.structured {
//!     for entry in &structure.outline {
//!         println!("h{} {}", entry.level, entry.text);
//!     }
//! }
//! ```
//!
//! The top-level API never fails: resolution errors, oversized or slow
//! sources, unknown formats, and malformed documents all collapse into an
//! empty [`Extraction`] after being logged. Use [`IngestOptions`] to adjust
//! the sandbox, the size cap, or the time budget:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let options = undocx::IngestOptions::new("/srv/uploads")
//!     .max_bytes(5 * 1024 * 1024)
//!     .timeout(Duration::from_secs(10));
//! let extraction = undocx::extract_with_options("https://example.com/doc.pdf", &options);
//! ```

pub mod classify;
pub mod docx;
pub mod error;
pub mod handler;
pub mod model;
pub mod resolve;
pub mod segment;

pub use classify::SourceFormat;
pub use error::{Error, Result};
pub use handler::{Extraction, FormatHandler, HandlerRegistry};
pub use model::{
    DocumentStructure, Footnote, Hyperlink, ImageRef, ListItem, OutlineEntry, Paragraph, Run,
    Table, TableCell, Toggle,
};
pub use resolve::{Deadline, ResolvedSource, Resolver};
pub use segment::{build_sentence_placeholders, PlaceholderSpan};

use std::path::PathBuf;
use std::time::Duration;

/// Default cap on source size: 25 MiB.
pub const MAX_SOURCE_BYTES: u64 = 25 * 1024 * 1024;

/// Default wall-clock budget covering resolution and parsing.
pub const EXTRACT_TIMEOUT: Duration = Duration::from_secs(45);

/// Ingestion settings: sandbox root, size cap, and time budget.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    sandbox_root: PathBuf,
    max_bytes: u64,
    timeout: Duration,
}

impl IngestOptions {
    /// Options with the default cap and budget, confined to `sandbox_root`.
    pub fn new(sandbox_root: impl Into<PathBuf>) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
            max_bytes: MAX_SOURCE_BYTES,
            timeout: EXTRACT_TIMEOUT,
        }
    }

    /// Override the source size cap.
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Override the wall-clock budget.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Resolve, classify, and extract one reference with default settings.
///
/// Never fails: every error path degrades to an empty [`Extraction`] after
/// logging a warning.
pub fn extract_from_reference(reference: &str, sandbox_root: impl Into<PathBuf>) -> Extraction {
    extract_with_options(reference, &IngestOptions::new(sandbox_root))
}

/// [`extract_from_reference`] with explicit [`IngestOptions`].
pub fn extract_with_options(reference: &str, options: &IngestOptions) -> Extraction {
    match try_extract(reference, options) {
        Ok(extraction) => extraction,
        Err(err) => {
            log::warn!("extraction failed for {reference}: {err}");
            let mut extraction = Extraction::empty();
            // A failed fetch still reports the content type the server sent.
            if let Error::Fetch {
                content_type: Some(ct),
                ..
            } = err
            {
                extraction.content_type = Some(ct);
            }
            extraction
        }
    }
}

fn try_extract(reference: &str, options: &IngestOptions) -> Result<Extraction> {
    let deadline = Deadline::within(options.timeout);
    let resolver = Resolver::new(&options.sandbox_root, options.max_bytes);
    let source = resolver.resolve(reference, &deadline)?;
    deadline.check()?;

    let content_type = source.content_type.as_deref().unwrap_or("");
    let extension = source.extension.as_deref().unwrap_or("");
    let Some(format) = classify::classify(content_type, extension) else {
        // Unknown format is not an error: report the content type with an
        // otherwise empty result.
        let mut extraction = Extraction::empty();
        extraction.content_type = source.content_type.clone();
        return Ok(extraction);
    };

    let registry = HandlerRegistry::with_defaults();
    registry.extract(format, &source.bytes, source.content_type.as_deref(), &deadline)
}
