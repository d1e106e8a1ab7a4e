//! Document model types for extracted content.
//!
//! This is the intermediate representation between OOXML parsing and the
//! projections handed back to callers. It is built once per extraction call
//! and never mutated afterwards.

mod paragraph;
mod run;
mod structure;
mod table;

pub use paragraph::Paragraph;
pub use run::{Run, Toggle};
pub use structure::{DocumentStructure, Footnote, Hyperlink, ImageRef, ListItem, OutlineEntry};
pub use table::{Table, TableCell};
