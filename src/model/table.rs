//! Table types.

use serde::{Deserialize, Serialize};

/// A reconstructed table.
///
/// Rows hold only the cells that actually contribute content: a horizontal
/// merge appears as one cell with a `colspan`, and the continuation cells of
/// a vertical merge are consumed by the reservation they fill rather than
/// emitted again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows of cells, in document order.
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the effective column count of the first row, spans included.
    pub fn column_count(&self) -> usize {
        self.rows
            .first()
            .map(|row| row.iter().map(|c| c.colspan.unwrap_or(1) as usize).sum())
            .unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated plain text, one line per row.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Newline-joined text of the cell's paragraphs.
    pub text: String,

    /// Horizontal span, present only when greater than one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,

    /// Vertical span, present on vertical-merge start cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<u32>,
}

impl TableCell {
    /// Create a plain cell with text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: None,
            rowspan: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_includes_spans() {
        let table = Table {
            rows: vec![vec![
                TableCell {
                    text: "a".into(),
                    colspan: Some(2),
                    rowspan: None,
                },
                TableCell::text("b"),
            ]],
        };
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_plain_text() {
        let table = Table {
            rows: vec![
                vec![TableCell::text("a"), TableCell::text("b")],
                vec![TableCell::text("c"), TableCell::text("d")],
            ],
        };
        assert_eq!(table.plain_text(), "a\tb\nc\td");
    }

    #[test]
    fn test_cell_wire_shape() {
        let json = serde_json::to_value(TableCell::text("x")).unwrap();
        assert_eq!(json["text"], "x");
        assert!(json.get("colspan").is_none());
        assert!(json.get("rowspan").is_none());
    }
}
