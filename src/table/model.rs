//! Table data model types
//!
//! Every offset is a byte offset into the document snapshot the table was
//! located in. A `TableInfo` is a query result for one snapshot and must be
//! recomputed after any edit.

use serde::{Deserialize, Serialize};

use crate::util::text::line_spans;

use super::parser::parse_table_row;

/// One cell of a table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    /// Trimmed cell text
    pub content: String,
    /// Start of the untrimmed span (just after the opening pipe)
    pub start: usize,
    /// End of the untrimmed span (the closing pipe, or end of line)
    pub end: usize,
}

impl TableCell {
    /// Where the cursor lands when navigating into this cell
    #[inline]
    pub fn cursor_anchor(&self) -> usize {
        (self.start + 1).min(self.end)
    }

    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// One non-alignment line of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Line start
    pub start: usize,
    /// Line end, excluding the terminator
    pub end: usize,
}

impl TableRow {
    pub fn source<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// A located table block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    /// Parsed rows, alignment line excluded
    pub rows: Vec<TableRow>,
    /// Position of the alignment line within the block's lines (not within `rows`)
    pub alignment_row_index: Option<usize>,
    /// Start of the block's first line
    pub start: usize,
    /// End of the block's last line
    pub end: usize,
}

impl TableInfo {
    pub fn source<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Widest row's cell count
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    pub fn has_alignment_row(&self) -> bool {
        self.alignment_row_index.is_some()
    }

    /// Bounds of the alignment line: the block's first line plus
    /// `alignment_row_index` lines.
    pub fn alignment_line_span(&self, text: &str) -> Option<(usize, usize)> {
        let index = self.alignment_row_index?;
        let block = &text[self.start..self.end];
        let span = line_spans(block).into_iter().nth(index)?;
        Some((self.start + span.start, self.start + span.end))
    }

    /// Cells of the alignment line, parsed like any other row
    pub fn alignment_cells(&self, text: &str) -> Option<Vec<TableCell>> {
        let (start, end) = self.alignment_line_span(text)?;
        Some(parse_table_row(&text[start..end], start))
    }

    /// Declared alignment per column; empty when there is no alignment row
    pub fn column_alignments(&self, text: &str) -> Vec<Alignment> {
        self.alignment_cells(text)
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| Alignment::from_marker(&cell.content))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cell at a grid address, if the address is valid
    pub fn cell(&self, address: CellAddress) -> Option<&TableCell> {
        self.rows.get(address.row)?.cells.get(address.col)
    }

    /// Whether `offset` falls inside the block
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// Logical grid coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Destination of a cell navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellTarget {
    pub row: usize,
    pub col: usize,
    /// Cursor offset inside the target cell
    pub pos: usize,
}

/// Result of a structural edit: the full new document and, when the edit
/// decides it, where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEdit {
    pub text: String,
    pub cursor_pos: Option<usize>,
}

impl TableEdit {
    pub fn new(text: String, cursor_pos: usize) -> Self {
        Self {
            text,
            cursor_pos: Some(cursor_pos),
        }
    }

    /// An edit that leaves the document as it was
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor_pos: None,
        }
    }
}

/// Column text alignment as declared by the alignment row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Classify a trimmed marker such as `---`, `:---:` or `---:`.
    ///
    /// A leading colon alone counts as left.
    pub fn from_marker(marker: &str) -> Self {
        match (marker.starts_with(':'), marker.ends_with(':') && marker.len() > 1) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    /// Next state in the left, center, right cycle
    pub fn cycle(self) -> Self {
        match self {
            Alignment::Left => Alignment::Center,
            Alignment::Center => Alignment::Right,
            Alignment::Right => Alignment::Left,
        }
    }

    /// Render a marker with `dashes` dashes (at least one)
    pub fn marker(self, dashes: usize) -> String {
        let dashes = "-".repeat(dashes.max(1));
        match self {
            Alignment::Left => dashes,
            Alignment::Center => format!(":{}:", dashes),
            Alignment::Right => format!("{}:", dashes),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// How cells of a synthesized row are padded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFill {
    /// First cell gets a blank placeholder, the rest are zero-width: `|   ||`
    #[default]
    Compat,
    /// Every cell gets the same blank placeholder: `|   |   |`
    Uniform,
}

/// Where a new row goes relative to the target row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPlacement {
    Above,
    Below,
}
