//! Document model - the text buffer, its cursor and file state
//!
//! The buffer is a `Rope` indexed by chars; the table engine works on byte
//! offsets into a `&str` snapshot. Conversion happens here and only here.

use ropey::Rope;
use std::path::PathBuf;

use crate::table::TableEdit;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Cursor as a char index into `buffer`
    pub cursor: usize,
    /// Path to the file on disk (None for in-memory documents)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text and the cursor at the start
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            cursor: 0,
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            buffer: Rope::from(content),
            cursor: 0,
            file_path: Some(path),
            is_modified: false,
            revision: 0,
        })
    }

    /// Snapshot of the whole buffer for the table engine
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Cursor as a byte offset into `text()`
    pub fn cursor_byte_offset(&self) -> usize {
        self.buffer.char_to_byte(self.cursor.min(self.buffer.len_chars()))
    }

    /// Move the cursor to a byte offset, clamped to the buffer
    pub fn set_cursor_byte_offset(&mut self, offset: usize) {
        let clamped = offset.min(self.buffer.len_bytes());
        self.cursor = self.buffer.byte_to_char(clamped);
    }

    /// Convert a 0-indexed (line, column) position to a char index
    ///
    /// Lines past the end land at the end of the buffer; columns past the end
    /// of a line land at the line end.
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a char index to a 0-indexed (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Get the length of a line in chars (excluding newline character)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx >= self.buffer.len_lines() {
            return 0;
        }
        let line = self.buffer.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Replace the buffer and cursor with the result of a table edit in one step
    ///
    /// `fallback_cursor` (a byte offset into the new text) is used when the
    /// edit does not place the cursor itself.
    pub fn apply_table_edit(&mut self, edit: TableEdit, fallback_cursor: usize) {
        let cursor = edit.cursor_pos.unwrap_or(fallback_cursor);
        self.buffer = Rope::from(edit.text);
        self.set_cursor_byte_offset(cursor);
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Write the buffer back to `file_path`
    pub fn save(&mut self) -> Result<(), std::io::Error> {
        let Some(path) = self.file_path.as_ref() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "document has no file path",
            ));
        };
        let file = std::fs::File::create(path)?;
        self.buffer.write_to(std::io::BufWriter::new(file))?;
        self.is_modified = false;
        tracing::debug!(path = %path.display(), revision = self.revision, "saved document");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_char_conversion() {
        let mut doc = Document::with_text("| é | b |");
        doc.cursor = 4; // the pipe after é
        assert_eq!(doc.cursor_byte_offset(), 5);

        doc.set_cursor_byte_offset(8);
        assert_eq!(doc.cursor, 7);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut doc = Document::with_text("abc");
        doc.set_cursor_byte_offset(99);
        assert_eq!(doc.cursor, 3);
    }

    #[test]
    fn test_line_column_round_trip() {
        let doc = Document::with_text("ab\ncdef\n");
        let offset = doc.cursor_to_offset(1, 2);
        assert_eq!(offset, 5);
        assert_eq!(doc.offset_to_cursor(offset), (1, 2));
        assert_eq!(doc.cursor_to_offset(1, 99), 7);
        assert_eq!(doc.cursor_to_offset(9, 0), 8);
    }

    #[test]
    fn test_apply_table_edit_bumps_revision() {
        let mut doc = Document::with_text("| a |");
        doc.apply_table_edit(TableEdit::new("| a |\n|   |".to_string(), 8), 0);
        assert_eq!(doc.text(), "| a |\n|   |");
        assert_eq!(doc.cursor, 8);
        assert!(doc.is_modified);
        assert_eq!(doc.revision, 1);
    }
}
