//! Splits one table line into cells with absolute offsets

use super::model::TableCell;

/// Parse a single line into cells.
///
/// `row_start` is the absolute offset of the line's first byte. Each cell's
/// span runs between two pipes (exclusive) or to a line boundary when the row
/// has no leading/trailing pipe. Whitespace before a leading pipe and after a
/// trailing pipe belongs to no cell.
pub fn parse_table_row(line: &str, row_start: usize) -> Vec<TableCell> {
    let mut cells = Vec::new();

    // Between cells until the leading pipe, unless the row has none
    let mut cell_start = if line.trim_start().starts_with('|') {
        None
    } else {
        Some(0)
    };

    for (i, ch) in line.char_indices() {
        if ch != '|' {
            continue;
        }
        if let Some(start) = cell_start {
            cells.push(make_cell(line, row_start, start, i));
        }
        cell_start = Some(i + 1);
    }

    if let Some(start) = cell_start {
        if !line.trim_end().ends_with('|') {
            cells.push(make_cell(line, row_start, start, line.len()));
        }
    }

    cells
}

fn make_cell(line: &str, row_start: usize, start: usize, end: usize) -> TableCell {
    TableCell {
        content: line[start..end].trim().to_string(),
        start: row_start + start,
        end: row_start + end,
    }
}
