//! Structural table edits on raw text
//!
//! Each function rebuilds the whole document from the snapshot the
//! `TableInfo` was located in. Indices must come from the locator or cell
//! addressing; out-of-range indices panic.

use super::model::{Alignment, RowFill, RowPlacement, TableEdit, TableInfo};

/// Interior of a synthesized blank cell
const PLACEHOLDER: &str = "   ";

/// Cell inserted into data rows by column insertion
const BLANK_CELL: &str = "|   ";

/// Segment inserted into the alignment line by column insertion
const ALIGNMENT_CELL: &str = "| --- ";

/// Offset from a new row's start to the cursor inside its first placeholder
const ROW_CURSOR_OFFSET: usize = 2;

/// Insert an empty row below `rows[row_index]`.
///
/// Below a header, the row lands after the alignment line rather than
/// directly after the header's span. See `insert_row`.
pub fn add_row_below(text: &str, table: &TableInfo, row_index: usize) -> TableEdit {
    insert_row(text, table, row_index, RowPlacement::Below, RowFill::Compat)
}

/// Insert an empty row above `rows[row_index]`
pub fn add_row_above(text: &str, table: &TableInfo, row_index: usize) -> TableEdit {
    insert_row(text, table, row_index, RowPlacement::Above, RowFill::Compat)
}

/// Insert an empty row with as many cells as `rows[row_index]`.
///
/// Unlike a plain splice after the row's span, inserting below a header whose
/// next line is the alignment row puts the new row under the alignment line,
/// keeping the separator attached to the header.
///
/// The new line copies the line ending of the line it is spliced next to, so
/// a CRLF table stays CRLF.
pub fn insert_row(
    text: &str,
    table: &TableInfo,
    row_index: usize,
    placement: RowPlacement,
    fill: RowFill,
) -> TableEdit {
    let row = &table.rows[row_index];
    let new_row = blank_row(row.cells.len(), fill);

    let (at, insert, new_row_start) = match placement {
        RowPlacement::Below => {
            let (anchor_start, anchor) = match table.alignment_line_span(text) {
                Some((start, end)) if start == row.end + 1 => (start, end),
                _ => (row.start, row.end),
            };
            let cr = carriage_return(&text[anchor_start..anchor]);
            (anchor, format!("\n{}{}", new_row, cr), anchor + 1)
        }
        RowPlacement::Above => {
            let cr = carriage_return(row.source(text));
            (row.start, format!("{}{}\n", new_row, cr), row.start)
        }
    };

    let mut result = String::with_capacity(text.len() + insert.len());
    result.push_str(&text[..at]);
    result.push_str(&insert);
    result.push_str(&text[at..]);

    TableEdit::new(result, new_row_start + ROW_CURSOR_OFFSET)
}

/// `"\r"` when the line is CRLF-terminated, else `""`
fn carriage_return(line: &str) -> &'static str {
    if line.ends_with('\r') {
        "\r"
    } else {
        ""
    }
}

/// Render a blank row of `cells` cells
fn blank_row(cells: usize, fill: RowFill) -> String {
    let cells = cells.max(1);
    match fill {
        // Only the first cell gets interior width
        RowFill::Compat => format!("|{}{}", PLACEHOLDER, "|".repeat(cells)),
        RowFill::Uniform => format!("|{}", format!("{}|", PLACEHOLDER).repeat(cells)),
    }
}

/// One pending insertion into the original text
struct Splice {
    at: usize,
    insert: &'static str,
    /// Row index for data-row insertions, `None` for the alignment line
    row: Option<usize>,
}

/// Insert a blank column after `col_index` in every row that has it.
///
/// The alignment line, when present, gets a `---` segment at the same
/// column. The cursor lands in the new cell of the first row that received
/// one.
pub fn add_column_after(text: &str, table: &TableInfo, col_index: usize) -> TableEdit {
    let mut splices: Vec<Splice> = table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(row_idx, row)| {
            row.cells.get(col_index).map(|cell| Splice {
                at: cell.end,
                insert: BLANK_CELL,
                row: Some(row_idx),
            })
        })
        .collect();

    if let Some(cell) = table
        .alignment_cells(text)
        .and_then(|cells| cells.into_iter().nth(col_index))
    {
        splices.push(Splice {
            at: cell.end,
            insert: ALIGNMENT_CELL,
            row: None,
        });
    }

    if splices.is_empty() {
        return TableEdit::unchanged(text);
    }

    // Stable: rows keep document order for ties
    splices.sort_by_key(|s| s.at);

    let added: usize = splices.iter().map(|s| s.insert.len()).sum();
    let mut result = String::with_capacity(text.len() + added);
    let mut copied = 0;
    let mut delta = 0;
    let mut cursor = None;

    for splice in &splices {
        result.push_str(&text[copied..splice.at]);
        result.push_str(splice.insert);
        copied = splice.at;

        if cursor.is_none() && splice.row.is_some() {
            // Past "| " inside the new cell, in new-text coordinates
            cursor = Some(splice.at + delta + 2);
        }
        delta += splice.insert.len();
    }
    result.push_str(&text[copied..]);

    TableEdit {
        text: result,
        cursor_pos: cursor,
    }
}

/// Cycle the alignment marker of column `col_index`: left, center, right.
///
/// Only that column's marker changes; the dash count is kept. Without an
/// alignment row (or without that column in it) the text is returned as is.
pub fn toggle_column_alignment(text: &str, table: &TableInfo, col_index: usize) -> TableEdit {
    let Some(cell) = table
        .alignment_cells(text)
        .and_then(|cells| cells.into_iter().nth(col_index))
    else {
        return TableEdit::unchanged(text);
    };

    let raw = &text[cell.start..cell.end];
    let marker_start = cell.start + (raw.len() - raw.trim_start().len());
    let marker_end = (marker_start + cell.content.len()).min(cell.end);

    let dashes = match cell.content.bytes().filter(|&b| b == b'-').count() {
        0 => 3,
        n => n,
    };
    let next = Alignment::from_marker(&cell.content).cycle().marker(dashes);

    let mut result = String::with_capacity(text.len() + 2);
    result.push_str(&text[..marker_start]);
    result.push_str(&next);
    result.push_str(&text[marker_end..]);

    TableEdit {
        text: result,
        cursor_pos: None,
    }
}

/// Remove `rows[row_index]` and one adjacent newline.
///
/// The newline after the row goes, unless the row is the block's last line,
/// in which case the newline before it goes so the block doesn't leave a
/// blank line behind. No minimum row count is enforced here.
pub fn delete_row(text: &str, table: &TableInfo, row_index: usize) -> TableEdit {
    let row = &table.rows[row_index];
    let is_block_end = row.end == table.end;

    let (from, to) = if is_block_end && row.start > 0 {
        (row.start - 1, row.end)
    } else if row.end < text.len() {
        (row.start, row.end + 1)
    } else {
        (row.start, row.end)
    };

    let mut result = String::with_capacity(text.len() - (to - from));
    result.push_str(&text[..from]);
    result.push_str(&text[to..]);

    TableEdit::new(result, from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::find_table_at_cursor;

    const TABLE: &str = "| A | B |\n| --- | --- |\n| 1 | 2 |";

    fn table(text: &str) -> TableInfo {
        find_table_at_cursor(text, 0).unwrap()
    }

    #[test]
    fn test_add_row_below_data_row() {
        let edit = add_row_below(TABLE, &table(TABLE), 1);
        assert_eq!(edit.text, "| A | B |\n| --- | --- |\n| 1 | 2 |\n|   ||");
        assert_eq!(edit.cursor_pos, Some(TABLE.len() + 1 + 2));
    }

    #[test]
    fn test_add_row_below_header_skips_alignment_line() {
        let edit = add_row_below(TABLE, &table(TABLE), 0);
        assert_eq!(edit.text, "| A | B |\n| --- | --- |\n|   ||\n| 1 | 2 |");
        assert_eq!(edit.cursor_pos, Some(26));
    }

    #[test]
    fn test_add_row_above() {
        let edit = add_row_above(TABLE, &table(TABLE), 1);
        assert_eq!(edit.text, "| A | B |\n| --- | --- |\n|   ||\n| 1 | 2 |");
        assert_eq!(edit.cursor_pos, Some(26));
    }

    #[test]
    fn test_add_row_uniform_fill() {
        let edit = insert_row(
            TABLE,
            &table(TABLE),
            1,
            RowPlacement::Below,
            RowFill::Uniform,
        );
        assert!(edit.text.ends_with("\n|   |   |"));
    }

    #[test]
    fn test_add_row_keeps_surrounding_text() {
        let text = format!("before\n{}\nafter", TABLE);
        let t = find_table_at_cursor(&text, 8).unwrap();
        let edit = add_row_below(&text, &t, 1);
        assert!(edit.text.starts_with("before\n| A | B |"));
        assert!(edit.text.ends_with("| 1 | 2 |\n|   ||\nafter"));
    }

    #[test]
    fn test_add_row_keeps_crlf_line_endings() {
        let text = "| a |\r\n| b |\r\nnext";
        let t = table(text);

        let below = add_row_below(text, &t, 0);
        assert_eq!(below.text, "| a |\r\n|   |\r\n| b |\r\nnext");
        assert_eq!(below.cursor_pos, Some(9));

        let above = add_row_above(text, &t, 1);
        assert_eq!(above.text, below.text);

        let deleted = delete_row(text, &t, 1);
        assert_eq!(deleted.text, "| a |\r\nnext");
    }

    #[test]
    fn test_add_row_below_crlf_header() {
        let text = "| a |\r\n|---|\r\n| b |";
        let edit = add_row_below(text, &table(text), 0);
        assert_eq!(edit.text, "| a |\r\n|---|\r\n|   |\r\n| b |");
    }

    #[test]
    fn test_add_column_after_first() {
        let edit = add_column_after(TABLE, &table(TABLE), 0);
        assert_eq!(
            edit.text,
            "| A |   | B |\n| --- | --- | --- |\n| 1 |   | 2 |"
        );
        // Inside the header's new cell
        assert_eq!(edit.cursor_pos, Some(6));
    }

    #[test]
    fn test_add_column_after_last() {
        let edit = add_column_after(TABLE, &table(TABLE), 1);
        assert_eq!(
            edit.text,
            "| A | B |   |\n| --- | --- | --- |\n| 1 | 2 |   |"
        );
    }

    #[test]
    fn test_add_column_with_uneven_rows() {
        // Rows of different widths shift offsets by different amounts
        let text = "| Long header | B |\n|---|---|\n| x | y |\n| wider value here | z |";
        let edit = add_column_after(text, &table(text), 0);
        assert_eq!(
            edit.text,
            "| Long header |   | B |\n|---| --- |---|\n| x |   | y |\n| wider value here |   | z |"
        );
    }

    #[test]
    fn test_add_column_alignment_line_first() {
        let text = "|---|---|\n| a | b |";
        let edit = add_column_after(text, &table(text), 0);
        assert_eq!(edit.text, "|---| --- |---|\n| a |   | b |");
        // Cursor tracks the drift from the alignment insertion
        assert_eq!(edit.cursor_pos, Some(10 + 6 + 6));
    }

    #[test]
    fn test_toggle_alignment_cycles() {
        let t = table(TABLE);
        let once = toggle_column_alignment(TABLE, &t, 0);
        assert_eq!(once.text, "| A | B |\n| :---: | --- |\n| 1 | 2 |");
        assert_eq!(once.cursor_pos, None);

        let twice = toggle_column_alignment(&once.text, &table(&once.text), 0);
        assert_eq!(twice.text, "| A | B |\n| ---: | --- |\n| 1 | 2 |");

        let thrice = toggle_column_alignment(&twice.text, &table(&twice.text), 0);
        assert_eq!(thrice.text, TABLE);
    }

    #[test]
    fn test_toggle_alignment_second_column_only() {
        let edit = toggle_column_alignment(TABLE, &table(TABLE), 1);
        assert_eq!(edit.text, "| A | B |\n| --- | :---: |\n| 1 | 2 |");
    }

    #[test]
    fn test_toggle_alignment_without_alignment_row() {
        let text = "| a | b |\n| c | d |";
        let edit = toggle_column_alignment(text, &table(text), 0);
        assert_eq!(edit, TableEdit::unchanged(text));
    }

    #[test]
    fn test_delete_middle_row() {
        let text = "| A |\n|---|\n| 1 |\n| 2 |";
        let t = table(text);
        let edit = delete_row(text, &t, 1);
        assert_eq!(edit.text, "| A |\n|---|\n| 2 |");
        assert_eq!(edit.cursor_pos, Some(12));
    }

    #[test]
    fn test_delete_last_row_takes_preceding_newline() {
        let text = format!("{}\n\nafter", TABLE);
        let t = table(&text);
        let edit = delete_row(&text, &t, 1);
        assert_eq!(edit.text, "| A | B |\n| --- | --- |\n\nafter");
        assert_eq!(edit.cursor_pos, Some(23));
    }

    #[test]
    fn test_delete_only_line_of_document() {
        let text = "| a |";
        let edit = delete_row(text, &table(text), 0);
        assert_eq!(edit.text, "");
        assert_eq!(edit.cursor_pos, Some(0));
    }

    #[test]
    fn test_delete_header_keeps_alignment_line() {
        let edit = delete_row(TABLE, &table(TABLE), 0);
        assert_eq!(edit.text, "| --- | --- |\n| 1 | 2 |");
        assert_eq!(edit.cursor_pos, Some(0));
    }
}
