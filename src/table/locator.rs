//! Finds the table block around a cursor

use crate::util::text::{line_span_at, next_line, previous_line};

use super::classify::{is_alignment_row, is_table_row};
use super::model::{TableInfo, TableRow};
use super::parser::parse_table_row;

/// Locate the table containing `cursor`.
///
/// The block is the maximal run of table-shaped lines around the cursor's
/// line; blank lines are not required around it. The first alignment-shaped
/// line becomes the alignment row and is left out of `rows`.
pub fn find_table_at_cursor(text: &str, cursor: usize) -> Option<TableInfo> {
    let cursor_line = line_span_at(text, cursor)?;
    if !is_table_row(cursor_line.slice(text)) {
        return None;
    }

    // Walks outward from the cursor line; lines outside the block are never split
    let mut block = vec![cursor_line];
    let mut span = cursor_line;
    while let Some(prev) = previous_line(text, span).filter(|l| is_table_row(l.slice(text))) {
        block.push(prev);
        span = prev;
    }
    block.reverse();

    let mut span = cursor_line;
    while let Some(next) = next_line(text, span).filter(|l| is_table_row(l.slice(text))) {
        block.push(next);
        span = next;
    }

    let mut rows = Vec::with_capacity(block.len());
    let mut alignment_row_index = None;

    for (block_idx, span) in block.iter().enumerate() {
        let line = span.slice(text);
        if alignment_row_index.is_none() && is_alignment_row(line) {
            alignment_row_index = Some(block_idx);
            continue;
        }
        rows.push(TableRow {
            cells: parse_table_row(line, span.start),
            start: span.start,
            end: span.end,
        });
    }

    let first = block[0];
    let last = block[block.len() - 1];
    tracing::trace!(
        start = first.start,
        end = last.end,
        lines = block.len(),
        rows = rows.len(),
        alignment = ?alignment_row_index,
        "located table"
    );

    Some(TableInfo {
        rows,
        alignment_row_index,
        start: first.start,
        end: last.end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "| A | B |\n| --- | --- |\n| 1 | 2 |";

    #[test]
    fn test_locate_simple_table() {
        let table = find_table_at_cursor(TABLE, 26).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.alignment_row_index, Some(1));
        assert_eq!(table.start, 0);
        assert_eq!(table.end, TABLE.len());
        assert_eq!(table.rows[1].cells[0].content, "1");
    }

    #[test]
    fn test_locate_outside_table() {
        let text = format!("intro\n{}\n\noutro", TABLE);
        assert!(find_table_at_cursor(&text, 2).is_none());
        assert!(find_table_at_cursor(&text, text.len()).is_none());
        assert!(find_table_at_cursor(&text, text.len() + 10).is_none());
    }

    #[test]
    fn test_locate_without_blank_lines() {
        let text = format!("intro\n{}\noutro", TABLE);
        let table = find_table_at_cursor(&text, 8).unwrap();
        assert_eq!(table.start, 6);
        assert_eq!(table.end, 6 + TABLE.len());
        assert_eq!(table.source(&text), TABLE);
    }

    #[test]
    fn test_adjacent_tables_not_merged() {
        let text = "| a |\n| b |\nbreak\n| c |";
        let first = find_table_at_cursor(text, 1).unwrap();
        assert_eq!(first.rows.len(), 2);
        assert_eq!(first.end, 11);

        let second = find_table_at_cursor(text, 19).unwrap();
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].cells[0].content, "c");
    }

    #[test]
    fn test_locate_without_alignment_row() {
        let table = find_table_at_cursor("| a | b |\n| c | d |", 0).unwrap();
        assert_eq!(table.alignment_row_index, None);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_only_first_alignment_line_is_alignment_row() {
        let text = "| a |\n| --- |\n| --- |";
        let table = find_table_at_cursor(text, 0).unwrap();
        assert_eq!(table.alignment_row_index, Some(1));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].cells[0].content, "---");
    }

    #[test]
    fn test_alignment_index_counts_block_lines() {
        let text = "| a |\n| b |\n|:-:|\n| c |";
        let table = find_table_at_cursor(text, 0).unwrap();
        assert_eq!(table.alignment_row_index, Some(2));
        assert_eq!(table.alignment_line_span(text), Some((12, 17)));
    }

    #[test]
    fn test_locate_crlf_table_before_trailing_newline() {
        let text = "| a |\r\n| b |\r\n";
        let table = find_table_at_cursor(text, 8).unwrap();
        assert_eq!((table.start, table.end), (0, 13));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].cells[0].content, "b");
        assert!(find_table_at_cursor(text, 14).is_none());
    }
}
