//! Table engine tests against whole documents
//!
//! Every edit is followed by relocating the table in the new text, the way a
//! host does after each command.

mod common;

use common::{locate, split_cursor, with_cursor, SIMPLE_TABLE};
use pipegrid::table::{
    add_column_after, add_row_below, delete_row, find_cell_at_cursor, find_table_at_cursor,
    get_next_cell, get_previous_cell, insert_row, is_in_table, toggle_column_alignment, Alignment,
    CellAddress, RowFill, RowPlacement,
};

const EMBEDDED: &str = "Intro\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\nOutro";

// ========================================================================
// Location
// ========================================================================

#[test]
fn test_locate_table_between_paragraphs() {
    let table = locate(EMBEDDED, 29);

    assert_eq!((table.start, table.end), (7, 36));
    assert_eq!(table.alignment_row_index, Some(1));
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.source(EMBEDDED), "| a | b |\n|---|---|\n| 1 | 2 |");
}

#[test]
fn test_cursor_in_prose_is_not_in_table() {
    assert!(find_table_at_cursor(EMBEDDED, 2).is_none());
    assert!(find_table_at_cursor(EMBEDDED, 6).is_none());
    assert!(find_table_at_cursor(EMBEDDED, 40).is_none());
    assert!(!is_in_table(EMBEDDED, 40));
    assert!(is_in_table(EMBEDDED, 16));
}

#[test]
fn test_row_and_alignment_spans_round_trip() {
    let table = locate(SIMPLE_TABLE, 0);
    let lines: Vec<&str> = SIMPLE_TABLE.split('\n').collect();

    assert_eq!(table.rows[0].source(SIMPLE_TABLE), lines[0]);
    assert_eq!(table.rows[1].source(SIMPLE_TABLE), lines[2]);
    assert_eq!(table.rows[2].source(SIMPLE_TABLE), lines[3]);

    let (start, end) = table.alignment_line_span(SIMPLE_TABLE).unwrap();
    assert_eq!(&SIMPLE_TABLE[start..end], lines[1]);
}

#[test]
fn test_every_cursor_in_table_has_valid_address() {
    let table = locate(SIMPLE_TABLE, 0);
    let (align_start, align_end) = table.alignment_line_span(SIMPLE_TABLE).unwrap();

    for cursor in table.start..=table.end {
        match find_cell_at_cursor(&table, cursor) {
            Some(CellAddress { row, col }) => {
                assert!(row < table.rows.len(), "row {} at {}", row, cursor);
                assert!(col < table.rows[row].cells.len(), "col {} at {}", col, cursor);
            }
            None => assert!(
                (align_start..=align_end).contains(&cursor),
                "no cell at {}",
                with_cursor(SIMPLE_TABLE, cursor)
            ),
        }
    }
}

#[test]
fn test_bare_pipe_line_never_yields_an_address() {
    let text = "| a | b |\n|\n| c | d |";
    let table = locate(text, 0);
    assert_eq!(table.rows.len(), 3);

    for cursor in table.start..=table.end {
        if let Some(CellAddress { row, col }) = find_cell_at_cursor(&table, cursor) {
            assert!(
                col < table.rows[row].cells.len(),
                "invalid address at {}",
                with_cursor(text, cursor)
            );
        }
    }
    assert_eq!(find_cell_at_cursor(&table, 10), None);
}

// ========================================================================
// Navigation
// ========================================================================

#[test]
fn test_tab_walks_every_cell_and_stops() {
    let table = locate(SIMPLE_TABLE, 0);
    let total_cells: usize = table.rows.iter().map(|r| r.cells.len()).sum();

    let mut addr = CellAddress::new(0, 0);
    let mut visited = vec![addr];
    while let Some(target) = get_next_cell(&table, addr.row, addr.col) {
        let landed = find_cell_at_cursor(&table, target.pos).unwrap();
        assert_eq!(landed, CellAddress::new(target.row, target.col));
        addr = landed;
        visited.push(addr);
    }

    assert_eq!(visited.len(), total_cells);
    assert_eq!(addr, CellAddress::new(2, 1));
}

#[test]
fn test_last_cell_has_no_next() {
    let table = locate(SIMPLE_TABLE, 0);
    assert!(get_next_cell(&table, 2, 1).is_none());
    assert!(get_previous_cell(&table, 0, 0).is_none());
}

#[test]
fn test_shift_tab_wraps_to_previous_row() {
    let (text, cursor) = split_cursor("| Name | Age |\n| --- | --- |\n| A█nn | 31 |");
    let table = locate(&text, cursor);
    let addr = find_cell_at_cursor(&table, cursor).unwrap();
    assert_eq!(addr, CellAddress::new(1, 0));

    let target = get_previous_cell(&table, addr.row, addr.col).unwrap();
    assert_eq!((target.row, target.col), (0, 1));
    assert_eq!(with_cursor(&text, target.pos), "| Name | █Age |\n| --- | --- |\n| Ann | 31 |");
}

#[test]
fn test_cell_anchors_respect_char_boundaries() {
    let text = "| é | 中文 |\n|---|---|\n| ü | x |";
    let table = locate(text, 0);
    for row in &table.rows {
        for cell in &row.cells {
            assert!(text.is_char_boundary(cell.cursor_anchor()));
        }
    }
}

// ========================================================================
// Rows
// ========================================================================

#[test]
fn test_row_below_header_goes_under_alignment_row() {
    let table = locate(SIMPLE_TABLE, 0);
    let edit = add_row_below(SIMPLE_TABLE, &table, 0);

    assert_eq!(
        with_cursor(&edit.text, edit.cursor_pos.unwrap()),
        "| Name | Age |\n| --- | --- |\n| █  ||\n| Ann | 31 |\n| Bob | 42 |"
    );

    let relocated = locate(&edit.text, 0);
    assert_eq!(relocated.rows.len(), table.rows.len() + 1);
    assert_eq!(relocated.rows[1].cells.len(), 2);
    assert_eq!(relocated.alignment_row_index, Some(1));
}

#[test]
fn test_uniform_row_above() {
    let table = locate(SIMPLE_TABLE, 50);
    let edit = insert_row(SIMPLE_TABLE, &table, 2, RowPlacement::Above, RowFill::Uniform);

    assert_eq!(
        with_cursor(&edit.text, edit.cursor_pos.unwrap()),
        "| Name | Age |\n| --- | --- |\n| Ann | 31 |\n| █  |   |\n| Bob | 42 |"
    );
    assert_eq!(locate(&edit.text, 0).rows.len(), 4);
}

#[test]
fn test_delete_middle_row() {
    let table = locate(SIMPLE_TABLE, 0);
    let edit = delete_row(SIMPLE_TABLE, &table, 1);

    assert_eq!(
        with_cursor(&edit.text, edit.cursor_pos.unwrap()),
        "| Name | Age |\n| --- | --- |\n█| Bob | 42 |"
    );
    assert_eq!(locate(&edit.text, 0).rows.len(), table.rows.len() - 1);
}

#[test]
fn test_delete_last_row_takes_preceding_newline() {
    let table = locate(SIMPLE_TABLE, 0);
    let edit = delete_row(SIMPLE_TABLE, &table, 2);

    assert_eq!(edit.text, "| Name | Age |\n| --- | --- |\n| Ann | 31 |");
    assert_eq!(edit.cursor_pos, Some(41));
}

#[test]
fn test_delete_sole_data_row_leaves_header() {
    let text = "| H |\n|---|\n| x |";
    let table = locate(text, 0);
    let edit = delete_row(text, &table, 1);

    assert_eq!(edit.text, "| H |\n|---|");
    let relocated = locate(&edit.text, 0);
    assert_eq!(relocated.rows.len(), 1);
    assert!(relocated.has_alignment_row());
}

#[test]
fn test_delete_last_table_row_keeps_following_paragraph() {
    let table = locate(EMBEDDED, 29);
    let edit = delete_row(EMBEDDED, &table, 1);

    assert_eq!(edit.text, "Intro\n\n| a | b |\n|---|---|\n\nOutro");
}

// ========================================================================
// Columns and alignment
// ========================================================================

#[test]
fn test_column_after_first() {
    let table = locate(SIMPLE_TABLE, 0);
    let edit = add_column_after(SIMPLE_TABLE, &table, 0);

    assert_eq!(
        with_cursor(&edit.text, edit.cursor_pos.unwrap()),
        "| Name | █  | Age |\n| --- | --- | --- |\n| Ann |   | 31 |\n| Bob |   | 42 |"
    );

    let relocated = locate(&edit.text, 0);
    assert!(relocated.rows.iter().all(|r| r.cells.len() == 3));
    assert_eq!(relocated.alignment_cells(&edit.text).unwrap().len(), 3);
}

#[test]
fn test_toggle_first_column_to_center() {
    let table = locate(SIMPLE_TABLE, 0);
    let edit = toggle_column_alignment(SIMPLE_TABLE, &table, 0);

    assert_eq!(
        edit.text,
        "| Name | Age |\n| :---: | --- |\n| Ann | 31 |\n| Bob | 42 |"
    );
    assert_eq!(edit.cursor_pos, None);
}

#[test]
fn test_alignment_cycle_returns_to_start() {
    let mut text = SIMPLE_TABLE.to_string();
    let mut seen = Vec::new();

    for _ in 0..3 {
        let table = locate(&text, 0);
        text = toggle_column_alignment(&text, &table, 1).text;
        seen.push(locate(&text, 0).column_alignments(&text)[1]);
    }

    assert_eq!(seen, vec![Alignment::Center, Alignment::Right, Alignment::Left]);
    assert_eq!(text, SIMPLE_TABLE);
}

#[test]
fn test_toggle_without_alignment_row_is_noop() {
    let text = "| a | b |\n| 1 | 2 |";
    let table = locate(text, 0);
    let edit = toggle_column_alignment(text, &table, 0);

    assert_eq!(edit.text, text);
    assert_eq!(edit.cursor_pos, None);
}
