//! Cell addressing: cursor offset to grid address, and Tab/Shift+Tab movement
//!
//! Navigation stops at the grid edges. Extending the table when moving past
//! the last cell is left to the caller.

use super::model::{CellAddress, CellTarget, TableCell, TableInfo};

/// Map a cursor offset to the cell it sits in.
///
/// A cursor on a pipe between cells snaps forward to the next cell; past the
/// last cell it snaps to the last one. Returns `None` when no row contains the
/// cursor (outside the block, or on the alignment line) and when the row has
/// no cells at all (a bare `|` line), so a returned address always names an
/// existing cell.
pub fn find_cell_at_cursor(table: &TableInfo, cursor: usize) -> Option<CellAddress> {
    let row_idx = table.rows.iter().position(|row| row.contains(cursor))?;
    let cells = &table.rows[row_idx].cells;
    if cells.is_empty() {
        return None;
    }
    Some(CellAddress::new(row_idx, column_at_offset(cells, cursor)))
}

/// Column of the cell containing `cursor` within one line's cells, with the
/// same snapping rules as `find_cell_at_cursor`. An empty row yields 0.
pub fn column_at_offset(cells: &[TableCell], cursor: usize) -> usize {
    if let Some(col) = cells.iter().position(|cell| cell.contains(cursor)) {
        return col;
    }

    cells
        .iter()
        .position(|cell| cell.start > cursor)
        .unwrap_or_else(|| cells.len().saturating_sub(1))
}

/// The cell after `(row, col)`: next column, else the first cell of the next
/// row, else `None`.
pub fn get_next_cell(table: &TableInfo, row: usize, col: usize) -> Option<CellTarget> {
    let current = table.rows.get(row)?;

    if let Some(cell) = current.cells.get(col + 1) {
        return Some(CellTarget {
            row,
            col: col + 1,
            pos: cell.cursor_anchor(),
        });
    }

    let next_row = table.rows.get(row + 1)?;
    let cell = next_row.cells.first()?;
    Some(CellTarget {
        row: row + 1,
        col: 0,
        pos: cell.cursor_anchor(),
    })
}

/// The cell before `(row, col)`: previous column, else the last cell of the
/// previous row, else `None`.
pub fn get_previous_cell(table: &TableInfo, row: usize, col: usize) -> Option<CellTarget> {
    let current = table.rows.get(row)?;

    if col > 0 {
        if let Some(cell) = current.cells.get(col - 1) {
            return Some(CellTarget {
                row,
                col: col - 1,
                pos: cell.cursor_anchor(),
            });
        }
    }

    let prev_row = table.rows.get(row.checked_sub(1)?)?;
    let last_col = prev_row.cells.len().checked_sub(1)?;
    let cell = &prev_row.cells[last_col];
    Some(CellTarget {
        row: row - 1,
        col: last_col,
        pos: cell.cursor_anchor(),
    })
}
