//! Board construction helpers for integration tests

use rootcmp_rs::board::{Board, Cell, ITERATIONS_ROW, ROW_COUNT, STATUS_ROW, VALUE_ROW};

/// Build a board from column-major string literals, as the engine emits them.
///
/// Panics on a malformed shape; test inputs are fixed, so a panic here is a
/// test bug.
pub fn board_from_columns(columns: &[[&str; ROW_COUNT]]) -> Board {
    let raw: Vec<Vec<String>> = columns
        .iter()
        .map(|column| column.iter().map(|s| s.to_string()).collect())
        .collect();
    Board::from_columns(&raw).unwrap()
}

/// Build a board with one method column per entry, filling only the cells
/// the extractors read: status, root estimate and iteration count.
///
/// Every other cell is the placeholder label `"-"`.
pub fn typed_board(methods: &[(&str, Cell, Cell)]) -> Board {
    let columns = methods.len() + 1;
    let mut rows: Vec<Vec<Cell>> = (0..ROW_COUNT)
        .map(|_| vec![Cell::text("-"); columns])
        .collect();

    for (i, (status, value, iterations)) in methods.iter().enumerate() {
        rows[STATUS_ROW][i + 1] = Cell::text(*status);
        rows[VALUE_ROW][i + 1] = value.clone();
        rows[ITERATIONS_ROW][i + 1] = iterations.clone();
    }

    Board::from_rows(rows).unwrap()
}
