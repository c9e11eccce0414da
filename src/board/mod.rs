//! Result board data model
//!
//! A board is one parameter's fixed-shape comparison table across
//! root-finding methods, as returned by the external engine:
//!
//! ```text
//! | a = 1.4        | Bissecção  | Posição Falsa | Newton Raphson |   row 0: headers
//! | Dados Iniciais | [A, B]     | [A, B]        | x_0 = value    |   row 1: initial data
//! | x              | ...        | ...           | ...            |   row 2: root estimate
//! | f(x)           | ...        | ...           | ...            |   row 3: residual
//! | Erro           | ...        | ...           | ...            |   row 4: error
//! | Convergiu      | Sim        | Sim           | Não            |   row 5: status
//! | Num Iter       | 17         | 9             | 100            |   row 6: iteration count
//! ```
//!
//! # Positional cell typing
//!
//! Whether a cell is a number or label text is determined by *position*
//! (row 0 and column 0 are always text), not by inspecting content at each
//! read site. The tagged [`Cell`] variant is assigned once, at board
//! construction, so the extractors never repeat fragile position checks.
//!
//! # Lifecycle
//!
//! Boards are produced fresh per comparison run (one per parameter), held
//! in memory for the current render cycle, and replaced wholesale on the
//! next run. Nothing is persisted.

use thiserror::Error;

use crate::format::Annotator;

/// Number of rows in the canonical board layout.
pub const ROW_COUNT: usize = 7;

/// Row 0: parameter identifier followed by one method name per column.
pub const HEADER_ROW: usize = 0;
/// Row 1: bracketing interval or initial guess per method (free text).
pub const INITIAL_ROW: usize = 1;
/// Row 2: root estimate `x` per method — the value the convergence chart reads.
pub const VALUE_ROW: usize = 2;
/// Row 3: residual `f(x)` per method.
pub const RESIDUAL_ROW: usize = 3;
/// Row 4: error estimate per method.
pub const ERROR_ROW: usize = 4;
/// Row 5: convergence status per method (textual verdict).
pub const STATUS_ROW: usize = 5;
/// Row 6: final iteration count per method.
pub const ITERATIONS_ROW: usize = 6;

/// One board cell: label text or a numeric value.
///
/// The variant is fixed at construction from the cell's position (see the
/// module docs); it is never re-inferred when reading.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }
}

/// Shape violations detected at board construction.
///
/// A malformed shape is an engine-contract breach (the engine promises
/// `ROW_COUNT` rows and one column per method plus the label column); it is
/// rejected here once so that the extractors can index freely afterwards.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board must have exactly {ROW_COUNT} rows. got {got}")]
    WrongRowCount { got: usize },

    #[error("board needs a label column plus at least one method column. got {got}")]
    TooFewColumns { got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    #[error("column {column} has {got} cells, expected {expected}")]
    RaggedColumn { column: usize, got: usize, expected: usize },
}

/// Fixed-shape per-parameter comparison table.
///
/// Always `ROW_COUNT` rows by `methods + 1` columns; the shape is validated
/// at construction and can be relied on afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from the engine's column-major raw output.
    ///
    /// The engine emits one string vector per column — the label column
    /// first, then one column per method, each with `ROW_COUNT` entries.
    /// Cells are typed positionally while transposing: numeric positions
    /// (value, residual, error and iteration rows of method columns) become
    /// [`Cell::Number`] when their string parses as a finite float, and
    /// stay [`Cell::Text`] otherwise (e.g. a "did not converge" marker in a
    /// value cell). Header row, label column, initial-data row and status
    /// row are always text.
    ///
    /// # Errors
    ///
    /// [`BoardError`] when the column count or any column length violates
    /// the canonical shape.
    pub fn from_columns(columns: &[Vec<String>]) -> Result<Self, BoardError> {
        if columns.len() < 2 {
            return Err(BoardError::TooFewColumns { got: columns.len() });
        }
        for (column, entries) in columns.iter().enumerate() {
            if entries.len() != ROW_COUNT {
                return Err(BoardError::RaggedColumn {
                    column,
                    got: entries.len(),
                    expected: ROW_COUNT,
                });
            }
        }

        let rows = (0..ROW_COUNT)
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(col, entries)| type_cell(row, col, &entries[row]))
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    /// Build a board from already-tagged row-major cells.
    ///
    /// Used by the display pass and by tests that construct mixed
    /// text/number boards directly. The same shape invariant applies.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        if rows.len() != ROW_COUNT {
            return Err(BoardError::WrongRowCount { got: rows.len() });
        }
        let expected = rows[0].len();
        if expected < 2 {
            return Err(BoardError::TooFewColumns { got: expected });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(BoardError::RaggedRow {
                    row,
                    got: cells.len(),
                    expected,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of columns, including the label column.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of method columns (columns minus the label column).
    pub fn method_count(&self) -> usize {
        self.column_count() - 1
    }

    /// Cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Out-of-range indices panic; the shape is guaranteed at construction,
    /// so this only fires on caller bugs.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.rows[row][column]
    }

    /// All cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// Render the board for typeset display.
    ///
    /// Every cell becomes text: numbers are formatted directly in
    /// scientific notation, free-form text goes through the annotator's
    /// two-pass rewrite. The result is still a valid board — the
    /// extractors read rendered and raw boards identically.
    pub fn annotated(&self, annotator: &Annotator) -> Board {
        let rows = self
            .rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| match cell {
                        Cell::Number(v) => Cell::Text(annotator.formatter().format(*v)),
                        Cell::Text(s) => Cell::Text(annotator.annotate(s)),
                    })
                    .collect()
            })
            .collect();

        // Shape is preserved cell-for-cell
        Board { rows }
    }
}

/// Assign the tagged cell variant from position.
///
/// Numeric positions are the per-method intermediate rows (value, residual,
/// error) and the iteration row; everything else — header row, label
/// column, initial data, status — is text by the board contract.
fn type_cell(row: usize, column: usize, raw: &str) -> Cell {
    let numeric_position =
        column > 0 && matches!(row, VALUE_ROW..=ERROR_ROW | ITERATIONS_ROW);

    if numeric_position {
        if let Ok(value) = raw.trim().parse::<f64>() {
            if value.is_finite() {
                return Cell::Number(value);
            }
        }
    }
    Cell::Text(raw.to_string())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_column(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn sample_columns() -> Vec<Vec<String>> {
        vec![
            raw_column(&["a = 1.4", "Dados Iniciais", "x", "f(x)", "Erro", "Convergiu", "Num Iter"]),
            raw_column(&["Bissecção", "[0.5,1.5]", "1.000000", "0.000003", "0.000008", "Sim", "17"]),
            raw_column(&["Newton Raphson", "x_0 = 2.7", "—", "—", "—", "Não", "100"]),
        ]
    }

    #[test]
    fn from_columns_types_cells_positionally() {
        let board = Board::from_columns(&sample_columns()).unwrap();

        assert_eq!(board.column_count(), 3);
        assert_eq!(board.method_count(), 2);

        // Header row and label column are always text
        assert_eq!(board.cell(HEADER_ROW, 1).as_text(), Some("Bissecção"));
        assert_eq!(board.cell(VALUE_ROW, 0).as_text(), Some("x"));

        // Numeric positions parse to numbers...
        assert_eq!(board.cell(VALUE_ROW, 1).as_number(), Some(1.0));
        assert_eq!(board.cell(ITERATIONS_ROW, 1).as_number(), Some(17.0));

        // ...unless the content is a terminal marker
        assert_eq!(board.cell(VALUE_ROW, 2).as_text(), Some("—"));

        // Status row stays text even when it could parse
        assert_eq!(board.cell(STATUS_ROW, 1).as_text(), Some("Sim"));
    }

    #[test]
    fn from_columns_rejects_short_column() {
        let mut columns = sample_columns();
        columns[1].pop();
        let err = Board::from_columns(&columns).unwrap_err();
        assert!(matches!(err, BoardError::RaggedColumn { column: 1, got: 6, .. }));
    }

    #[test]
    fn from_columns_rejects_missing_method_columns() {
        let columns = vec![raw_column(&["a", "b", "c", "d", "e", "f", "g"])];
        let err = Board::from_columns(&columns).unwrap_err();
        assert!(matches!(err, BoardError::TooFewColumns { got: 1 }));
    }

    #[test]
    fn from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![Cell::text("a"), Cell::text("b")]; 5];
        let err = Board::from_rows(rows).unwrap_err();
        assert!(matches!(err, BoardError::WrongRowCount { got: 5 }));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let mut rows = vec![vec![Cell::text("a"), Cell::text("b")]; ROW_COUNT];
        rows[3].push(Cell::Number(1.0));
        let err = Board::from_rows(rows).unwrap_err();
        assert!(matches!(err, BoardError::RaggedRow { row: 3, got: 3, expected: 2 }));
    }

    #[test]
    fn annotated_board_is_all_text_and_same_shape() {
        let board = Board::from_columns(&sample_columns()).unwrap();
        let rendered = board.annotated(&Annotator::new());

        assert_eq!(rendered.column_count(), board.column_count());
        for row in 0..ROW_COUNT {
            for col in 0..rendered.column_count() {
                assert!(rendered.cell(row, col).as_text().is_some());
            }
        }

        // The numeric value cell is now a typeset span
        assert_eq!(rendered.cell(VALUE_ROW, 1).as_text(), Some(r"\(1.00\)"));
        // The subscripted initial guess became a single span
        assert_eq!(rendered.cell(INITIAL_ROW, 2).as_text(), Some(r"\(x_{0} = 2.70\)"));
    }
}
