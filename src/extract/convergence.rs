//! Converged root estimates from one board
//!
//! For the convergence chart the measurement per parameter is the mean of
//! the root estimates of the methods that converged. This extractor
//! produces those per-method values; the averaging and series partitioning
//! happen in [`crate::chart`].

use crate::board::{Board, Cell, STATUS_ROW, VALUE_ROW};
use crate::format::ScientificFormatter;

use super::{is_affirmative, DEFAULT_AFFIRMATIVE_TOKEN};

/// Extracts the converged x-values of one board, in method-column order.
///
/// Works identically on raw boards (numeric value cells) and rendered
/// boards (typeset text cells), because the scientific parser inverts the
/// display formatting.
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::board::Board;
/// use rootcmp_rs::extract::ConvergenceExtractor;
///
/// # fn demo(board: &Board) {
/// let extractor = ConvergenceExtractor::new();
/// let values: Vec<f64> = extractor.extract(board);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceExtractor {
    parser: ScientificFormatter,
    token: String,
}

impl Default for ConvergenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvergenceExtractor {
    pub fn new() -> Self {
        Self {
            parser: ScientificFormatter::new(),
            token: DEFAULT_AFFIRMATIVE_TOKEN.to_string(),
        }
    }

    /// Use a different affirmative token for the status classification.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// The converged x-values of `board`, in column order.
    ///
    /// Per method column: classify the status cell; when converged, read
    /// the value-row cell (numbers directly, text through the scientific
    /// parser). Unparseable or non-finite values are logged and excluded.
    /// A board with zero convergent methods yields an empty vector, which
    /// the chart assembler treats as "not converged". Never panics on a
    /// well-shaped board.
    pub fn extract(&self, board: &Board) -> Vec<f64> {
        let mut values = Vec::with_capacity(board.method_count());

        for column in 1..board.column_count() {
            if !is_affirmative(board.cell(STATUS_ROW, column), &self.token) {
                continue;
            }

            let resolved = match board.cell(VALUE_ROW, column) {
                Cell::Number(v) => Some(*v),
                Cell::Text(s) => self.parser.parse(s),
            };

            match resolved.filter(|v| v.is_finite()) {
                Some(value) => values.push(value),
                None => log::warn!(
                    "convergent method column {column} has no readable value, excluding"
                ),
            }
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, ROW_COUNT};

    fn board(status: [&str; 3], values: [Cell; 3]) -> Board {
        let mut rows: Vec<Vec<Cell>> = (0..ROW_COUNT)
            .map(|_| vec![Cell::text("label"); 4])
            .collect();
        for (i, v) in values.into_iter().enumerate() {
            rows[VALUE_ROW][i + 1] = v;
        }
        for (i, s) in status.into_iter().enumerate() {
            rows[STATUS_ROW][i + 1] = Cell::text(s);
        }
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn collects_converged_columns_in_order() {
        let b = board(
            ["Sim", "Sim", "Não"],
            [Cell::Number(1.0), Cell::text("9.99e-1"), Cell::text("—")],
        );
        let values = ConvergenceExtractor::new().extract(&b);
        assert_eq!(values, vec![1.0, 0.999]);
    }

    #[test]
    fn unreadable_value_in_converged_column_is_excluded() {
        let b = board(
            ["Sim", "Sim", "Sim"],
            [Cell::Number(2.0), Cell::text("—"), Cell::Number(4.0)],
        );
        let values = ConvergenceExtractor::new().extract(&b);
        assert_eq!(values, vec![2.0, 4.0]);
    }

    #[test]
    fn zero_convergent_methods_yield_empty() {
        let b = board(
            ["Não", "timeout", "Não"],
            [Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)],
        );
        assert!(ConvergenceExtractor::new().extract(&b).is_empty());
    }

    #[test]
    fn reads_typeset_value_cells() {
        let b = board(
            ["Sim", "Não", "Não"],
            [
                Cell::text(r"\(1.25 \times 10^{-4}\)"),
                Cell::text("x"),
                Cell::text("x"),
            ],
        );
        let values = ConvergenceExtractor::new().extract(&b);
        assert_eq!(values.len(), 1);
        assert!((values[0] - 1.25e-4).abs() < 1e-16);
    }

    #[test]
    fn custom_token_changes_classification() {
        let b = board(
            ["yes", "no", "yes"],
            [Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)],
        );
        let values = ConvergenceExtractor::new().with_token("yes").extract(&b);
        assert_eq!(values, vec![1.0, 3.0]);
    }
}
