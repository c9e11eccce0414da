//! Iteration counts for one method column
//!
//! The iteration charts plot, per parameter, how many iterations one fixed
//! method needed, partitioned by whether that method converged. This
//! extractor reads both facts from a board.

use crate::board::{Board, Cell, ITERATIONS_ROW, STATUS_ROW};
use crate::format::ScientificFormatter;

use super::{is_affirmative, DEFAULT_AFFIRMATIVE_TOKEN};

/// One method's iteration data for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationSample {
    pub iterations: usize,
    pub converged: bool,
}

/// Extracts the iteration count and convergence flag of one fixed method
/// column.
///
/// Column 1 is the first method (the reference engine's bisection column).
///
/// # Rendered cells
///
/// On a rendered board the iteration count is a typeset span like
/// `\(1.70 \times 10^{1}\)`. The cell is parsed with the full scientific
/// parser and rounded back to an integer — a raw integer parse of that
/// text would read `1` and break the display round-trip.
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::board::Board;
/// use rootcmp_rs::extract::IterationsExtractor;
///
/// # fn demo(board: &Board) {
/// let extractor = IterationsExtractor::new(1);
/// if let Some(sample) = extractor.extract(board) {
///     println!("{} iterations, converged: {}", sample.iterations, sample.converged);
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IterationsExtractor {
    parser: ScientificFormatter,
    method_column: usize,
    token: String,
}

impl IterationsExtractor {
    pub fn new(method_column: usize) -> Self {
        Self {
            parser: ScientificFormatter::new(),
            method_column,
            token: DEFAULT_AFFIRMATIVE_TOKEN.to_string(),
        }
    }

    /// Use a different affirmative token for the status classification.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// The column this extractor reads.
    pub fn method_column(&self) -> usize {
        self.method_column
    }

    /// Read the iteration count and convergence flag for the bound column.
    ///
    /// Returns `None` when the iteration cell is unparseable, non-finite or
    /// negative, or when the bound column does not exist on this board (the
    /// caller skips such parameters entirely). Never panics.
    pub fn extract(&self, board: &Board) -> Option<IterationSample> {
        if self.method_column == 0 || self.method_column >= board.column_count() {
            log::warn!(
                "method column {} out of range for a board with {} columns",
                self.method_column,
                board.column_count()
            );
            return None;
        }

        let converged = is_affirmative(board.cell(STATUS_ROW, self.method_column), &self.token);

        let raw = match board.cell(ITERATIONS_ROW, self.method_column) {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => self.parser.parse(s),
        };

        let count = raw.filter(|v| v.is_finite() && *v >= 0.0)?;
        Some(IterationSample {
            iterations: count.round() as usize,
            converged,
        })
    }
}
