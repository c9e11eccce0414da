//! Chart-data extraction from result boards
//!
//! The inverse direction of the display pipeline: given a board (raw from
//! the engine or rendered by [`crate::board::Board::annotated`]), recover
//! the numeric convergence data the chart components plot.
//!
//! # Organization
//!
//! - **convergence**: [`ConvergenceExtractor`] — converged root estimates
//!   across all method columns of one board
//! - **iterations**: [`IterationsExtractor`] — iteration count and
//!   convergence flag for one fixed method column
//!
//! # Convergence classification
//!
//! A method converged iff its status cell's *text* contains the affirmative
//! token, case-insensitively (`"Sim"`, `"SIM (tol atingida)"` → converged;
//! `"Não"`, `"timeout"` → not). Classification never depends on whether a
//! value cell happened to parse — an unreadable value in a converged column
//! is an excluded data point, not a non-converged method.
//!
//! # Error posture
//!
//! Extraction is total over well-shaped boards: unparseable or non-finite
//! cells are logged and excluded, never raised.

pub mod convergence;
pub mod iterations;

pub use convergence::ConvergenceExtractor;
pub use iterations::{IterationSample, IterationsExtractor};

use crate::board::Cell;

/// Affirmative token of the engine's status strings.
///
/// The reference engine reports in Portuguese ("Sim" / "Não"); both
/// extractors accept a different token for other engines.
pub const DEFAULT_AFFIRMATIVE_TOKEN: &str = "sim";

/// Classify one status cell.
///
/// Converged iff the cell is text whose lowercase form contains the
/// lowercase token. A numeric status cell never classifies as converged —
/// the verdict is textual by contract.
pub(crate) fn is_affirmative(cell: &Cell, token: &str) -> bool {
    match cell {
        Cell::Text(s) => s.to_lowercase().contains(&token.to_lowercase()),
        Cell::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive_containment() {
        assert!(is_affirmative(&Cell::text("Sim"), DEFAULT_AFFIRMATIVE_TOKEN));
        assert!(is_affirmative(&Cell::text("SIM (tol atingida)"), DEFAULT_AFFIRMATIVE_TOKEN));
        assert!(!is_affirmative(&Cell::text("Não"), DEFAULT_AFFIRMATIVE_TOKEN));
        assert!(!is_affirmative(&Cell::text("timeout"), DEFAULT_AFFIRMATIVE_TOKEN));
    }

    #[test]
    fn numeric_status_cells_never_classify_converged() {
        assert!(!is_affirmative(&Cell::Number(1.0), DEFAULT_AFFIRMATIVE_TOKEN));
    }
}
