//! Chart series assembly
//!
//! Turns per-parameter boards into the two point series the scatter charts
//! plot: one for parameters where the method(s) converged, one for those
//! where they did not.
//!
//! # Pairing policy
//!
//! Parameters and boards are iterated pairwise up to the shorter length.
//! A length mismatch is *not* an error — the assembler truncates silently.
//! The comparison UI regenerates both lists together, so a mismatch only
//! appears transiently mid-refresh.

use crate::board::Board;
use crate::extract::{ConvergenceExtractor, IterationsExtractor};

/// One plotted point: parameter value, derived measurement, and the
/// convergence verdict that decided its series.
///
/// Ephemeral — created per chart render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Parameter value (x axis).
    pub a: f64,
    /// Measurement (y axis): mean converged root estimate, or iteration count.
    pub value: f64,
    pub converged: bool,
}

/// The two series of one scatter chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub converged: Vec<DataPoint>,
    pub not_converged: Vec<DataPoint>,
}

impl ChartSeries {
    /// Total number of points across both series.
    pub fn len(&self) -> usize {
        self.converged.len() + self.not_converged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converged.is_empty() && self.not_converged.is_empty()
    }

    /// All points, converged first.
    pub fn all_points(&self) -> impl Iterator<Item = &DataPoint> {
        self.converged.iter().chain(self.not_converged.iter())
    }
}

/// Assemble the convergence chart series.
///
/// Per parameter/board pair: when the extractor yields one or more
/// converged values, their arithmetic mean goes into `converged`; when it
/// yields none, a `(a, 0.0)` point goes into `not_converged`.
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::chart::assemble_convergence;
/// use rootcmp_rs::extract::ConvergenceExtractor;
/// # use rootcmp_rs::board::Board;
///
/// # fn demo(parameters: &[f64], boards: &[Board]) {
/// let series = assemble_convergence(parameters, boards, &ConvergenceExtractor::new());
/// for point in &series.converged {
///     println!("a = {}, mean x = {}", point.a, point.value);
/// }
/// # }
/// ```
pub fn assemble_convergence(
    parameters: &[f64],
    boards: &[Board],
    extractor: &ConvergenceExtractor,
) -> ChartSeries {
    let mut series = ChartSeries::default();

    for (&a, board) in parameters.iter().zip(boards) {
        let values = extractor.extract(board);
        if values.is_empty() {
            series.not_converged.push(DataPoint { a, value: 0.0, converged: false });
        } else {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            series.converged.push(DataPoint { a, value: mean, converged: true });
        }
    }

    series
}

/// Assemble an iteration chart series for the extractor's bound method
/// column.
///
/// Per parameter/board pair: the measurement is the parsed iteration
/// count; the convergence flag decides the series. Parameters whose count
/// cannot be read are skipped entirely — they appear in neither series.
pub fn assemble_iterations(
    parameters: &[f64],
    boards: &[Board],
    extractor: &IterationsExtractor,
) -> ChartSeries {
    let mut series = ChartSeries::default();

    for (&a, board) in parameters.iter().zip(boards) {
        let Some(sample) = extractor.extract(board) else {
            continue;
        };
        let point = DataPoint {
            a,
            value: sample.iterations as f64,
            converged: sample.converged,
        };
        if sample.converged {
            series.converged.push(point);
        } else {
            series.not_converged.push(point);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, ITERATIONS_ROW, ROW_COUNT, STATUS_ROW, VALUE_ROW};

    fn board(status: &str, value: f64, iterations: Cell) -> Board {
        let mut rows: Vec<Vec<Cell>> = (0..ROW_COUNT)
            .map(|_| vec![Cell::text("label"); 2])
            .collect();
        rows[STATUS_ROW][1] = Cell::text(status);
        rows[VALUE_ROW][1] = Cell::Number(value);
        rows[ITERATIONS_ROW][1] = iterations;
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn convergence_points_carry_the_mean() {
        let boards = vec![
            board("Sim", 2.0, Cell::Number(5.0)),
            board("Não", 9.0, Cell::Number(100.0)),
        ];
        let series = assemble_convergence(&[1.0, 2.0], &boards, &ConvergenceExtractor::new());

        assert_eq!(series.converged, vec![DataPoint { a: 1.0, value: 2.0, converged: true }]);
        assert_eq!(
            series.not_converged,
            vec![DataPoint { a: 2.0, value: 0.0, converged: false }]
        );
    }

    #[test]
    fn length_mismatch_truncates_silently() {
        let boards = vec![
            board("Sim", 1.0, Cell::Number(3.0)),
            board("Sim", 2.0, Cell::Number(4.0)),
        ];
        // Three parameters, two boards: exactly two pairs processed
        let series = assemble_convergence(&[1.0, 2.0, 3.0], &boards, &ConvergenceExtractor::new());
        assert_eq!(series.len(), 2);

        // And the other way around
        let series = assemble_convergence(&[1.0], &boards, &ConvergenceExtractor::new());
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn iteration_points_split_by_flag() {
        let boards = vec![
            board("Sim", 1.0, Cell::Number(17.0)),
            board("Não", 1.0, Cell::Number(100.0)),
        ];
        let series =
            assemble_iterations(&[0.5, 0.7], &boards, &IterationsExtractor::new(1));

        assert_eq!(series.converged, vec![DataPoint { a: 0.5, value: 17.0, converged: true }]);
        assert_eq!(
            series.not_converged,
            vec![DataPoint { a: 0.7, value: 100.0, converged: false }]
        );
    }

    #[test]
    fn unreadable_iteration_count_skips_the_parameter() {
        let boards = vec![
            board("Sim", 1.0, Cell::text("—")),
            board("Sim", 1.0, Cell::Number(9.0)),
        ];
        let series =
            assemble_iterations(&[0.5, 0.7], &boards, &IterationsExtractor::new(1));

        // Parameter 0.5 is in neither series
        assert_eq!(series.len(), 1);
        assert_eq!(series.converged[0].a, 0.7);
    }
}
