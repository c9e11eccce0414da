//! Mock engines for testing the comparison pipeline
//!
//! [`MockEngine`] stands in for the external numerical engine: it emits
//! deterministic column-major boards in the canonical shape, with known
//! roots and iteration counts, so the extraction and assembly stages can be
//! verified end to end without a real solver.

use rootcmp_rs::engine::{EngineConfig, EngineError, RawBoard, RootEngine};

/// Deterministic fake engine with three method columns.
///
/// For every parameter `a`:
///
/// - the "root" is simply `a / 2.0`, so expected chart values are trivial
///   to compute in the test
/// - all methods converge iff `a <= diverge_above`; a diverged method
///   reports the `—` marker in its value cell, `"Não"` status, and the
///   iteration cap as its count
/// - iteration counts are fixed per method (bisection slowest), shifted by
///   the parameter index so boards are distinguishable
pub struct MockEngine {
    /// Parameters above this bound produce fully diverged boards.
    pub diverge_above: f64,
}

impl MockEngine {
    pub fn new(diverge_above: f64) -> Self {
        Self { diverge_above }
    }

    /// The root every converged method reports for parameter `a`.
    pub fn expected_root(a: f64) -> f64 {
        a / 2.0
    }

    /// The bisection iteration count for the parameter at `index`.
    pub fn expected_bisection_iterations(index: usize) -> usize {
        17 + index
    }

    fn board(&self, a: f64, index: usize, config: &EngineConfig) -> RawBoard {
        let converged = a <= self.diverge_above;
        let root = Self::expected_root(a);

        let label_column = vec![
            format!("a = {a}"),
            "Dados Iniciais".to_string(),
            "x".to_string(),
            "f(x)".to_string(),
            "Erro".to_string(),
            "Convergiu".to_string(),
            "Número de Iterações".to_string(),
        ];

        let method = |name: &str, initial: String, iterations: usize| -> Vec<String> {
            if converged {
                vec![
                    name.to_string(),
                    initial,
                    format!("{root}"),
                    "0.000001".to_string(),
                    format!("{}", config.tolerance / 2.0),
                    "Sim".to_string(),
                    format!("{iterations}"),
                ]
            } else {
                vec![
                    name.to_string(),
                    initial,
                    "—".to_string(),
                    "—".to_string(),
                    "—".to_string(),
                    "Não".to_string(),
                    format!("{}", config.max_iterations),
                ]
            }
        };

        vec![
            label_column,
            method(
                "Bissecção",
                format!("[{},{}]", root - 1.0, root + 1.0),
                Self::expected_bisection_iterations(index),
            ),
            method(
                "Posição Falsa",
                format!("[{},{}]", root - 1.0, root + 1.0),
                9 + index,
            ),
            method("Newton Raphson", format!("x_0 = {root}"), 4 + index),
        ]
    }
}

impl RootEngine for MockEngine {
    fn name(&self) -> &str {
        "mock-engine"
    }

    fn comparative_boards(
        &self,
        parameters: &[f64],
        config: &EngineConfig,
    ) -> Result<Vec<RawBoard>, EngineError> {
        Ok(parameters
            .iter()
            .enumerate()
            .map(|(index, &a)| self.board(a, index, config))
            .collect())
    }
}

/// Engine whose invocation always fails, for error-path tests.
pub struct FailingEngine;

impl RootEngine for FailingEngine {
    fn name(&self) -> &str {
        "failing-engine"
    }

    fn comparative_boards(
        &self,
        _parameters: &[f64],
        _config: &EngineConfig,
    ) -> Result<Vec<RawBoard>, EngineError> {
        Err(EngineError::Invocation {
            message: "module did not load".to_string(),
        })
    }
}
