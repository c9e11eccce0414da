//! Engine trait, configuration and errors

use thiserror::Error;

use crate::board::{Board, BoardError};

/// One raw board as the engine emits it: column-major, label column first,
/// then one column of seven strings per method.
pub type RawBoard = Vec<Vec<String>>;

/// Errors at the engine boundary.
///
/// Invalid configuration and invocation failures surface to the caller,
/// who retries only by explicitly re-running the comparison — never
/// automatically.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },

    #[error("malformed board for parameter {parameter}: {source}")]
    MalformedBoard {
        parameter: f64,
        #[source]
        source: BoardError,
    },

    #[error("engine invocation failed: {message}")]
    Invocation { message: String },
}

/// Engine run configuration: convergence tolerance and iteration cap,
/// applied to every method and every parameter of one run.
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::engine::EngineConfig;
///
/// let config = EngineConfig::new(1e-5, 100).unwrap();
/// assert!(EngineConfig::new(-1.0, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for EngineConfig {
    /// The reference engine's defaults: tolerance `1e-5`, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

impl EngineConfig {
    /// Build a validated configuration.
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, EngineError> {
        let config = Self { tolerance, max_iterations };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(EngineError::InvalidTolerance { got: self.tolerance });
        }
        if self.max_iterations == 0 {
            return Err(EngineError::InvalidMaxIterations { got: self.max_iterations });
        }
        Ok(())
    }
}

/// The external numerical engine.
///
/// Implementations run the root-finding methods for every parameter and
/// return one raw board per parameter, in parameter order. This crate
/// never inspects how the roots are computed — only the returned board
/// shape is contractual.
pub trait RootEngine {
    /// Engine name, for diagnostics and export metadata.
    fn name(&self) -> &str;

    /// Compute one comparison board per parameter.
    fn comparative_boards(
        &self,
        parameters: &[f64],
        config: &EngineConfig,
    ) -> Result<Vec<RawBoard>, EngineError>;
}

/// Run one comparison: validate the configuration, invoke the engine, and
/// type-check every returned board.
///
/// # Errors
///
/// - configuration violations, before the engine is touched
/// - engine invocation failures, passed through
/// - [`EngineError::MalformedBoard`] when a returned board violates the
///   canonical shape — a contract breach, not a per-cell tolerance case
pub fn run_comparison(
    engine: &dyn RootEngine,
    parameters: &[f64],
    config: &EngineConfig,
) -> Result<Vec<Board>, EngineError> {
    config.validate()?;

    let raw_boards = engine.comparative_boards(parameters, config)?;

    raw_boards
        .into_iter()
        .zip(parameters)
        .map(|(raw, &parameter)| {
            Board::from_columns(&raw)
                .map_err(|source| EngineError::MalformedBoard { parameter, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_bad_tolerance() {
        assert!(matches!(
            EngineConfig::new(0.0, 100),
            Err(EngineError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            EngineConfig::new(f64::NAN, 100),
            Err(EngineError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn config_rejects_zero_iterations() {
        assert!(matches!(
            EngineConfig::new(1e-5, 0),
            Err(EngineError::InvalidMaxIterations { got: 0 })
        ));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    struct MalformedEngine;

    impl RootEngine for MalformedEngine {
        fn name(&self) -> &str {
            "malformed"
        }

        fn comparative_boards(
            &self,
            parameters: &[f64],
            _config: &EngineConfig,
        ) -> Result<Vec<RawBoard>, EngineError> {
            // One column only: violates the board shape
            Ok(parameters
                .iter()
                .map(|_| vec![vec!["x".to_string(); 7]])
                .collect())
        }
    }

    #[test]
    fn malformed_board_is_an_engine_contract_breach() {
        let err = run_comparison(&MalformedEngine, &[1.5], &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard { parameter, .. } if parameter == 1.5));
    }
}
