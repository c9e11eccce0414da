//! rootcmp-rs: Root-Finding Method Comparison Pipeline
//!
//! A display-formatting and chart-data extraction pipeline for comparing
//! root-finding numerical methods (bisection, false position, Newton-Raphson)
//! across a set of scalar parameters.
//!
//! # Architecture
//!
//! The crate is built on two core principles:
//!
//! 1. **Separation of computation and presentation**
//!    - An external numerical engine computes the per-parameter comparison
//!      boards (the [`engine`] module only defines that boundary)
//!    - This crate formats boards for typeset display and extracts chart
//!      data back out of them
//!
//! 2. **Round-trip correctness**
//!    - Every numeric cell rendered by the display pass can be read back by
//!      the extractors, so charts can be built from rendered or raw boards
//!
//! # Data Flow
//!
//! ```text
//! engine output ──► Board ──► Board::annotated() ──► table rendering
//!                     │
//!                     ├──► ConvergenceExtractor ──┐
//!                     └──► IterationsExtractor ───┴──► ChartSeries ──► scatter plot / CSV
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use rootcmp_rs::board::Board;
//! use rootcmp_rs::format::Annotator;
//! use rootcmp_rs::extract::ConvergenceExtractor;
//! use rootcmp_rs::chart::assemble_convergence;
//!
//! # fn demo(raw_boards: Vec<Vec<Vec<String>>>, parameters: Vec<f64>) -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Type the engine's raw string boards
//! let boards: Vec<Board> = raw_boards
//!     .iter()
//!     .map(|raw| Board::from_columns(raw))
//!     .collect::<Result<_, _>>()?;
//!
//! // 2. Render for display (typeset scientific notation)
//! let annotator = Annotator::new();
//! let rendered: Vec<Board> = boards.iter().map(|b| b.annotated(&annotator)).collect();
//!
//! // 3. Extract chart data (works on raw or rendered boards)
//! let extractor = ConvergenceExtractor::new();
//! let series = assemble_convergence(&parameters, &rendered, &extractor);
//!
//! println!("{} converged parameters", series.converged.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`format`]: Scientific-notation formatting and free-text annotation
//! - [`board`]: The fixed-shape per-parameter comparison board
//! - [`extract`]: Convergence-value and iteration-count extraction
//! - [`chart`]: Chart series assembly (converged / not-converged partition)
//! - [`engine`]: External numerical engine boundary
//! - [`output`]: Scatter plots and CSV export (optional surfaces)

pub mod board;
pub mod chart;
pub mod engine;
pub mod extract;
pub mod format;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use rootcmp_rs::prelude::*;
    //! ```
    pub use crate::board::{Board, BoardError, Cell};
    pub use crate::chart::{assemble_convergence, assemble_iterations, ChartSeries, DataPoint};
    pub use crate::engine::{run_comparison, EngineConfig, EngineError, RawBoard, RootEngine};
    pub use crate::extract::{ConvergenceExtractor, IterationSample, IterationsExtractor};
    pub use crate::format::{Annotator, ScientificFormatter};
}
