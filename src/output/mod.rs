//! Output module for assembled chart series
//!
//! - **Visualization**: PNG/SVG scatter plots using plotters
//! - **Export**: CSV export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Scatter plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── scatter.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! Both sub-modules consume a ready [`crate::chart::ChartSeries`]; neither
//! reaches back into boards or the engine.

pub mod export;
pub mod visualization;

pub use export::{CsvConfig, CsvError, CsvExporter, CsvMetadata, SeriesExporter};
pub use visualization::{plot_series, PlotConfig};
