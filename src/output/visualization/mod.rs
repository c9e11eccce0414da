//! Scatter-plot rendering of chart series
//!
//! Renders the converged / not-converged partition of a
//! [`crate::chart::ChartSeries`] as a two-color scatter plot, using the
//! `plotters` backends (PNG or SVG, chosen by file extension).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rootcmp_rs::output::visualization::{plot_series, PlotConfig};
//!
//! // Convergence chart with default styling
//! plot_series(&series, "convergence.png", None)?;
//!
//! // Iteration chart with a custom title
//! let config = PlotConfig::iterations("Bisection iterations");
//! plot_series(&series, "iterations.svg", Some(&config))?;
//! ```

pub mod config;
pub mod scatter;

pub use config::{PlotConfig, NO_TITLE};
pub use scatter::plot_series;
