//! Export module for assembled chart series.
//!
//! # Architecture
//!
//! This module defines the [`SeriesExporter`] trait that abstracts the
//! export format. Each format is an independent implementation in its own
//! sub-module, so adding a format means adding a file, not modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use rootcmp_rs::output::export::{CsvExporter, SeriesExporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&series, "comparison.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::chart::ChartSeries;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers
/// can react precisely without boxing.
pub trait SeriesExporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export one assembled series to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is empty, contains non-finite
    /// measurements, or the path cannot be written.
    fn export(&self, series: &ChartSeries, path: &str) -> Result<(), Self::Error>;
}
