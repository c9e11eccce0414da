//! CSV export for assembled chart series
//!
//! Writes one row per data point — parameter, measurement, convergence
//! flag — with an optional metadata header describing the run, compatible
//! with Excel, pandas and most analysis tools.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use rootcmp_rs::output::export::{CsvExporter, CsvConfig, CsvMetadata, SeriesExporter};
//!
//! let metadata = CsvMetadata::from_run("wasm-engine", &config, 3);
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
//! exporter.export(&series, "comparison.csv")?;
//! ```
//!
//! **Output** (`comparison.csv`):
//!
//! ```csv
//! # Root-Finding Comparison Data
//! # Generated: 2026-08-26T15:30:00Z
//! # Engine: wasm-engine
//! # Tolerance: 0.00001
//! # Max Iterations: 100
//! # Parameters: 3
//! #
//! a,value,converged
//! 1.000000,2.718282,true
//! 1.400000,4.055200,true
//! 8.000000,0.000000,false
//! ```

use std::fs::File;
use std::io::Write;

use thiserror::Error;

use crate::chart::ChartSeries;
use crate::engine::EngineConfig;

use super::SeriesExporter;

/// CSV export errors.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("series contains no data points")]
    EmptySeries,

    #[error("non-finite measurement for parameter {parameter}")]
    NonFinite { parameter: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with run info
/// - `metadata`: Run metadata to include
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only present fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Engine name (e.g. the wasm module identifier)
    pub engine_name: Option<String>,

    /// Convergence tolerance of the run
    pub tolerance: Option<f64>,

    /// Iteration cap of the run
    pub max_iterations: Option<usize>,

    /// Number of parameters compared
    pub parameter_count: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata from one comparison run.
    pub fn from_run(engine: &str, config: &EngineConfig, parameter_count: usize) -> Self {
        Self {
            engine_name: Some(engine.to_string()),
            tolerance: Some(config.tolerance),
            max_iterations: Some(config.max_iterations),
            parameter_count: Some(parameter_count),
            custom: Vec::new(),
        }
    }

    /// Add a custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

/// CSV exporter for chart series.
#[derive(Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl SeriesExporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, series: &ChartSeries, path: &str) -> Result<(), CsvError> {
        if series.is_empty() {
            return Err(CsvError::EmptySeries);
        }
        for point in series.all_points() {
            if !point.a.is_finite() || !point.value.is_finite() {
                return Err(CsvError::NonFinite { parameter: point.a });
            }
        }

        let mut file = File::create(path)?;

        if self.config.include_metadata {
            if let Some(metadata) = &self.config.metadata {
                write_metadata_header(&mut file, metadata)?;
            }
        }

        let d = self.config.delimiter;
        writeln!(file, "a{d}value{d}converged")?;

        // Converged points first, then not-converged
        for point in series.all_points() {
            writeln!(
                file,
                "{}{d}{}{d}{}",
                format_number(point.a, self.config.precision),
                format_number(point.value, self.config.precision),
                point.converged
            )?;
        }

        Ok(())
    }
}

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(file, "# Root-Finding Comparison Data")?;
    writeln!(file, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(engine) = &metadata.engine_name {
        writeln!(file, "# Engine: {}", engine)?;
    }
    if let Some(tolerance) = metadata.tolerance {
        writeln!(file, "# Tolerance: {}", tolerance)?;
    }
    if let Some(max_iterations) = metadata.max_iterations {
        writeln!(file, "# Max Iterations: {}", max_iterations)?;
    }
    if let Some(count) = metadata.parameter_count {
        writeln!(file, "# Parameters: {}", count)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }
    writeln!(file, "#")?;

    Ok(())
}

/// Format a number with the configured precision
fn format_number(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

// =================================================================================================
// Tests
// =================================================================================================
