//! Scatter-plot rendering of assembled chart series

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use crate::chart::ChartSeries;

use super::config::{PlotConfig, NO_TITLE};

/// Plot a chart series as a two-color scatter plot.
///
/// Converged points are drawn in `config.converged_color`, not-converged
/// points in `config.not_converged_color`, each with its own legend entry.
/// The backend is chosen by the output extension: `.svg` renders a vector
/// file, everything else a bitmap.
///
/// # Arguments
///
/// * `series`      — Assembled points (see [`crate::chart`])
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses the
///                   convergence-chart defaults
///
/// # Errors
///
/// Returns `Err` if `series` is empty or the backend cannot write to
/// `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use rootcmp_rs::output::visualization::plot_series;
///
/// plot_series(&series, "convergence.png", None)?;
/// ```
pub fn plot_series(
    series: &ChartSeries,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if series.is_empty() {
        return Err("No data points to plot".into());
    }

    let default_config = PlotConfig::convergence(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_range, y_range) = axis_ranges(series);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, series, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, series, config, x_range, y_range)
        }
    }
}

/// Axis ranges covering every point of both series, with 10% padding.
///
/// Degenerate ranges (a single point, or all points on one line) are
/// widened by ±0.5 so the chart area never collapses.
fn axis_ranges(series: &ChartSeries) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for point in series.all_points() {
        x_min = x_min.min(point.a);
        x_max = x_max.max(point.a);
        y_min = y_min.min(point.value);
        y_max = y_max.max(point.value);
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.1;
    (min - pad)..(max + pad)
}

/// Render the scatter plot with the given drawing backend
fn plot_series_impl<DB: DrawingBackend>(
    backend: DB,
    series: &ChartSeries,
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .draw()?;
    }

    let converged_color = config.converged_color;
    chart
        .draw_series(series.converged.iter().map(|p| {
            Circle::new((p.a, p.value), config.marker_size, converged_color.filled())
        }))?
        .label("Converged")
        .legend(move |(x, y)| Circle::new((x + 10, y), 5, converged_color.filled()));

    let not_converged_color = config.not_converged_color;
    chart
        .draw_series(series.not_converged.iter().map(|p| {
            Circle::new((p.a, p.value), config.marker_size, not_converged_color.filled())
        }))?
        .label("Not converged")
        .legend(move |(x, y)| Circle::new((x + 10, y), 5, not_converged_color.filled()));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
