//! Plot configuration for the scatter charts

use plotters::prelude::*;

/// Marker color of the converged series (the UI's blue, `#2563eb`).
pub const CONVERGED_COLOR: RGBColor = RGBColor(37, 99, 235);

/// Marker color of the not-converged series (the UI's red, `#dc2626`).
pub const NOT_CONVERGED_COLOR: RGBColor = RGBColor(220, 38, 38);

/// Configuration for customizing scatter plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `converged_color`, `not_converged_color`: Series marker colors
/// - `background`: Background color
/// - `marker_size`: Circle radius in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::convergence("Mean displacement vs a");
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "Parameter a")
    pub xlabel: String,

    /// Y-axis label (set by the specific chart constructor)
    pub ylabel: String,

    /// Converged series marker color
    pub converged_color: RGBColor,

    /// Not-converged series marker color
    pub not_converged_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Marker radius in pixels (default: 5)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Comparison".to_string(),
            xlabel: "Parameter a".to_string(),
            ylabel: String::new(),
            converged_color: CONVERGED_COLOR,
            not_converged_color: NOT_CONVERGED_COLOR,
            background: WHITE,
            marker_size: 5,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (the chart constructor's default is used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for convergence charts: mean converged root estimate vs `a`.
    pub fn convergence(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.ylabel = "Mean converged x".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Convergence".to_string());
        config
    }

    /// Config for iteration charts: iteration count vs `a`.
    pub fn iterations(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.ylabel = "Iterations".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Iterations".to_string());
        config
    }
}
