//! Plot configuration for simulation charts

use plotters::prelude::*;

/// Orange used for the efficiency panel
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Configuration for customizing the simulation chart
///
/// # Example
///
/// ```rust,ignore
/// use mch_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::new("Plant A, 320 °C");
/// config.width = 1920;
/// config.height = 1080;
/// config.yield_color = BLACK;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 800)
    pub height: u32,

    /// Overall title drawn above the three panels
    pub title: String,

    /// Shared x-axis label (default: "Total MCH Used (kg)")
    pub xlabel: String,

    /// Cumulative yield curve colour (default: BLUE)
    pub yield_color: RGBColor,

    /// Target reference line colour (default: RED)
    pub target_color: RGBColor,

    /// Remaining MCH curve colour (default: GREEN)
    pub remaining_color: RGBColor,

    /// Efficiency curve colour (default: orange)
    pub efficiency_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Circle marker radius in pixels; 0 disables markers (default: 4)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "MCH to Hydrogen Simulation".to_string(),
            xlabel: "Total MCH Used (kg)".to_string(),
            yield_color: BLUE,
            target_color: RED,
            remaining_color: GREEN,
            efficiency_color: ORANGE,
            background: WHITE,
            line_width: 2,
            marker_size: 4,
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

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config with an optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::new("Arrhenius model");
    /// let config = PlotConfig::new(format!("T = {} °C", temperature));
    /// let config = PlotConfig::new(NO_TITLE);
    /// ```
    pub fn new(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
