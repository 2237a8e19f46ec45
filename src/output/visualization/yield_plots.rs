//! Three-panel chart of a simulation run
//!
//! Panels share the x axis (total MCH fed) and are stacked vertically:
//!
//! 1. cumulative H₂ yield, with the target as a horizontal reference line
//! 2. unrecycled MCH backlog
//! 3. per-step yield efficiency
//!
//! The backend is chosen from the file extension: `.svg` uses the SVG
//! backend, anything else the bitmap backend (PNG, BMP, ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use mch_rs::output::visualization::{plot_simulation, PlotConfig};
//!
//! let result = run(&SimulationConfig::default())?;
//! plot_simulation(&result, "h2.svg", None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use crate::output::visualization::PlotConfig;
use crate::solver::SimulationResult;

/// One chart panel
struct Panel<'a> {
    caption: &'a str,
    ylabel: &'a str,
    label: &'a str,
    values: &'a [f64],
    color: RGBColor,
    target: Option<f64>,
}

/// Plot cumulative yield, remaining MCH and efficiency against MCH fed
///
/// # Arguments
///
/// * `result` - Simulation result
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config` - Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if the result is empty, contains NaN/Inf, or the backend fails.
pub fn plot_simulation(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty data: the result contains no iteration".into());
    }

    if let Some((series, found)) = result.mismatched_series() {
        return Err(format!(
            "Data length mismatch: {} has {} points versus {} iterations",
            series,
            found,
            result.iterations()
        )
        .into());
    }

    let all_finite = [&result.mch_usage, &result.h2_yields, &result.remaining_mch, &result.efficiency]
        .iter()
        .all(|series| series.iter().all(|v| v.is_finite()));
    if !all_finite || !result.target_yield.is_finite() {
        return Err("Invalid data: NaN or Inf detected in simulation result".into());
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_simulation_impl(backend, result, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_simulation_impl(backend, result, config)
        }
    }
}

fn plot_simulation_impl<DB: DrawingBackend>(
    backend: DB,
    result: &SimulationResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = root.titled(&config.title, ("sans-serif", 30).into_font())?;
    let areas = root.split_evenly((3, 1));

    let panels = [
        Panel {
            caption: "Cumulative Hydrogen Yield vs. Total MCH Usage",
            ylabel: "Cumulative H₂ Yield (kg)",
            label: "Cumulative H₂ Yield",
            values: &result.h2_yields,
            color: config.yield_color,
            target: Some(result.target_yield),
        },
        Panel {
            caption: "Remaining MCH vs. Total MCH Usage",
            ylabel: "Remaining MCH (kg)",
            label: "Remaining MCH",
            values: &result.remaining_mch,
            color: config.remaining_color,
            target: None,
        },
        Panel {
            caption: "Yield Efficiency vs. Total MCH Usage",
            ylabel: "Yield Efficiency (kg H₂/kg MCH)",
            label: "Yield Efficiency",
            values: &result.efficiency,
            color: config.efficiency_color,
            target: None,
        },
    ];

    for (area, panel) in areas.iter().zip(panels.iter()) {
        draw_panel(area, &result.mch_usage, panel, config)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    mch_usage: &[f64],
    panel: &Panel<'_>,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let x_range = axis_range(mch_usage, None);
    let y_range = axis_range(panel.values, panel.target);

    let mut chart = ChartBuilder::on(area)
        .caption(panel.caption, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    {
        let mut mesh = chart.configure_mesh();
        if !config.show_grid {
            mesh.disable_mesh();
        }
        mesh.x_desc(&config.xlabel)
            .y_desc(panel.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    let color = panel.color;
    let points = || mch_usage.iter().zip(panel.values.iter()).map(|(x, y)| (*x, *y));

    chart
        .draw_series(LineSeries::new(
            points(),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?
        .label(panel.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

    if config.marker_size > 0 {
        chart.draw_series(
            points().map(|p| Circle::new(p, config.marker_size as i32, color.filled())),
        )?;
    }

    if let Some(target) = panel.target {
        let target_color = config.target_color;
        chart
            .draw_series(LineSeries::new(
                vec![(x_range.start, target), (x_range.end, target)],
                ShapeStyle::from(&target_color).stroke_width(config.line_width),
            ))?
            .label("Target H₂ Yield")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], target_color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Axis range covering `values` (and `extra`, if any) with a 5 % margin
///
/// A degenerate range (single point, constant series) is widened so that
/// the chart never gets a zero-width axis.
fn axis_range(values: &[f64], extra: Option<f64>) -> Range<f64> {
    let (lo, hi) = values
        .iter()
        .copied()
        .chain(extra)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        let pad = (hi.abs() * 0.05).max(1.0);
        return (lo - pad)..(hi + pad);
    }

    let pad = span * 0.05;
    (lo - pad)..(hi + pad)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelVariant;
    use crate::solver::{run, SimulationConfig};

    #[test]
    fn test_axis_range_covers_values_and_target() {
        let range = axis_range(&[10.0, 20.0, 30.0], Some(50.0));
        assert!(range.start < 10.0);
        assert!(range.end > 50.0);
    }

    #[test]
    fn test_axis_range_constant_series() {
        let range = axis_range(&[200.0, 200.0, 200.0], None);
        assert!(range.start < 200.0 && range.end > 200.0);
        assert!(range.end - range.start >= 2.0);
    }

    #[test]
    fn test_axis_range_empty() {
        assert_eq!(axis_range(&[], None), 0.0..1.0);
    }

    #[test]
    fn test_plot_simulation_svg() {
        let result = run(&SimulationConfig::default()).unwrap();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");

        plot_simulation(&result, path.to_str().unwrap(), None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_plot_arrhenius_without_grid_or_markers() {
        let result = run(&SimulationConfig::default().with_model(ModelVariant::Arrhenius)).unwrap();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");

        let mut config = PlotConfig::new("Arrhenius");
        config.show_grid = false;
        config.marker_size = 0;

        plot_simulation(&result, path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_plot_empty_result_fails() {
        let result = SimulationResult::new(100.0);
        assert!(plot_simulation(&result, "unused.svg", None).is_err());
    }

    #[test]
    fn test_plot_uneven_series_fails() {
        let mut result = run(&SimulationConfig::default()).unwrap();
        result.efficiency.truncate(3);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");

        let err = plot_simulation(&result, path.to_str().unwrap(), None).unwrap_err();
        assert!(err.to_string().contains("efficiency"));
        assert!(!path.exists());
    }

    #[test]
    fn test_plot_nan_fails() {
        let mut result = run(&SimulationConfig::default()).unwrap();
        result.efficiency[0] = f64::NAN;
        assert!(plot_simulation(&result, "unused.svg", None).is_err());
    }
}
