//! Visualization of simulation results
//!
//! This module draws simulation results with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **yield_plots**: Three-panel chart (cumulative yield with target line,
//!   remaining MCH, efficiency) against total MCH fed
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mch_rs::output::visualization::{plot_simulation, PlotConfig};
//!
//! let result = run(&SimulationConfig::default())?;
//!
//! // Default look
//! plot_simulation(&result, "h2.png", None)?;
//!
//! // Custom title, SVG output
//! let config = PlotConfig::new("Arrhenius model, 300 °C");
//! plot_simulation(&result, "h2.svg", Some(&config))?;
//! ```

pub mod config;
pub mod yield_plots;

pub use config::{PlotConfig, NO_TITLE};
pub use yield_plots::plot_simulation;
