//! Output module for simulation results
//!
//! The simulation core never performs I/O. This module is the rendering
//! side that consumes a [`SimulationResult`](crate::solver::SimulationResult):
//! - **Visualization**: PNG/SVG charts using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── yield_plots.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mch_rs::output::{export_simulation_csv, plot_simulation};
//! use mch_rs::solver::{run, SimulationConfig};
//!
//! let result = run(&SimulationConfig::default())?;
//! plot_simulation(&result, "h2.svg", None)?;
//! export_simulation_csv(&result, "h2.csv", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_simulation_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_simulation, PlotConfig};
