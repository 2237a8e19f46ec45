//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and existing code stays untouched.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use mch_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//! use mch_rs::solver::{run, SimulationConfig};
//!
//! let result = run(&SimulationConfig::default())?;
//!
//! let exporter = CsvExporter::new(CsvConfig::default().precision(3));
//! exporter.export(&result, "h2.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;

pub use csv::{export_simulation_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so that the
/// caller can react precisely to the failure without downcasting.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports the four series of `result` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data or inconsistent series
    fn export(&self, result: &SimulationResult, path: &str) -> Result<(), Self::Error>;
}
