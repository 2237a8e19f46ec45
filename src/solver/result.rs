//! Simulation result
//!
//! Four parallel series indexed by iteration, plus the target used for the
//! reference line of the yield chart and free-form metadata for diagnostics.

use nalgebra::DMatrix;
use std::collections::HashMap;

use crate::solver::SimulationState;

/// Column names of [`SimulationResult::to_matrix`], in order
pub const SERIES_NAMES: [&str; 4] = ["mch_usage", "h2_yields", "remaining_mch", "efficiency"];

/// Output of one simulation run
///
/// All series have the same length, equal to the number of iterations run.
///
/// # Example
///
/// ```rust
/// use mch_rs::solver::{run, SimulationConfig};
///
/// let result = run(&SimulationConfig::default()).unwrap();
/// assert_eq!(result.mch_usage.len(), result.iterations());
/// assert!(result.final_cumulative_yield().unwrap() >= result.target_yield);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Total MCH fed after each iteration \[kg\]
    pub mch_usage: Vec<f64>,

    /// Cumulative H₂ yield after each iteration \[kg\]
    pub h2_yields: Vec<f64>,

    /// Unrecycled MCH backlog after each iteration \[kg\]
    pub remaining_mch: Vec<f64>,

    /// H₂ yield of each iteration per kg of MCH fed in that iteration
    pub efficiency: Vec<f64>,

    /// Target cumulative H₂ yield of the run \[kg\]
    pub target_yield: f64,

    /// Additional metadata (model, iterations, ...)
    metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create an empty result for a run aiming at `target_yield`
    pub fn new(target_yield: f64) -> Self {
        Self {
            mch_usage: Vec::new(),
            h2_yields: Vec::new(),
            remaining_mch: Vec::new(),
            efficiency: Vec::new(),
            target_yield,
            metadata: HashMap::new(),
        }
    }

    /// Append one iteration
    pub(crate) fn record(&mut self, state: &SimulationState, efficiency: f64) {
        self.mch_usage.push(state.total_mch_used);
        self.h2_yields.push(state.cumulative_yield);
        self.remaining_mch.push(state.remaining_mch);
        self.efficiency.push(efficiency);
    }

    /// Number of iterations recorded
    pub fn iterations(&self) -> usize {
        self.mch_usage.len()
    }

    /// Same as [`iterations`](Self::iterations)
    pub fn len(&self) -> usize {
        self.iterations()
    }

    /// True when no iteration was recorded
    pub fn is_empty(&self) -> bool {
        self.mch_usage.is_empty()
    }

    /// Cumulative H₂ yield at the last iteration
    pub fn final_cumulative_yield(&self) -> Option<f64> {
        self.h2_yields.last().copied()
    }

    /// Total MCH fed at the last iteration
    pub fn total_mch_used(&self) -> Option<f64> {
        self.mch_usage.last().copied()
    }

    /// Whether the last cumulative yield meets the target
    pub fn target_reached(&self) -> bool {
        self.final_cumulative_yield()
            .is_some_and(|y| y >= self.target_yield)
    }

    /// Overall H₂ recovered per kg MCH fed over the whole run
    pub fn overall_efficiency(&self) -> Option<f64> {
        match (self.final_cumulative_yield(), self.total_mch_used()) {
            (Some(h2), Some(mch)) if mch > 0.0 => Some(h2 / mch),
            _ => None,
        }
    }

    /// First series whose length differs from `mch_usage`, with that length
    ///
    /// `None` when all four series have one entry per iteration.
    pub fn mismatched_series(&self) -> Option<(&'static str, usize)> {
        let expected = self.iterations();
        let series: [(&'static str, &[f64]); 3] = [
            ("h2_yields", &self.h2_yields),
            ("remaining_mch", &self.remaining_mch),
            ("efficiency", &self.efficiency),
        ];
        series
            .into_iter()
            .map(|(name, values)| (name, values.len()))
            .find(|&(_, len)| len != expected)
    }

    /// Series as an `iterations × 4` matrix
    ///
    /// Columns follow [`SERIES_NAMES`]: MCH usage, cumulative yield,
    /// remaining MCH, efficiency. `None` if the series lengths differ.
    pub fn to_matrix(&self) -> Option<DMatrix<f64>> {
        if self.mismatched_series().is_some() {
            return None;
        }
        let n = self.iterations();
        Some(DMatrix::from_fn(n, SERIES_NAMES.len(), |row, col| match col {
            0 => self.mch_usage[row],
            1 => self.h2_yields[row],
            2 => self.remaining_mch[row],
            _ => self.efficiency[row],
        }))
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// All metadata entries
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}

// =================================================================================================
// Tests
// =================================================================================================
