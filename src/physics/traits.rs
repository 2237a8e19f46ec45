//! Yield model traits and types
//!
//! This module defines the core API for yield models:
//! - `YieldModel`: trait for all H₂ yield models
//! - `ProcessConditions`: reactor operating point handed to every evaluation

use crate::error::SimulationError;
use crate::physics::constants::{ABSOLUTE_ZERO_CELSIUS, MAX_YIELD_RATIO};

// =================================================================================================
// Process conditions
// =================================================================================================

/// Reactor operating point
///
/// Immutable for the duration of one run. Built from a
/// [`SimulationConfig`](crate::solver::SimulationConfig) by the simulation loop,
/// or by hand when a model is evaluated on its own.
///
/// # Example
/// ```
/// use mch_rs::physics::ProcessConditions;
///
/// let conditions = ProcessConditions::default();
/// assert!((conditions.yield_factor() - 0.0616 * 0.99 * 0.85).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessConditions {
    /// Reactor temperature (°C)
    pub temperature: f64,

    /// Reactor pressure (barg)
    pub pressure: f64,

    /// Selectivity towards toluene + H₂, in [0, 1]
    pub selectivity: f64,

    /// Fraction of MCH converted per pass, in [0, 1]
    pub conversion_rate: f64,

    /// Theoretical H₂ capacity \[kg H₂/kg MCH\]
    pub max_yield_ratio: f64,
}

impl Default for ProcessConditions {
    fn default() -> Self {
        Self {
            temperature: 300.0,
            pressure: 1.0,
            selectivity: 0.99,
            conversion_rate: 0.85,
            max_yield_ratio: MAX_YIELD_RATIO,
        }
    }
}

impl ProcessConditions {
    /// Combined selectivity × conversion correction
    pub fn effective_conversion(&self) -> f64 {
        self.selectivity * self.conversion_rate
    }

    /// Linear yield factor `a = max_yield_ratio · selectivity · conversion_rate`
    pub fn yield_factor(&self) -> f64 {
        self.max_yield_ratio * self.effective_conversion()
    }

    /// Check the reactor temperature and pressure
    ///
    /// Temperature must be above absolute zero, pressure strictly positive.
    pub fn validate_reactor(&self) -> Result<(), SimulationError> {
        check_temperature(self.temperature)?;

        if !self.pressure.is_finite() || self.pressure <= 0.0 {
            return Err(SimulationError::invalid("pressure", self.pressure, "must be positive"));
        }
        Ok(())
    }
}

pub(crate) fn check_temperature(temperature: f64) -> Result<(), SimulationError> {
    if !temperature.is_finite() || temperature <= ABSOLUTE_ZERO_CELSIUS {
        return Err(SimulationError::invalid(
            "temperature",
            temperature,
            "must be above absolute zero (-273.15 °C)",
        ));
    }
    Ok(())
}

// =================================================================================================
// Yield Model Trait
// =================================================================================================

/// Trait for H₂ yield models
///
/// # Responsibility
/// Maps the cumulative MCH fed so far to the instantaneous H₂ yield
/// contribution of the current step. Does NOT accumulate anything
/// (that's the simulation loop's job).
///
/// Implementations must be pure: the same inputs always give the same
/// output, and evaluation has no side effects.
pub trait YieldModel: Send + Sync {
    /// Instantaneous H₂ yield contribution \[kg\]
    ///
    /// # Arguments
    /// * `cumulative_mch_used` - Total MCH fed since the start of the run \[kg\]
    /// * `conditions` - Reactor operating point
    fn instantaneous_yield(&self, cumulative_mch_used: f64, conditions: &ProcessConditions) -> f64;

    /// Check model-specific requirements on the operating point
    ///
    /// Called once before the loop starts. The default accepts everything.
    fn validate(&self, _conditions: &ProcessConditions) -> Result<(), SimulationError> {
        Ok(())
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
