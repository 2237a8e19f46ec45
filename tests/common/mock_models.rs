//! Mock yield models for testing
//!
//! Both models have a trivially predictable output, so the number of
//! iterations a run needs is known in advance.

use mch_rs::physics::{ProcessConditions, YieldModel};

// =================================================================================================
// Constant yield: y(m) = c
// =================================================================================================

/// Releases the same amount of H₂ at every step, whatever the MCH fed
///
/// With `CorrectionMode::Single` a target `T` is reached after exactly
/// `ceil(T / c)` iterations.
pub struct ConstantYield {
    pub step_yield: f64,
}

impl ConstantYield {
    pub fn new(step_yield: f64) -> Self {
        Self { step_yield }
    }

    /// Iterations needed to reach `target` (uncorrected steps)
    pub fn expected_iterations(&self, target: f64) -> usize {
        (target / self.step_yield).ceil() as usize
    }
}

impl YieldModel for ConstantYield {
    fn instantaneous_yield(&self, _cumulative_mch_used: f64, _conditions: &ProcessConditions) -> f64 {
        self.step_yield
    }

    fn name(&self) -> &str {
        "Constant yield"
    }
}

// =================================================================================================
// No yield: y(m) = 0
// =================================================================================================

/// A reactor that never releases hydrogen
pub struct NoYield;

impl YieldModel for NoYield {
    fn instantaneous_yield(&self, _cumulative_mch_used: f64, _conditions: &ProcessConditions) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "No yield"
    }

    fn description(&self) -> Option<&str> {
        Some("Inert catalyst, used to exercise the iteration cap")
    }
}
