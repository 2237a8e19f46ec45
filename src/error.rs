//! Error type for simulation runs
//!
//! Every variant is recoverable: the caller corrects its inputs and runs
//! again. Runs are deterministic, so retrying an identical configuration
//! never helps and nothing is retried internally.

use thiserror::Error;

/// Errors returned by validation and by the simulation loop
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// An input is outside its admissible range
    ///
    /// Raised before the first iteration; the loop never runs on invalid input.
    #[error("Invalid parameter {name}: {value} ({reason})")]
    InvalidParameter {
        /// Parameter name (e.g. `"selectivity"`)
        name: &'static str,
        /// Offending value
        value: f64,
        /// Admissible range or rule that was broken
        reason: &'static str,
    },

    /// The iteration cap was reached before the cumulative yield met the target
    #[error(
        "Target H2 yield of {target_yield} kg not reached after {iterations} iterations \
         (cumulative yield {cumulative_yield} kg). Check selectivity, conversion rate \
         and reactor conditions."
    )]
    NonConvergent {
        /// Iterations run before aborting
        iterations: usize,
        /// Cumulative H₂ yield at the last iteration \[kg\]
        cumulative_yield: f64,
        /// Requested target \[kg\]
        target_yield: f64,
    },

    /// A NaN or infinite value appeared during accumulation
    #[error("Non-finite {quantity} at iteration {iteration}. The inputs overflow the yield model.")]
    NonFinite {
        /// Iteration (1-based) where the value appeared
        iteration: usize,
        /// Quantity that became non-finite
        quantity: &'static str,
    },
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidParameter { name, value, reason }
    }

    /// True for input validation failures
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimulationError::InvalidParameter { .. })
    }

    /// True when the iteration cap aborted the run
    pub fn is_non_convergent(&self) -> bool {
        matches!(self, SimulationError::NonConvergent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimulationError::invalid("selectivity", 1.5, "must be in [0, 1]");
        assert!(err.is_invalid_parameter());
        assert!(!err.is_non_convergent());
        assert_eq!(err.to_string(), "Invalid parameter selectivity: 1.5 (must be in [0, 1])");
    }

    #[test]
    fn test_non_convergent_display() {
        let err = SimulationError::NonConvergent {
            iterations: 10,
            cumulative_yield: 0.0,
            target_yield: 5000.0,
        };
        assert!(err.is_non_convergent());
        let message = err.to_string();
        assert!(message.contains("5000"));
        assert!(message.contains("10 iterations"));
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(SimulationError::NonFinite {
            iteration: 3,
            quantity: "cumulative yield",
        });
        assert!(err.to_string().contains("iteration 3"));
    }
}
