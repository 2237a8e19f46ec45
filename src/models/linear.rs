//! Linear yield model
//!
//! ```text
//! yield(m) = a · m + b        a = max_yield_ratio · selectivity · conversion_rate
//! ```
//!
//! where `m` is the cumulative MCH fed so far \[kg\] and `b` a constant offset
//! for initial yield or inefficiencies (0 by default).
//!
//! # Example
//!
//! ```rust
//! use mch_rs::models::LinearYieldModel;
//! use mch_rs::physics::{ProcessConditions, YieldModel};
//!
//! let model = LinearYieldModel::new();
//! let conditions = ProcessConditions::default();
//!
//! // 1000 kg MCH at 99 % selectivity, 85 % conversion
//! let h2 = model.instantaneous_yield(1000.0, &conditions);
//! assert!((h2 - 51.8364).abs() < 1e-9);
//! ```

use crate::error::SimulationError;
use crate::physics::{ProcessConditions, YieldModel};

/// Linear H₂ yield model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearYieldModel {
    /// Constant offset `b` \[kg H₂\]
    offset: f64,
}

impl LinearYieldModel {
    /// Create a linear model without offset
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// Builder pattern: set the offset `b`
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Constant offset `b` \[kg H₂\]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl YieldModel for LinearYieldModel {
    fn instantaneous_yield(&self, cumulative_mch_used: f64, conditions: &ProcessConditions) -> f64 {
        conditions.yield_factor() * cumulative_mch_used + self.offset
    }

    fn validate(&self, _conditions: &ProcessConditions) -> Result<(), SimulationError> {
        // A negative offset would let the cumulative yield decrease
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(SimulationError::invalid(
                "offset",
                self.offset,
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Linear yield"
    }

    fn description(&self) -> Option<&str> {
        Some("H2 yield proportional to cumulative MCH fed, scaled by selectivity and conversion.")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_has_no_offset() {
        let model = LinearYieldModel::default();
        assert_eq!(model.offset(), 0.0);
        assert_eq!(model, LinearYieldModel::new());
    }

    #[test]
    fn test_yield_is_linear_in_mch() {
        let model = LinearYieldModel::new();
        let conditions = ProcessConditions::default();

        let y1 = model.instantaneous_yield(1000.0, &conditions);
        let y2 = model.instantaneous_yield(2000.0, &conditions);

        assert_relative_eq!(y1, 0.0616 * 0.99 * 0.85 * 1000.0, epsilon = 1e-12);
        assert_relative_eq!(y2, 2.0 * y1, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_is_added() {
        let model = LinearYieldModel::new().with_offset(5.0);
        let conditions = ProcessConditions::default();

        assert_relative_eq!(model.instantaneous_yield(0.0, &conditions), 5.0);
    }

    #[test]
    fn test_zero_selectivity_gives_zero_yield() {
        let model = LinearYieldModel::new();
        let conditions = ProcessConditions {
            selectivity: 0.0,
            ..Default::default()
        };

        assert_eq!(model.instantaneous_yield(1e6, &conditions), 0.0);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let model = LinearYieldModel::new().with_offset(-1.0);
        let err = model.validate(&ProcessConditions::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_nan_offset_rejected() {
        let model = LinearYieldModel::new().with_offset(f64::NAN);
        assert!(model.validate(&ProcessConditions::default()).is_err());
    }
}
