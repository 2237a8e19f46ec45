//! Arrhenius-corrected yield model
//!
//! Extends the linear model with a temperature and a pressure correction:
//!
//! ```text
//! yield(m, T, P) = a · m · f_T(T) · f_P(P) + b
//!
//! f_T(T) = A · exp(-Ea / (R · (T + 273.15)))      T in °C
//! f_P(P) = P_std / P   if P > 0, else 1            P_std = 1 bar
//! ```
//!
//! With the default constants (A = 1e5, Ea = 60.7 kJ/mol) the temperature
//! factor at 300 °C is about 0.29, so the Arrhenius model releases less H₂
//! per step than the linear model at the same conditions.
//!
//! # Temperature domain
//!
//! `f_T` is undefined at or below absolute zero. [`YieldModel::validate`]
//! rejects such temperatures with `InvalidParameter`; the simulation loop
//! always validates before the first evaluation.
//!
//! # Example
//!
//! ```rust
//! use mch_rs::models::ArrheniusYieldModel;
//!
//! let model = ArrheniusYieldModel::new();
//! let f_t = model.temperature_factor(300.0).unwrap();
//! assert!(f_t > 0.0 && f_t < 1.0);
//! assert_eq!(ArrheniusYieldModel::pressure_factor(1.0), 1.0);
//! ```

use crate::error::SimulationError;
use crate::physics::constants::{
    ACTIVATION_ENERGY, CELSIUS_TO_KELVIN, GAS_CONSTANT, PRE_EXPONENTIAL_FACTOR, STANDARD_PRESSURE,
};
use crate::physics::traits::check_temperature;
use crate::physics::{ProcessConditions, YieldModel};

/// Temperature- and pressure-corrected H₂ yield model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrheniusYieldModel {
    /// Pre-exponential factor A
    pre_exponential_factor: f64,
    /// Activation energy Ea \[J/mol\]
    activation_energy: f64,
    /// Constant offset `b` \[kg H₂\]
    offset: f64,
}

impl Default for ArrheniusYieldModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrheniusYieldModel {
    /// Create a model with the reference kinetic constants
    pub fn new() -> Self {
        Self {
            pre_exponential_factor: PRE_EXPONENTIAL_FACTOR,
            activation_energy: ACTIVATION_ENERGY,
            offset: 0.0,
        }
    }

    /// Create a model with custom kinetic constants
    ///
    /// # Arguments
    ///
    /// * `pre_exponential_factor` - A (must be positive)
    /// * `activation_energy` - Ea \[J/mol\] (must be non-negative)
    pub fn with_kinetics(pre_exponential_factor: f64, activation_energy: f64) -> Self {
        Self {
            pre_exponential_factor,
            activation_energy,
            offset: 0.0,
        }
    }

    /// Builder pattern: set the offset `b`
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Pre-exponential factor A
    pub fn pre_exponential_factor(&self) -> f64 {
        self.pre_exponential_factor
    }

    /// Activation energy Ea \[J/mol\]
    pub fn activation_energy(&self) -> f64 {
        self.activation_energy
    }

    /// Constant offset `b` \[kg H₂\]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Arrhenius temperature factor f_T(T)
    ///
    /// # Arguments
    ///
    /// * `temperature` - Temperature in °C
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `temperature` is not finite or not above
    /// absolute zero (-273.15 °C).
    pub fn temperature_factor(&self, temperature: f64) -> Result<f64, SimulationError> {
        check_temperature(temperature)?;
        Ok(self.arrhenius(temperature))
    }

    /// Pressure factor f_P(P) = P_std / P, falling back to 1 when P ≤ 0
    pub fn pressure_factor(pressure: f64) -> f64 {
        if pressure > 0.0 {
            STANDARD_PRESSURE / pressure
        } else {
            1.0
        }
    }

    #[inline]
    fn arrhenius(&self, temperature: f64) -> f64 {
        let kelvin = temperature + CELSIUS_TO_KELVIN;
        self.pre_exponential_factor * (-self.activation_energy / (GAS_CONSTANT * kelvin)).exp()
    }
}

impl YieldModel for ArrheniusYieldModel {
    fn instantaneous_yield(&self, cumulative_mch_used: f64, conditions: &ProcessConditions) -> f64 {
        conditions.yield_factor()
            * cumulative_mch_used
            * self.arrhenius(conditions.temperature)
            * Self::pressure_factor(conditions.pressure)
            + self.offset
    }

    fn validate(&self, conditions: &ProcessConditions) -> Result<(), SimulationError> {
        conditions.validate_reactor()?;

        if !self.pre_exponential_factor.is_finite() || self.pre_exponential_factor <= 0.0 {
            return Err(SimulationError::invalid(
                "pre_exponential_factor",
                self.pre_exponential_factor,
                "must be positive",
            ));
        }
        if !self.activation_energy.is_finite() || self.activation_energy < 0.0 {
            return Err(SimulationError::invalid(
                "activation_energy",
                self.activation_energy,
                "must be non-negative",
            ));
        }
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
        "Arrhenius-corrected yield"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Linear H2 yield scaled by an Arrhenius temperature factor \
            and an inverse pressure factor.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
