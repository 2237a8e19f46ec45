//! Simulation configuration
//!
//! # Design
//!
//! `SimulationConfig` holds every input of one run: the target, the MCH
//! feed increment, the reactor conditions, the yield model to use and the
//! safety bound on the number of iterations. It is immutable once a run
//! starts.
//!
//! Defaults reproduce the reference operating point: 5000 kg H₂ target,
//! 1000 kg MCH per step, 300 °C, 1 barg, 99 % selectivity, 85 % conversion,
//! 80 % recycling.

use crate::error::SimulationError;
use crate::models::ModelVariant;
use crate::physics::ProcessConditions;
use crate::physics::constants::MAX_YIELD_RATIO;

/// Default target cumulative H₂ yield \[kg\]
pub const DEFAULT_TARGET_YIELD: f64 = 5000.0;

/// Default MCH feed per iteration \[kg\]
pub const DEFAULT_MCH_INCREMENT: f64 = 1000.0;

/// Default reactor temperature \[°C\]
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Default reactor pressure \[barg\]
pub const DEFAULT_PRESSURE: f64 = 1.0;

/// Default selectivity
pub const DEFAULT_SELECTIVITY: f64 = 0.99;

/// Default conversion rate
pub const DEFAULT_CONVERSION_RATE: f64 = 0.85;

/// Default recycling rate
pub const DEFAULT_RECYCLING_RATE: f64 = 0.8;

/// Default safety bound on the number of iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// How selectivity × conversion is applied to each step's yield
///
/// The yield factor already contains selectivity × conversion. `Compounded`
/// multiplies each step's raw yield by it a second time, so losses are
/// applied twice; `Single` applies them once (inside the yield factor only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CorrectionMode {
    /// Re-apply selectivity × conversion to every step (default)
    #[default]
    Compounded,

    /// Use the raw model output as the step yield
    Single,
}

impl CorrectionMode {
    /// Multiplier applied to the raw yield of each step
    pub fn step_multiplier(&self, conditions: &ProcessConditions) -> f64 {
        match self {
            CorrectionMode::Compounded => conditions.effective_conversion(),
            CorrectionMode::Single => 1.0,
        }
    }
}

/// Configuration of one simulation run
///
/// # Examples
///
/// ```rust
/// use mch_rs::models::ModelVariant;
/// use mch_rs::solver::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_model(ModelVariant::Arrhenius)
///     .with_temperature(320.0)
///     .with_target_yield(2000.0);
///
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Target cumulative H₂ yield \[kg\], > 0
    pub target_yield: f64,

    /// MCH fed per iteration \[kg\], > 0
    pub mch_increment: f64,

    /// Reactor temperature \[°C\], above -273.15 (used by the Arrhenius model)
    pub temperature: f64,

    /// Reactor pressure \[barg\], > 0 (used by the Arrhenius model)
    pub pressure: f64,

    /// Selectivity, in [0, 1]
    pub selectivity: f64,

    /// Conversion rate, in [0, 1]
    pub conversion_rate: f64,

    /// Fraction of each increment that is recycled, in [0, 1]
    pub recycling_rate: f64,

    /// Theoretical H₂ capacity \[kg H₂/kg MCH\]
    pub max_yield_ratio: f64,

    /// Yield model to run
    pub model: ModelVariant,

    /// Per-step application of selectivity × conversion
    pub correction: CorrectionMode,

    /// Iteration cap; exceeding it aborts with `NonConvergent`
    pub max_iterations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_yield: DEFAULT_TARGET_YIELD,
            mch_increment: DEFAULT_MCH_INCREMENT,
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
            selectivity: DEFAULT_SELECTIVITY,
            conversion_rate: DEFAULT_CONVERSION_RATE,
            recycling_rate: DEFAULT_RECYCLING_RATE,
            max_yield_ratio: MAX_YIELD_RATIO,
            model: ModelVariant::Linear,
            correction: CorrectionMode::Compounded,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the reference defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set target cumulative H₂ yield \[kg\]
    pub fn with_target_yield(mut self, target_yield: f64) -> Self {
        self.target_yield = target_yield;
        self
    }

    /// Builder pattern: set MCH fed per iteration \[kg\]
    pub fn with_mch_increment(mut self, mch_increment: f64) -> Self {
        self.mch_increment = mch_increment;
        self
    }

    /// Builder pattern: set temperature \[°C\]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder pattern: set pressure \[barg\]
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Builder pattern: set selectivity
    pub fn with_selectivity(mut self, selectivity: f64) -> Self {
        self.selectivity = selectivity;
        self
    }

    /// Builder pattern: set conversion rate
    pub fn with_conversion_rate(mut self, conversion_rate: f64) -> Self {
        self.conversion_rate = conversion_rate;
        self
    }

    /// Builder pattern: set recycling rate
    pub fn with_recycling_rate(mut self, recycling_rate: f64) -> Self {
        self.recycling_rate = recycling_rate;
        self
    }

    /// Builder pattern: override the theoretical H₂ capacity
    pub fn with_max_yield_ratio(mut self, max_yield_ratio: f64) -> Self {
        self.max_yield_ratio = max_yield_ratio;
        self
    }

    /// Builder pattern: select the yield model
    pub fn with_model(mut self, model: ModelVariant) -> Self {
        self.model = model;
        self
    }

    /// Builder pattern: select the per-step correction
    pub fn with_correction(mut self, correction: CorrectionMode) -> Self {
        self.correction = correction;
        self
    }

    /// Builder pattern: set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reactor operating point handed to the yield model
    pub fn conditions(&self) -> ProcessConditions {
        ProcessConditions {
            temperature: self.temperature,
            pressure: self.pressure,
            selectivity: self.selectivity,
            conversion_rate: self.conversion_rate,
            max_yield_ratio: self.max_yield_ratio,
        }
    }

    /// Unrecycled MCH added to the backlog at every iteration \[kg\]
    pub fn unrecycled_increment(&self) -> f64 {
        self.mch_increment * (1.0 - self.recycling_rate)
    }

    /// Validate configuration
    ///
    /// Checks every input, reactor conditions included, whatever the model.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_positive("target_yield", self.target_yield)?;
        check_positive("mch_increment", self.mch_increment)?;
        check_positive("max_yield_ratio", self.max_yield_ratio)?;
        check_rate("selectivity", self.selectivity)?;
        check_rate("conversion_rate", self.conversion_rate)?;
        check_rate("recycling_rate", self.recycling_rate)?;
        self.conditions().validate_reactor()?;

        if self.max_iterations == 0 {
            return Err(SimulationError::invalid(
                "max_iterations",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimulationError::invalid(name, value, "must be positive and finite"));
    }
    Ok(())
}

fn check_rate(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimulationError::invalid(name, value, "must be in [0, 1]"));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
