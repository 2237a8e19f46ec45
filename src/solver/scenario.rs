//! Simulation scenario definition
//!
//! A scenario combines a yield model with a run configuration.
use crate::error::SimulationError;
use crate::physics::YieldModel;
use crate::solver::SimulationConfig;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Yield model (chemistry)
/// - Configuration (target, feed, reactor conditions, iteration cap)
///
/// # Examples
///
/// ```rust
/// use mch_rs::models::{ArrheniusYieldModel, ModelVariant};
/// use mch_rs::solver::{Scenario, SimulationConfig};
///
/// // Model chosen by the configuration
/// let config = SimulationConfig::default().with_model(ModelVariant::Arrhenius);
/// let scenario = Scenario::from_config(config);
/// assert_eq!(scenario.get_model_name(), "Arrhenius-corrected yield");
///
/// // Or a model built by hand
/// let model = ArrheniusYieldModel::with_kinetics(2e5, 65_000.0);
/// let scenario = Scenario::new(Box::new(model), SimulationConfig::default());
/// scenario.validate().unwrap();
/// ```
pub struct Scenario {
    /// Yield model
    pub model: Box<dyn YieldModel>,

    /// Run configuration
    pub config: SimulationConfig,
}

impl Scenario {
    /// Create a scenario from an explicit model
    ///
    /// `config.model` is ignored; `model` is used as is.
    pub fn new(model: Box<dyn YieldModel>, config: SimulationConfig) -> Self {
        Self { model, config }
    }

    /// Create a scenario with the model selected by `config.model`
    pub fn from_config(config: SimulationConfig) -> Self {
        Self::new(config.model.build(), config)
    }

    /// Validate configuration and model-specific requirements
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.config.validate()?;
        self.model.validate(&self.config.conditions())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.get_model_name())
            .field("config", &self.config)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
