//! H₂ yield models for MCH dehydrogenation
//!
//! All models implement the [`YieldModel`](crate::physics::YieldModel) trait.
//! The simulation loop calls `instantaneous_yield` once per iteration; models
//! are responsible for the yield law, the loop for the accumulation.
//!
//! # Available Models
//!
//! ## [`LinearYieldModel`]: linear yield
//!
//! Yield proportional to the cumulative MCH fed, scaled by the theoretical
//! H₂ capacity, the selectivity and the conversion rate.
//!
//! ## [`ArrheniusYieldModel`]: temperature and pressure corrected
//!
//! The linear law multiplied by an Arrhenius temperature factor and an
//! inverse pressure factor.
//!
//! # Selecting a model by configuration
//!
//! [`ModelVariant`] names the model to build, so that a caller can switch
//! between variants without changing the simulation code:
//!
//! ```rust
//! use mch_rs::models::ModelVariant;
//!
//! let model = ModelVariant::Arrhenius.build();
//! assert_eq!(model.name(), "Arrhenius-corrected yield");
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod arrhenius;
pub mod linear;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use arrhenius::ArrheniusYieldModel;
pub use linear::LinearYieldModel;

use crate::physics::YieldModel;
use std::fmt;

/// Yield model selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    /// [`LinearYieldModel`]
    #[default]
    Linear,

    /// [`ArrheniusYieldModel`] with the reference kinetic constants
    Arrhenius,
}

impl ModelVariant {
    /// Build the selected model with its default parameters
    pub fn build(&self) -> Box<dyn YieldModel> {
        match self {
            ModelVariant::Linear => Box::new(LinearYieldModel::new()),
            ModelVariant::Arrhenius => Box::new(ArrheniusYieldModel::new()),
        }
    }

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            ModelVariant::Linear => "linear",
            ModelVariant::Arrhenius => "arrhenius",
        }
    }

    /// Whether temperature and pressure influence the yield
    pub fn uses_reactor_conditions(&self) -> bool {
        matches!(self, ModelVariant::Arrhenius)
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
