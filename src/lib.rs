//! mch-rs: Hydrogen release simulation for methylcyclohexane dehydrogenation
//!
//! Simulates cumulative H₂ production from the catalytic dehydrogenation of
//! methylcyclohexane (MCH → toluene + 3 H₂). MCH is fed to the reactor one
//! increment at a time; a yield model gives the H₂ released at each step,
//! and the run stops once a cumulative H₂ target is reached.
//!
//! # Architecture
//!
//! 1. **Separation of chemistry and bookkeeping**
//!    - Yield models define the yield law (what each step releases)
//!    - The simulation loop accumulates (how much, when to stop)
//!
//! 2. **Two interchangeable yield models**
//!    - [`LinearYieldModel`](models::LinearYieldModel): proportional to MCH fed
//!    - [`ArrheniusYieldModel`](models::ArrheniusYieldModel): adds temperature
//!      and pressure corrections
//!
//! # Quick Start
//!
//! ```rust
//! use mch_rs::prelude::*;
//!
//! # fn main() -> Result<(), SimulationError> {
//! // 1. Configure the run (reference defaults: 5000 kg H2 target, 1000 kg MCH/step)
//! let config = SimulationConfig::default()
//!     .with_model(ModelVariant::Arrhenius)
//!     .with_temperature(320.0);
//!
//! // 2. Run
//! let result = run(&config)?;
//!
//! // 3. Access results
//! println!("Iterations: {}", result.iterations());
//! println!("MCH fed: {:?} kg", result.total_mch_used());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Yield model trait, process conditions, constants
//! - [`models`]: Linear and Arrhenius-corrected yield models
//! - [`solver`]: Configuration, accumulation loop, results
//! - [`output`]: Charts and CSV export
//! - [`error`]: Error type

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use mch_rs::prelude::*;
    //! ```
    pub use crate::error::SimulationError;
    pub use crate::models::{ArrheniusYieldModel, LinearYieldModel, ModelVariant};
    pub use crate::physics::{ProcessConditions, YieldModel};
    pub use crate::solver::{
        run, CorrectionMode, Scenario, SimulationConfig, SimulationLoop, SimulationResult,
    };
}
