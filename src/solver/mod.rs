//! Simulation loop
//!
//! This module drives a yield model until a cumulative H₂ target is reached
//! and collects the per-iteration series.
//!
//! # Core Concepts
//!
//! 1. **Scenario** (`Scenario`) - WHAT to simulate
//!    - Yield model (chemistry)
//!    - Configuration (target, feed, reactor conditions)
//!
//! 2. **Loop** (`SimulationLoop`) - HOW to accumulate
//!    - Feeds MCH one increment at a time
//!    - Threads an immutable `SimulationState` through the iterations
//!    - Stops at the target, or at the iteration cap
//!
//! 3. **Result** (`SimulationResult`) - the four output series
//!
//! # Workflow
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐
//! │ SimulationConfig │────▶│   Scenario   │ ← WHAT to simulate
//! └──────────────────┘     │ model + conf │
//!                          └──────┬───────┘
//!                                 │
//!                        ┌────────▼────────┐
//!                        │ SimulationLoop  │ ← accumulate until target
//!                        └────────┬────────┘
//!                                 │
//!                     ┌───────────▼──────────┐
//!                     │   SimulationResult   │ ← four series + target
//!                     └──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use mch_rs::models::ModelVariant;
//! use mch_rs::solver::{run, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_model(ModelVariant::Arrhenius);
//! let result = run(&config)?;
//!
//! println!("{} iterations, {:?} kg H2", result.iterations(), result.final_cumulative_yield());
//! # Ok::<(), mch_rs::error::SimulationError>(())
//! ```
//!
//! # Error Handling
//!
//! ```rust
//! use mch_rs::error::SimulationError;
//! use mch_rs::solver::{run, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_selectivity(0.0).with_max_iterations(100);
//! match run(&config) {
//!     Ok(result) => println!("{} iterations", result.iterations()),
//!     Err(SimulationError::NonConvergent { iterations, .. }) => {
//!         eprintln!("gave up after {} iterations", iterations);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod config;
mod result;
mod scenario;
mod simulation;
mod state;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::{
    CorrectionMode, SimulationConfig, DEFAULT_CONVERSION_RATE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MCH_INCREMENT, DEFAULT_PRESSURE, DEFAULT_RECYCLING_RATE, DEFAULT_SELECTIVITY,
    DEFAULT_TARGET_YIELD, DEFAULT_TEMPERATURE,
};
pub use result::{SimulationResult, SERIES_NAMES};
pub use scenario::Scenario;
pub use simulation::{run, SimulationLoop};
pub use state::SimulationState;
