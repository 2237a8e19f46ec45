//! Yield accumulation loop
//!
//! # Algorithm
//!
//! Starting from an empty reactor (`m = 0`, `Y = 0`, backlog = one
//! unrecycled increment), each iteration:
//!
//! 1. feeds one increment: `m ← m + Δm`
//! 2. evaluates the yield model: `y_raw = model(m, conditions)`
//! 3. applies the per-step correction: `y = y_raw · s · x` (compounded mode)
//! 4. accumulates: `Y ← Y + y`, backlog ← backlog + `Δm · (1 - r)`
//! 5. records `m`, `Y`, backlog and the step efficiency `y / Δm`
//!
//! until `Y ≥ target`. The iteration cap turns a configuration that never
//! produces hydrogen (zero selectivity, zero conversion, ...) into a
//! `NonConvergent` error instead of an endless loop.
//!
//! # Example
//!
//! ```rust
//! use mch_rs::solver::{Scenario, SimulationConfig, SimulationLoop};
//!
//! let scenario = Scenario::from_config(SimulationConfig::default());
//! let result = SimulationLoop::new().run(&scenario).unwrap();
//! assert!(result.target_reached());
//! ```

use log::{debug, info, trace, warn};

use crate::error::SimulationError;
use crate::solver::{Scenario, SimulationConfig, SimulationResult, SimulationState};

/// Iterative yield accumulation
///
/// Stateless: one instance can run any number of scenarios, and two runs of
/// the same scenario give bit-identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationLoop;

impl SimulationLoop {
    /// Create a new simulation loop
    pub fn new() -> Self {
        Self
    }

    /// Run `scenario` until its target cumulative yield is reached
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the configuration or the model rejects the
    ///   inputs; nothing is evaluated in that case
    /// - `NonConvergent` if `max_iterations` iterations do not reach the target
    /// - `NonFinite` if an accumulator overflows
    pub fn run(&self, scenario: &Scenario) -> Result<SimulationResult, SimulationError> {

        // ====== Validation ======

        scenario.validate()?;

        let config = &scenario.config;
        let model = scenario.model.as_ref();
        let conditions = config.conditions();
        let multiplier = config.correction.step_multiplier(&conditions);

        debug!(
            "Starting {} run: target {} kg H2, {} kg MCH per step, cap {} iterations",
            model.name(),
            config.target_yield,
            config.mch_increment,
            config.max_iterations
        );

        // ====== Accumulation ======

        let mut result = SimulationResult::new(config.target_yield);
        let mut state = SimulationState::initial(config);

        while !state.target_reached(config.target_yield) {
            if state.iteration >= config.max_iterations {
                warn!(
                    "{} run aborted after {} iterations at {} kg H2 (target {} kg)",
                    model.name(),
                    state.iteration,
                    state.cumulative_yield,
                    config.target_yield
                );
                return Err(SimulationError::NonConvergent {
                    iterations: state.iteration,
                    cumulative_yield: state.cumulative_yield,
                    target_yield: config.target_yield,
                });
            }

            let raw_yield = model.instantaneous_yield(state.next_mch_used(config), &conditions);
            let step_yield = raw_yield * multiplier;

            state = state.advance(config, step_yield);
            check_state(&state, step_yield)?;

            let efficiency = step_efficiency(step_yield, config);
            result.record(&state, efficiency);

            trace!(
                "iteration {}: mch {} kg, step {} kg, cumulative {} kg",
                state.iteration,
                state.total_mch_used,
                step_yield,
                state.cumulative_yield
            );
        }

        info!(
            "{} run reached {} kg H2 after {} iterations ({} kg MCH fed)",
            model.name(),
            state.cumulative_yield,
            state.iteration,
            state.total_mch_used
        );

        // ====== Build Result ======

        result.add_metadata("model", model.name());
        result.add_metadata("iterations", &state.iteration.to_string());
        result.add_metadata("target", &config.target_yield.to_string());
        result.add_metadata("final yield", &state.cumulative_yield.to_string());
        result.add_metadata("correction", &format!("{:?}", config.correction));

        Ok(result)
    }
}

/// Run a simulation with the model selected by `config.model`
///
/// # Example
///
/// ```rust
/// use mch_rs::solver::{run, SimulationConfig};
///
/// let result = run(&SimulationConfig::default()).unwrap();
/// assert_eq!(result.mch_usage[0], 1000.0);
/// ```
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    SimulationLoop::new().run(&Scenario::from_config(*config))
}

fn step_efficiency(step_yield: f64, config: &SimulationConfig) -> f64 {
    if config.mch_increment > 0.0 {
        step_yield / config.mch_increment
    } else {
        0.0
    }
}

/// Reject NaN and Inf before they reach the output series
fn check_state(state: &SimulationState, step_yield: f64) -> Result<(), SimulationError> {
    if !step_yield.is_finite() {
        return Err(SimulationError::NonFinite {
            iteration: state.iteration,
            quantity: "step yield",
        });
    }
    if !state.is_finite() {
        return Err(SimulationError::NonFinite {
            iteration: state.iteration,
            quantity: "accumulator",
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
