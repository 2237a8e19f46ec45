//! Accumulator state of a running simulation
//!
//! `SimulationState` is a small `Copy` value. Each iteration consumes the
//! previous state and produces the next one, so the loop never mutates shared
//! accumulators in place.

use crate::solver::SimulationConfig;

/// Accumulators after a given number of iterations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Total MCH fed so far \[kg\]
    pub total_mch_used: f64,

    /// Cumulative H₂ yield so far \[kg\]
    pub cumulative_yield: f64,

    /// Unrecycled MCH backlog \[kg\]
    pub remaining_mch: f64,

    /// Completed iterations
    pub iteration: usize,
}

impl SimulationState {
    /// State before the first iteration
    ///
    /// The backlog starts at one unrecycled increment, so after `n`
    /// iterations it holds `n + 1` unrecycled increments.
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            total_mch_used: 0.0,
            cumulative_yield: 0.0,
            remaining_mch: config.unrecycled_increment(),
            iteration: 0,
        }
    }

    /// MCH fed once the next increment is added \[kg\]
    pub fn next_mch_used(&self, config: &SimulationConfig) -> f64 {
        self.total_mch_used + config.mch_increment
    }

    /// Next state after feeding one increment that yielded `step_yield` kg of H₂
    pub fn advance(self, config: &SimulationConfig, step_yield: f64) -> Self {
        Self {
            total_mch_used: self.next_mch_used(config),
            cumulative_yield: self.cumulative_yield + step_yield,
            remaining_mch: self.remaining_mch + config.unrecycled_increment(),
            iteration: self.iteration + 1,
        }
    }

    /// Whether the cumulative yield meets `target_yield`
    pub fn target_reached(&self, target_yield: f64) -> bool {
        self.cumulative_yield >= target_yield
    }

    /// Whether all accumulators are finite numbers
    pub fn is_finite(&self) -> bool {
        self.total_mch_used.is_finite()
            && self.cumulative_yield.is_finite()
            && self.remaining_mch.is_finite()
    }
}
