//! Helper functions for integration tests

use mch_rs::physics::YieldModel;
use mch_rs::solver::{Scenario, SimulationConfig, SimulationResult};

/// Assert the structural invariants every successful run must satisfy
///
/// - all series have one entry per iteration
/// - MCH fed grows by exactly one increment per iteration
/// - cumulative yield never decreases and ends at or above the target
/// - the backlog grows by the unrecycled part of each increment
pub fn assert_series_consistent(result: &SimulationResult, config: &SimulationConfig, tolerance: f64) {
    let n = result.iterations();
    assert!(n > 0, "Result has no iteration");
    assert_eq!(result.h2_yields.len(), n, "h2_yields length");
    assert_eq!(result.remaining_mch.len(), n, "remaining_mch length");
    assert_eq!(result.efficiency.len(), n, "efficiency length");

    assert!(
        (result.mch_usage[0] - config.mch_increment).abs() < tolerance,
        "First MCH entry {} != increment {}",
        result.mch_usage[0],
        config.mch_increment
    );

    let unrecycled = config.mch_increment * (1.0 - config.recycling_rate);

    for i in 1..n {
        let fed = result.mch_usage[i] - result.mch_usage[i - 1];
        assert!(
            (fed - config.mch_increment).abs() < tolerance,
            "Iteration {}: MCH step {} != increment {}",
            i,
            fed,
            config.mch_increment
        );

        assert!(
            result.h2_yields[i] >= result.h2_yields[i - 1],
            "Iteration {}: cumulative yield decreased ({} -> {})",
            i,
            result.h2_yields[i - 1],
            result.h2_yields[i]
        );

        let backlog = result.remaining_mch[i] - result.remaining_mch[i - 1];
        assert!(
            (backlog - unrecycled).abs() < tolerance,
            "Iteration {}: backlog step {} != {}",
            i,
            backlog,
            unrecycled
        );
    }

    let final_yield = result.h2_yields[n - 1];
    assert!(
        final_yield >= config.target_yield,
        "Final yield {} below target {}",
        final_yield,
        config.target_yield
    );
}

/// Create a scenario around a custom model
pub fn create_scenario(model: Box<dyn YieldModel>, config: SimulationConfig) -> Scenario {
    Scenario::new(model, config)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
