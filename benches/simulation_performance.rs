//! Performance benchmarks for the accumulation loop
//!
//! Compares the linear and Arrhenius-corrected yield models on identical
//! configurations, and measures how run time scales with the number of
//! iterations a target requires.
//!
//! # What We're Measuring
//!
//! 1. **Linear model**: one multiply-add per iteration
//! 2. **Arrhenius model**: one extra `exp` per iteration (temperature factor)
//! 3. **Scaling**: iterations grow as √target for both models, since the
//!    step yield grows linearly with the MCH fed
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench simulation_performance
//!
//! # Model comparison only
//! cargo bench --bench simulation_performance comparison
//! ```
//!
//! # Expected Results
//!
//! The Arrhenius run at the reference conditions needs 28 iterations against
//! 15 for the linear run, so expect roughly a 2× ratio on the default
//! configuration. Large targets are dominated by `Vec` growth in the result.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mch_rs::models::ModelVariant;
use mch_rs::solver::{Scenario, SimulationConfig, SimulationLoop};
use std::hint::black_box;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Both models on the reference configuration
fn benchmark_model_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Model Comparison");
    let simulation = SimulationLoop::new();

    for variant in [ModelVariant::Linear, ModelVariant::Arrhenius] {
        // Setup (not measured)
        let scenario = Scenario::from_config(SimulationConfig::default().with_model(variant));

        group.bench_function(variant.name(), |b| {
            b.iter(|| simulation.run(black_box(&scenario)).unwrap());
        });
    }

    group.finish();
}

/// Scaling with the target yield
///
/// Targets span four decades. With a small increment the largest target
/// needs a few thousand iterations.
fn benchmark_target_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Target Scaling");
    let simulation = SimulationLoop::new();

    for target in [1e3, 1e4, 1e5, 1e6] {
        let config = SimulationConfig::default()
            .with_mch_increment(100.0)
            .with_target_yield(target);
        let scenario = Scenario::from_config(config);

        // Iteration count is known ahead of time: report it as throughput
        let iterations = simulation.run(&scenario).map(|r| r.iterations()).unwrap_or(1);
        group.throughput(Throughput::Elements(iterations as u64));

        group.bench_with_input(BenchmarkId::from_parameter(target), &scenario, |b, scenario| {
            b.iter(|| simulation.run(black_box(scenario)).unwrap());
        });
    }

    group.finish();
}

/// Cost of hitting the iteration cap on a reactor that never yields
fn benchmark_non_convergent(c: &mut Criterion) {
    let simulation = SimulationLoop::new();
    let scenario = Scenario::from_config(
        SimulationConfig::default()
            .with_selectivity(0.0)
            .with_max_iterations(10_000),
    );

    c.bench_function("Non-convergent 10000 iterations", |b| {
        b.iter(|| simulation.run(black_box(&scenario)).unwrap_err());
    });
}

criterion_group!(
    benches,
    benchmark_model_comparison,
    benchmark_target_scaling,
    benchmark_non_convergent,
);
criterion_main!(benches);
