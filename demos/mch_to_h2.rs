//! Example: MCH Dehydrogenation - Linear vs Arrhenius Yield
//!
//! Feeds methylcyclohexane to a dehydrogenation reactor in 1000 kg
//! increments until 5000 kg of hydrogen have been released, once with the
//! linear yield law and once with the Arrhenius-corrected law.
//!
//! **Reaction**: MCH → toluene + 3 H₂ (theoretical 0.0616 kg H₂/kg MCH)
//!
//! **Parameters** (reference plant):
//! - Selectivity: 0.99
//! - Conversion rate: 0.85
//! - Recycling rate: 0.8
//! - Temperature: 300 °C, pressure: 1 barg (Arrhenius only)
//!
//! Writes one CSV file and one SVG chart per model to the system
//! temporary directory.

use mch_rs::{
    models::ModelVariant,
    output::{
        export::{CsvConfig, CsvMetadata},
        export_simulation_csv, plot_simulation, PlotConfig,
    },
    solver::{run, SimulationConfig, SimulationResult},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  MCH → H₂ Cumulative Yield Simulation");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Plant configuration ======

    let base = SimulationConfig::default();

    println!("Plant Parameters:");
    println!("  Target H₂ yield : {} kg", base.target_yield);
    println!("  MCH increment   : {} kg", base.mch_increment);
    println!("  Selectivity     : {}", base.selectivity);
    println!("  Conversion rate : {}", base.conversion_rate);
    println!("  Recycling rate  : {}", base.recycling_rate);
    println!("  Temperature     : {} °C", base.temperature);
    println!("  Pressure        : {} barg\n", base.pressure);

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Runs
    // =============================================================================================

    let mut results: Vec<(ModelVariant, f64, SimulationResult)> = Vec::new();

    for variant in [ModelVariant::Linear, ModelVariant::Arrhenius] {
        print!("  Model {:<10}: ", variant.name());
        std::io::Write::flush(&mut std::io::stdout())?;

        let config = base.with_model(variant);

        let current_time = Instant::now();
        let result = run(&config)?;
        let elapsed_time = current_time.elapsed().as_secs_f64() * 1e3;

        println!("✓ {:.3} ms", elapsed_time);

        // ====== Export ======

        let csv_path = tmp_dir.join(format!("mch_h2_{}.csv", variant.name()));
        let metadata = CsvMetadata::from_config(&variant.to_string(), &config);
        let csv_config = CsvConfig::default().with_metadata(metadata);
        export_simulation_csv(&result, &csv_path.to_string_lossy(), Some(&csv_config))?;

        let svg_path = tmp_dir.join(format!("mch_h2_{}.svg", variant.name()));
        let plot_config = PlotConfig::new(format!("MCH to Hydrogen Simulation ({} model)", variant.name()));
        plot_simulation(&result, &svg_path.to_string_lossy(), Some(&plot_config))?;

        results.push((variant, elapsed_time, result));
    }

    // =============================================================================================
    // Results Analysis
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Results");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<10} {:>10} {:>14} {:>14} {:>14}",
             "Model", "Iterations", "MCH fed (kg)", "H₂ (kg)", "kg H₂/kg MCH");
    println!("{:-<66}", "");

    for (variant, _, result) in &results {
        println!("{:<10} {:>10} {:>14.1} {:>14.2} {:>14.5}",
                 variant.name(),
                 result.iterations(),
                 result.total_mch_used().unwrap_or(0.0),
                 result.final_cumulative_yield().unwrap_or(0.0),
                 result.overall_efficiency().unwrap_or(0.0));
    }

    if let [(_, _, linear), (_, _, arrhenius)] = results.as_slice() {
        let first_ratio = arrhenius.h2_yields[0] / linear.h2_yields[0];
        println!("\nFirst-step yield ratio (Arrhenius / linear): {:.4}", first_ratio);
    }

    println!("\nOutput written to {}", tmp_dir.display());

    Ok(())
}
