//! Compare metrics and projections across all scenarios in a scenario file
//!
//! Outputs one row per scenario for side-by-side comparison

use breakeven_system::projection::summarize;
use breakeven_system::scenario::ScenarioStore;
use breakeven_system::{compute_metrics, compute_projection, Metrics, ProjectionSummary};
use rayon::prelude::*;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scenarios.json".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {path}...");
    let store = ScenarioStore::load_from_path(&path).expect("Failed to load scenario file");
    let scenarios = store.list();
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    // Compute all scenarios in parallel; the core is pure and needs no coordination
    let calc_start = Instant::now();
    let rows: Vec<(u32, String, Metrics, ProjectionSummary)> = scenarios
        .par_iter()
        .map(|scenario| {
            let params = scenario.params();
            let metrics = compute_metrics(scenario.total_fixed_costs(), &params);
            let summary = summarize(&compute_projection(&params));
            (scenario.id, scenario.name.clone(), metrics, summary)
        })
        .collect();
    println!("Computed {} scenarios in {:?}\n", rows.len(), calc_start.elapsed());

    println!(
        "{:>4} {:<24} {:>12} {:>14} {:>14} {:>14}",
        "Id", "Name", "BE Learners", "BE MRR", "M12 Learners", "M12 MRR"
    );
    println!("{}", "-".repeat(88));

    for (id, name, metrics, summary) in &rows {
        println!(
            "{:>4} {:<24} {:>12} {:>14.2} {:>14} {:>14}",
            id, name, metrics.break_even_learners, metrics.break_even_mrr,
            summary.final_learners, summary.final_mrr
        );
    }
}
