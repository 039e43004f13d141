//! Breakeven System CLI
//!
//! Command-line interface for computing break-even metrics and a 12-month
//! MRR projection from cost and pricing inputs

use anyhow::Context;
use breakeven_system::costs::{load_cost_items, total_amount};
use breakeven_system::projection::summarize;
use breakeven_system::{compute_metrics, compute_projection, FinancialParams};
use clap::Parser;
use std::fs::File;
use std::io::Write;

/// Compute break-even metrics and a 12-month MRR projection
#[derive(Debug, Parser)]
#[command(name = "breakeven_system", version)]
struct Cli {
    /// Subscription price per learner per month
    #[arg(long, default_value_t = 299.0)]
    price: f64,

    /// Variable cost per learner per month (ignored with --variable-costs-file)
    #[arg(long, default_value_t = 45.0)]
    variable_cost: f64,

    /// Learner count at the start of month 1
    #[arg(long, default_value_t = 150.0)]
    initial_learners: f64,

    /// Monthly growth rate in percent
    #[arg(long, default_value_t = 8.5)]
    growth_rate: f64,

    /// Monthly churn rate in percent
    #[arg(long, default_value_t = 5.2)]
    churn_rate: f64,

    /// Total fixed monthly costs (ignored with --fixed-costs-file)
    #[arg(long, default_value_t = 65_500.0)]
    fixed_costs: f64,

    /// CSV file of fixed cost line items (Id,Description,Amount)
    #[arg(long)]
    fixed_costs_file: Option<String>,

    /// CSV file of variable cost line items (Id,Description,Amount)
    #[arg(long)]
    variable_costs_file: Option<String>,

    /// Write the projection to this CSV file
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Breakeven System v0.1.0");
    println!("=======================\n");

    let fixed_costs = match &cli.fixed_costs_file {
        Some(path) => {
            let items = load_cost_items(path)
                .map_err(|e| anyhow::anyhow!("failed to load fixed costs from {path}: {e}"))?;
            println!("Loaded {} fixed cost items from {}", items.len(), path);
            total_amount(&items)
        }
        None => cli.fixed_costs,
    };

    let variable_cost = match &cli.variable_costs_file {
        Some(path) => {
            let items = load_cost_items(path)
                .map_err(|e| anyhow::anyhow!("failed to load variable costs from {path}: {e}"))?;
            println!("Loaded {} variable cost items from {}", items.len(), path);
            total_amount(&items)
        }
        None => cli.variable_cost,
    };

    let params = FinancialParams::new(
        cli.price,
        variable_cost,
        cli.initial_learners,
        cli.growth_rate,
        cli.churn_rate,
    );

    println!("Inputs:");
    println!("  Fixed costs:         ${:.2}/month", fixed_costs);
    println!("  Price:               ${:.2}/learner/month", params.price_per_learner);
    println!("  Variable cost:       ${:.2}/learner/month", params.variable_cost_per_learner);
    println!("  Initial learners:    {}", params.initial_learner_count);
    println!("  Growth rate:         {}%/month", params.monthly_growth_rate);
    println!("  Churn rate:          {}%/month", params.monthly_churn_rate);
    println!();

    let metrics = compute_metrics(fixed_costs, &params);

    println!("Unit Economics:");
    println!("  Contribution margin: ${:.2}/learner", metrics.contribution_margin);
    println!("  CM ratio:            {:.1}%", metrics.cm_ratio);
    if metrics.break_even_learners > 0 {
        println!(
            "  Break-even:          {} learners (${:.2} MRR)",
            metrics.break_even_learners, metrics.break_even_mrr
        );
    } else {
        println!("  Break-even:          not reachable at current unit economics");
    }
    println!();

    let projection = compute_projection(&params);

    println!("Projection ({} months):", projection.len());
    println!("{:>5} {:>10} {:>12}", "Month", "Learners", "MRR");
    println!("{}", "-".repeat(29));
    for period in &projection {
        println!("{:>5} {:>10} {:>12}", period.month, period.learners, period.mrr);
    }

    let summary = summarize(&projection);
    println!("\nSummary:");
    println!("  Final learners:      {}", summary.final_learners);
    println!("  Final MRR:           ${}", summary.final_mrr);
    println!("  12-month revenue:    ${}", summary.cumulative_revenue);

    if let Some(path) = &cli.output {
        let mut file =
            File::create(path).with_context(|| format!("unable to create {path}"))?;
        writeln!(file, "Month,Learners,MRR")?;
        for period in &projection {
            writeln!(file, "{},{},{}", period.month, period.learners, period.mrr)?;
        }
        println!("\nProjection written to: {}", path);
    }

    Ok(())
}
