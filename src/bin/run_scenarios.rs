//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: cargo run --bin run_scenarios -- scenarios.csv --output scenario_summary.csv

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use wealth_comparison::inputs::load_scenarios;
use wealth_comparison::report::{format_currency, write_summaries, ScenarioSummaryRow};
use wealth_comparison::ScenarioRunner;

#[derive(Parser, Debug)]
#[command(name = "run_scenarios")]
#[command(about = "Batch comparison over a CSV of scenarios")]
struct Args {
    /// CSV with a `scenario` column plus any input fields
    input: PathBuf,

    /// Summary output path
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// JSON file overriding illustration assumptions
    #[arg(long, env = "WC_ASSUMPTIONS")]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(path) => ScenarioRunner::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    let run_start = Instant::now();
    let reports = runner.run_scenarios(&scenarios);
    println!("Comparisons complete in {:?}", run_start.elapsed());

    let summaries: Vec<ScenarioSummaryRow> = reports
        .iter()
        .map(|named| ScenarioSummaryRow::from_report(&named.name, &named.report))
        .collect();

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_summaries(file, &summaries)?;
    println!("Output written to {}", args.output.display());

    println!("\n{:<20} {:>14} {:>14} {:>14} {:>14} {:>9}",
        "Scenario", "A Income", "B Income", "A Liquidity", "B Liquidity", "Warnings");
    println!("{}", "-".repeat(90));
    for row in &summaries {
        println!("{:<20} {:>14} {:>14} {:>14} {:>14} {:>9}",
            row.scenario,
            format_currency(row.plan_a_income),
            format_currency(row.plan_b_income),
            format_currency(row.plan_a_liquidity),
            format_currency(row.plan_b_liquidity),
            row.warnings);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
