//! Wealth Comparison CLI
//!
//! Resolves inputs from flags, runs both plans and the checkpoint projection,
//! and prints the scorecard and long-horizon table.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use wealth_comparison::inputs::resolve::{
    ANNUAL_CONTRIBUTION, BORROW_PERCENT, CONTRIBUTION_TIMING, CURRENT_AGE, CV_GROWTH_RATE,
    DEATH_BENEFIT, DIRECT_CAGR, LOAN_RATE, PERPETUAL_RATE, TAX_RATE, TIME_HORIZON,
};
use wealth_comparison::report::{
    format_currency, write_checkpoints, write_direct_trajectory, write_json, write_leveraged_trajectory,
};
use wealth_comparison::{ComparisonReport, InputForm, PlanOutcome, ScenarioRunner};

/// Compare direct investing against whole life plus leveraged policy loans.
///
/// Rate flags are percentages (e.g. `--direct-cagr 20`). Missing or
/// malformed values fall back to the documented defaults with a warning.
#[derive(Parser, Debug)]
#[command(name = "wealth-comparison")]
#[command(version)]
struct Args {
    #[arg(long, env = "WC_CURRENT_AGE")]
    current_age: Option<String>,

    /// Funding years
    #[arg(long, env = "WC_TIME_HORIZON")]
    time_horizon: Option<String>,

    #[arg(long, env = "WC_ANNUAL_CONTRIBUTION")]
    annual_contribution: Option<String>,

    /// `start` or `end` of each year
    #[arg(long, env = "WC_CONTRIBUTION_TIMING")]
    contribution_timing: Option<String>,

    #[arg(long, env = "WC_DIRECT_CAGR")]
    direct_cagr: Option<String>,

    #[arg(long, env = "WC_TAX_RATE")]
    tax_rate: Option<String>,

    #[arg(long, env = "WC_PERPETUAL_RATE")]
    perpetual_rate: Option<String>,

    #[arg(long, env = "WC_CV_GROWTH_RATE")]
    cv_growth_rate: Option<String>,

    #[arg(long, env = "WC_BORROW_PERCENT")]
    borrow_percent: Option<String>,

    #[arg(long, env = "WC_LOAN_RATE")]
    loan_rate: Option<String>,

    #[arg(long, env = "WC_DEATH_BENEFIT")]
    death_benefit: Option<String>,

    /// JSON file overriding illustration assumptions
    #[arg(long, env = "WC_ASSUMPTIONS")]
    assumptions: Option<PathBuf>,

    /// Directory for plan_a_years.csv, plan_b_years.csv and checkpoints.csv
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the year-by-year Plan B table
    #[arg(long)]
    years: bool,
}

impl Args {
    fn form(&self) -> InputForm {
        [
            (CURRENT_AGE, &self.current_age),
            (TIME_HORIZON, &self.time_horizon),
            (ANNUAL_CONTRIBUTION, &self.annual_contribution),
            (CONTRIBUTION_TIMING, &self.contribution_timing),
            (DIRECT_CAGR, &self.direct_cagr),
            (TAX_RATE, &self.tax_rate),
            (PERPETUAL_RATE, &self.perpetual_rate),
            (CV_GROWTH_RATE, &self.cv_growth_rate),
            (BORROW_PERCENT, &self.borrow_percent),
            (LOAN_RATE, &self.loan_rate),
            (DEATH_BENEFIT, &self.death_benefit),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.as_str())))
        .collect()
    }
}

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    generated_at: DateTime<Utc>,
    report: &'a ComparisonReport,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.assumptions {
        Some(path) => ScenarioRunner::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    let form = args.form();
    let report = runner.run_form(&form);

    print_report(&report, args.years);

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = dir.join("plan_a_years.csv");
        write_direct_trajectory(File::create(&path)?, &report.plan_a.years)
            .with_context(|| format!("writing {}", path.display()))?;

        let path = dir.join("plan_b_years.csv");
        write_leveraged_trajectory(File::create(&path)?, &report.plan_b.years)
            .with_context(|| format!("writing {}", path.display()))?;

        let path = dir.join("checkpoints.csv");
        write_checkpoints(File::create(&path)?, &report.checkpoints)
            .with_context(|| format!("writing {}", path.display()))?;

        println!("\nTables written to: {}", dir.display());
    }

    if let Some(path) = &args.json {
        let envelope = ReportEnvelope {
            generated_at: Utc::now(),
            report: &report,
        };
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_json(BufWriter::new(file), &envelope)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

fn print_report(report: &ComparisonReport, show_years: bool) {
    let inputs = &report.inputs;

    println!("Wealth Comparison v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Inputs:");
    println!("  Age {} funding {} years at {} ({})",
        inputs.current_age,
        inputs.time_horizon,
        format_currency(inputs.annual_contribution),
        inputs.contribution_timing.as_str());
    println!("  Direct CAGR {:.2}%  Tax {:.2}%  Perpetual {:.2}%",
        inputs.direct_cagr * 100.0, inputs.tax_rate * 100.0, inputs.perpetual_rate * 100.0);
    println!("  CV growth {:.2}%  Borrow {:.2}%  Loan {:.2}%  Death benefit {}",
        inputs.cv_growth_rate * 100.0,
        inputs.borrow_percent * 100.0,
        inputs.loan_rate * 100.0,
        format_currency(inputs.death_benefit));

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }

    if show_years {
        println!("\nPlan B by year:");
        println!("{:>4} {:>12} {:>12} {:>14} {:>12} {:>14} {:>14} {:>14}",
            "Year", "Funding", "Borrowed", "Loan Bal", "Interest", "Cum Interest", "EPIG", "Cash Value");
        println!("{}", "-".repeat(104));
        for row in &report.plan_b.years {
            println!("{:>4} {:>12} {:>12} {:>14} {:>12} {:>14} {:>14} {:>14}",
                row.year,
                format_currency(row.funding),
                format_currency(row.borrowed),
                format_currency(row.loan_balance),
                format_currency(row.interest_payment),
                format_currency(row.cumulative_interest),
                format_currency(row.epig_value),
                format_currency(row.cash_value));
        }
    }

    println!("\nScorecard at age {}:", inputs.age_at_funding_end());
    println!("{:<20} {:>16} {:>16}", "", "Plan A (Direct)", "Plan B (WL+EPIG)");
    println!("{}", "-".repeat(54));
    println!("{:<20} {:>16} {:>16}", "Perpetual income",
        format_currency(report.plan_a.perpetual_income()),
        format_currency(report.plan_b.perpetual_income()));
    println!("{:<20} {:>16} {:>16}", "Liquidity",
        format_currency(report.plan_a.liquidity()),
        format_currency(report.plan_b.liquidity()));
    println!("{:<20} {:>16} {:>16}", "Net legacy",
        format_currency(report.plan_a.net_legacy()),
        format_currency(report.plan_b.net_legacy()));

    println!("\nPlan B detail:");
    println!("  EPIG {}  after interest {}  after tax {}",
        format_currency(report.plan_b.epig_value),
        format_currency(report.plan_b.epig_after_interest),
        format_currency(report.plan_b.epig_after_tax));
    println!("  Loan payoff {}  net EPIG {}",
        format_currency(report.plan_b.loan_balance),
        format_currency(report.plan_b.net_epig_after_loan_payoff));

    println!("\nLong-horizon comparison:");
    println!("{:>5} {:>4} {:>12} {:>14} {:>12} {:>14} {:>16}",
        "Year", "Age", "A Income", "A Liquidity", "B Income", "B Liquidity", "B Legacy@Death");
    println!("{}", "-".repeat(83));
    for row in &report.checkpoints {
        println!("{:>5} {:>4} {:>12} {:>14} {:>12} {:>14} {:>16}",
            row.year,
            row.age,
            format_currency(row.plan_a_income),
            format_currency(row.plan_a_liquidity),
            format_currency(row.plan_b_income),
            format_currency(row.plan_b_liquidity),
            format_currency(row.plan_b_legacy));
    }
}
