//! Formatting and table output for presenters
//!
//! Currency strings plus CSV/JSON writers for trajectories, checkpoint
//! tables and batch summaries.

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::projection::{ComparisonReport, ComparisonRow, DirectYearRow, LeveragedYearRow, PlanOutcome};

/// Whole-dollar currency with thousands separators: `$1,297,934`
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 && value.abs().round() > 0.0 { "-" } else { "" };
    let dollars = format!("{:.0}", value.abs().round());

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}${}", sign, grouped)
}

/// Abbreviated currency for charts and narrow columns: `$1.3M`, `$330K`
pub fn format_currency_short(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.0}K", sign, abs / 1_000.0)
    } else {
        format_currency(value)
    }
}

/// One line per scenario in a batch summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummaryRow {
    pub scenario: String,
    pub current_age: u32,
    pub time_horizon: u32,
    pub annual_contribution: f64,
    pub plan_a_income: f64,
    pub plan_a_liquidity: f64,
    pub plan_a_legacy: f64,
    pub plan_b_income: f64,
    pub plan_b_liquidity: f64,
    pub plan_b_legacy: f64,
    /// Plan B legacy at the last checkpoint (death benefit + net EPIG)
    pub plan_b_final_legacy_at_death: f64,
    pub warnings: usize,
}

impl ScenarioSummaryRow {
    pub fn from_report(scenario: &str, report: &ComparisonReport) -> Self {
        Self {
            scenario: scenario.to_string(),
            current_age: report.inputs.current_age,
            time_horizon: report.inputs.time_horizon,
            annual_contribution: report.inputs.annual_contribution,
            plan_a_income: report.plan_a.perpetual_income(),
            plan_a_liquidity: report.plan_a.liquidity(),
            plan_a_legacy: report.plan_a.net_legacy(),
            plan_b_income: report.plan_b.perpetual_income(),
            plan_b_liquidity: report.plan_b.liquidity(),
            plan_b_legacy: report.plan_b.net_legacy(),
            plan_b_final_legacy_at_death: report
                .checkpoints
                .last()
                .map(|row| row.plan_b_legacy)
                .unwrap_or(0.0),
            warnings: report.warnings.len(),
        }
    }
}

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Plan A year table: year, contribution, portfolio value
pub fn write_direct_trajectory<W: Write>(writer: W, rows: &[DirectYearRow]) -> Result<()> {
    write_rows(writer, rows)
}

/// Plan B year table: year, funding, borrowed, loan balance, interest,
/// cumulative interest, EPIG value, cash value
pub fn write_leveraged_trajectory<W: Write>(writer: W, rows: &[LeveragedYearRow]) -> Result<()> {
    write_rows(writer, rows)
}

pub fn write_checkpoints<W: Write>(writer: W, rows: &[ComparisonRow]) -> Result<()> {
    write_rows(writer, rows)
}

pub fn write_summaries<W: Write>(writer: W, rows: &[ScenarioSummaryRow]) -> Result<()> {
    write_rows(writer, rows)
}

/// Full report as pretty-printed JSON
pub fn write_json<W: Write, T: Serialize>(writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
