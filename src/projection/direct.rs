//! Plan A: direct taxable investment

use crate::assumptions::IllustrationAssumptions;
use crate::inputs::InputModel;
use super::results::{DirectPlanResult, DirectYearRow};

/// Compound the annual contribution at `direct_cagr`, tax the gains once at
/// the end, then split after-tax capital into annuitized and liquid pools.
pub fn simulate_direct(inputs: &InputModel, assumptions: &IllustrationAssumptions) -> DirectPlanResult {
    let mut portfolio_value = 0.0;
    let mut years = Vec::with_capacity(inputs.time_horizon as usize);

    for year in 1..=inputs.time_horizon {
        portfolio_value = inputs.contribution_timing.step(
            portfolio_value,
            inputs.annual_contribution,
            inputs.direct_cagr,
        );
        years.push(DirectYearRow {
            year,
            contribution: inputs.annual_contribution,
            portfolio_value,
        });
    }

    let total_contributed = inputs.total_contributed();
    let gains = portfolio_value - total_contributed;
    let tax_on_gains = gains * inputs.tax_rate;
    let after_tax_capital = portfolio_value - tax_on_gains;

    let annuitized_amount = after_tax_capital * assumptions.annuitized_share;
    let liquidity_fund = after_tax_capital * assumptions.liquid_share();
    let perpetual_income = annuitized_amount * inputs.perpetual_rate;

    log::debug!(
        "Plan A: portfolio={:.2} after_tax={:.2} income={:.2}",
        portfolio_value, after_tax_capital, perpetual_income
    );

    DirectPlanResult {
        years,
        portfolio_value,
        total_contributed,
        gains,
        tax_on_gains,
        after_tax_capital,
        annuitized_amount,
        liquidity_fund,
        perpetual_income,
        liquidity: liquidity_fund,
        net_legacy: 0.0,
    }
}
