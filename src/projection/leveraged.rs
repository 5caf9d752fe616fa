//! Plan B: whole life policy plus an EPIG funded by policy loans

use crate::inputs::InputModel;
use super::results::LeveragedPlanResult;
use super::state::LeveragedState;

/// Run the funding years, then settle the EPIG: net of interest, taxed on
/// gains, loan principal repaid. Only the remainder is annuitized.
pub fn simulate_leveraged(inputs: &InputModel) -> LeveragedPlanResult {
    let mut state = LeveragedState::new();
    let years: Vec<_> = (0..inputs.time_horizon)
        .map(|_| state.advance_year(inputs))
        .collect();

    let total_premiums_paid = inputs.total_contributed();

    let epig_after_interest = state.epig_value - state.cumulative_interest;
    let total_borrowed = total_premiums_paid * inputs.borrow_percent;
    let epig_gains = epig_after_interest - total_borrowed;
    let tax_on_epig_gains = epig_gains * inputs.tax_rate;
    let epig_after_tax = epig_after_interest - tax_on_epig_gains;

    // Loan is repaid from the EPIG before anything reaches the policyholder
    let net_epig_after_loan_payoff = (epig_after_tax - state.loan_balance).max(0.0);

    let annuitizable_amount = net_epig_after_loan_payoff;
    let perpetual_income = annuitizable_amount * inputs.perpetual_rate;

    let total_liquidity = state.cash_value;

    let gross_death_benefit = inputs.death_benefit;
    let net_death_benefit = inputs.death_benefit;
    let net_legacy = net_death_benefit - total_premiums_paid;

    log::debug!(
        "Plan B: cash_value={:.2} loan={:.2} interest={:.2} net_epig={:.2}",
        state.cash_value, state.loan_balance, state.cumulative_interest, net_epig_after_loan_payoff
    );

    LeveragedPlanResult {
        years,
        cash_value: state.cash_value,
        epig_value: state.epig_value,
        cumulative_interest: state.cumulative_interest,
        loan_balance: state.loan_balance,
        total_premiums_paid,
        total_borrowed,
        epig_after_interest,
        epig_gains,
        tax_on_epig_gains,
        epig_after_tax,
        net_epig_after_loan_payoff,
        annuitizable_amount,
        perpetual_income,
        total_liquidity,
        gross_death_benefit,
        net_death_benefit,
        net_legacy,
    }
}
