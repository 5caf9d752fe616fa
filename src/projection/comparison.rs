//! Long-horizon checkpoint projection
//!
//! Extrapolates both plans' terminal values past the funding horizon. Income
//! stays flat once annuitized. Plan A liquidity and Plan B's net EPIG sit in
//! bonds taxed annually; Plan B cash value and death benefit follow the
//! tiered illustration curves.

use crate::assumptions::{compound, IllustrationAssumptions};
use crate::inputs::InputModel;
use super::results::{ComparisonRow, DirectPlanResult, LeveragedPlanResult};

/// One row per configured checkpoint offset, in offset order as configured
pub fn project_checkpoints(
    plan_a: &DirectPlanResult,
    plan_b: &LeveragedPlanResult,
    inputs: &InputModel,
    assumptions: &IllustrationAssumptions,
) -> Vec<ComparisonRow> {
    let bond_rate = assumptions.after_tax_bond_rate(inputs.tax_rate);

    assumptions
        .checkpoint_offsets
        .iter()
        .map(|&offset| {
            let plan_a_liquidity = compound(plan_a.liquidity_fund, bond_rate, offset);

            let cash_value = assumptions.cash_value_curve.value_at(plan_b.cash_value, offset);
            let death_benefit = assumptions
                .death_benefit_curve
                .value_at(plan_b.net_death_benefit, offset);
            let net_epig = compound(plan_b.net_epig_after_loan_payoff, bond_rate, offset);

            ComparisonRow {
                offset_years: offset,
                year: inputs.time_horizon.saturating_add(offset),
                age: inputs.age_at_funding_end().saturating_add(offset),
                plan_a_income: plan_a.perpetual_income,
                plan_a_liquidity,
                plan_a_legacy: 0.0,
                plan_b_income: plan_b.perpetual_income,
                plan_b_liquidity: cash_value,
                // Death benefit already includes cash value; the EPIG sits outside the policy
                plan_b_legacy: death_benefit + net_epig,
                plan_b_death_benefit: death_benefit,
                plan_b_cash_value: cash_value,
                plan_b_net_epig: net_epig,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{simulate_direct, simulate_leveraged};
    use approx::assert_relative_eq;

    fn rows(inputs: &InputModel) -> (DirectPlanResult, LeveragedPlanResult, Vec<ComparisonRow>) {
        let assumptions = IllustrationAssumptions::default_illustration();
        let a = simulate_direct(inputs, &assumptions);
        let b = simulate_leveraged(inputs);
        let rows = project_checkpoints(&a, &b, inputs, &assumptions);
        (a, b, rows)
    }

    #[test]
    fn test_five_rows_with_ages() {
        let inputs = InputModel::default();
        let (_, _, rows) = rows(&inputs);

        assert_eq!(rows.len(), 5);
        let offsets: Vec<u32> = rows.iter().map(|r| r.offset_years).collect();
        assert_eq!(offsets, vec![0, 10, 20, 30, 40]);

        let ages: Vec<u32> = rows.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![61, 71, 81, 91, 101]);
        assert!(rows.windows(2).all(|w| w[0].age < w[1].age));
        assert_eq!(rows[2].year, 30);
    }

    #[test]
    fn test_offset_zero_reproduces_terminal_values() {
        let (a, b, rows) = rows(&InputModel::default());
        let first = &rows[0];

        assert_eq!(first.plan_a_liquidity, a.liquidity_fund);
        assert_eq!(first.plan_b_cash_value, b.cash_value);
        assert_eq!(first.plan_b_death_benefit, b.net_death_benefit);
        assert_eq!(first.plan_b_net_epig, b.net_epig_after_loan_payoff);
        assert_eq!(first.plan_b_legacy, b.net_death_benefit + b.net_epig_after_loan_payoff);
    }

    #[test]
    fn test_income_flat_and_plan_a_legacy_zero() {
        let (a, b, rows) = rows(&InputModel::default());
        for row in &rows {
            assert_eq!(row.plan_a_income, a.perpetual_income);
            assert_eq!(row.plan_b_income, b.perpetual_income);
            assert_eq!(row.plan_a_legacy, 0.0);
            assert_eq!(row.plan_b_liquidity, row.plan_b_cash_value);
        }
    }

    #[test]
    fn test_bond_growth_is_after_tax() {
        let (a, b, rows) = rows(&InputModel::default());
        // 5% x (1 - 25%) = 3.75% for 20 years
        let factor = 1.0375f64.powi(20);
        assert_relative_eq!(rows[2].plan_a_liquidity, a.liquidity_fund * factor, max_relative = 1e-12);
        assert_relative_eq!(rows[2].plan_b_net_epig, b.net_epig_after_loan_payoff * factor, max_relative = 1e-12);
    }

    #[test]
    fn test_cash_value_follows_tiers() {
        let (_, b, rows) = rows(&InputModel::default());
        let at_10 = b.cash_value * 1.0688f64.powi(10);
        let at_20 = at_10 * 1.0524f64.powi(10);
        let at_40 = at_20 * 1.0461f64.powi(20);

        assert_relative_eq!(rows[1].plan_b_cash_value, at_10, max_relative = 1e-12);
        assert_relative_eq!(rows[2].plan_b_cash_value, at_20, max_relative = 1e-12);
        assert_relative_eq!(rows[4].plan_b_cash_value, at_40, max_relative = 1e-12);

        let db_30 = 750_000.0 * 1.03f64.powi(10) * 1.0276f64.powi(10) * 1.0293f64.powi(10);
        assert_relative_eq!(rows[3].plan_b_death_benefit, db_30, max_relative = 1e-12);
    }

    #[test]
    fn test_custom_offsets() {
        let assumptions = IllustrationAssumptions {
            checkpoint_offsets: vec![0, 5, 15, 25, 35],
            ..IllustrationAssumptions::default_illustration()
        };
        let inputs = InputModel::default();
        let a = simulate_direct(&inputs, &assumptions);
        let b = simulate_leveraged(&inputs);
        let rows = project_checkpoints(&a, &b, &inputs, &assumptions);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].age, 66);
        assert_eq!(rows[4].year, 45);
    }

    #[test]
    fn test_extreme_age_saturates() {
        let inputs = InputModel {
            current_age: u32::MAX - 5,
            ..InputModel::default()
        };
        let (_, _, rows) = rows(&inputs);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].age, u32::MAX);
        assert_eq!(rows[4].age, u32::MAX);
        assert_eq!(rows[4].year, 50);
    }
}
