//! Output structures for plan simulations and the checkpoint comparison

use serde::{Deserialize, Serialize};

use crate::inputs::{InputModel, InputWarning};

/// One year of the direct-investment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectYearRow {
    pub year: u32,
    pub contribution: f64,
    /// Portfolio value after this year's contribution and growth
    pub portfolio_value: f64,
}

/// One year of the whole life + policy-loan plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveragedYearRow {
    pub year: u32,
    /// Premium paid into the policy
    pub funding: f64,
    /// Loan proceeds moved into the EPIG this year
    pub borrowed: f64,
    /// Cumulative loan principal (interest never capitalizes)
    pub loan_balance: f64,
    /// Interest on the beginning-of-year loan balance
    pub interest_payment: f64,
    pub cumulative_interest: f64,
    pub epig_value: f64,
    pub cash_value: f64,
}

/// The three headline metrics every plan reports
pub trait PlanOutcome {
    /// Flat annual income from the annuitized pool
    fn perpetual_income(&self) -> f64;

    /// Money accessible while alive
    fn liquidity(&self) -> f64;

    /// Transfer to heirs net of contributions
    fn net_legacy(&self) -> f64;
}

/// Terminal aggregate for the direct-investment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectPlanResult {
    pub years: Vec<DirectYearRow>,
    pub portfolio_value: f64,
    pub total_contributed: f64,
    pub gains: f64,
    pub tax_on_gains: f64,
    pub after_tax_capital: f64,
    /// Share of after-tax capital converted to perpetual income
    pub annuitized_amount: f64,
    /// Share of after-tax capital left liquid
    pub liquidity_fund: f64,
    pub perpetual_income: f64,
    pub liquidity: f64,
    /// Always zero: the liquidity fund is what heirs receive
    pub net_legacy: f64,
}

impl PlanOutcome for DirectPlanResult {
    fn perpetual_income(&self) -> f64 {
        self.perpetual_income
    }

    fn liquidity(&self) -> f64 {
        self.liquidity
    }

    fn net_legacy(&self) -> f64 {
        self.net_legacy
    }
}

/// Terminal aggregate for the whole life + policy-loan plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveragedPlanResult {
    pub years: Vec<LeveragedYearRow>,
    pub cash_value: f64,
    pub epig_value: f64,
    pub cumulative_interest: f64,
    pub loan_balance: f64,
    pub total_premiums_paid: f64,
    pub total_borrowed: f64,
    /// EPIG net of all loan interest paid over the horizon
    pub epig_after_interest: f64,
    pub epig_gains: f64,
    pub tax_on_epig_gains: f64,
    pub epig_after_tax: f64,
    /// After-tax EPIG less loan principal, floored at zero
    pub net_epig_after_loan_payoff: f64,
    /// Pool eligible for annuitization (the net EPIG; cash value is not)
    pub annuitizable_amount: f64,
    pub perpetual_income: f64,
    /// Cash value only; the net EPIG is committed to income
    pub total_liquidity: f64,
    pub gross_death_benefit: f64,
    /// Not reduced by the loan, which is repaid from the EPIG
    pub net_death_benefit: f64,
    pub net_legacy: f64,
}

impl PlanOutcome for LeveragedPlanResult {
    fn perpetual_income(&self) -> f64 {
        self.perpetual_income
    }

    fn liquidity(&self) -> f64 {
        self.total_liquidity
    }

    fn net_legacy(&self) -> f64 {
        self.net_legacy
    }
}

/// Both plans at one checkpoint past the funding horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Years past the end of funding
    pub offset_years: u32,
    /// Years since funding began
    pub year: u32,
    pub age: u32,

    pub plan_a_income: f64,
    pub plan_a_liquidity: f64,
    pub plan_a_legacy: f64,

    pub plan_b_income: f64,
    /// Liquidity while alive (projected cash value)
    pub plan_b_liquidity: f64,
    /// Projected death benefit plus projected net EPIG
    pub plan_b_legacy: f64,
    pub plan_b_death_benefit: f64,
    pub plan_b_cash_value: f64,
    pub plan_b_net_epig: f64,
}

/// Everything one computation hands to a presenter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub inputs: InputModel,
    pub warnings: Vec<InputWarning>,
    pub plan_a: DirectPlanResult,
    pub plan_b: LeveragedPlanResult,
    pub checkpoints: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Checkpoint at a given offset past funding end
    pub fn checkpoint(&self, offset_years: u32) -> Option<&ComparisonRow> {
        self.checkpoints.iter().find(|row| row.offset_years == offset_years)
    }
}
