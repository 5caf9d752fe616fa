//! Running balances for the policy-loan plan

use crate::inputs::InputModel;
use super::results::LeveragedYearRow;

/// State of the policy-loan plan at the end of a funding year
#[derive(Debug, Clone, Default)]
pub struct LeveragedState {
    /// Last completed funding year (0 before the first year)
    pub year: u32,

    /// Policy cash value
    pub cash_value: f64,

    /// Leveraged side-investment funded by loan proceeds
    pub epig_value: f64,

    /// Loan principal outstanding
    pub loan_balance: f64,

    /// Interest paid to date
    pub cumulative_interest: f64,
}

impl LeveragedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one funding year and return that year's row.
    ///
    /// Interest is charged on the beginning-of-year balance and expensed;
    /// only the new borrowing is added to the loan principal.
    pub fn advance_year(&mut self, inputs: &InputModel) -> LeveragedYearRow {
        let timing = inputs.contribution_timing;
        let premium = inputs.annual_contribution;

        self.year += 1;
        self.cash_value = timing.step(self.cash_value, premium, inputs.cv_growth_rate);

        // Sized off this year's premium, not off accumulated cash value
        let borrow_amount = premium * inputs.borrow_percent;

        let interest_payment = self.loan_balance * inputs.loan_rate;
        self.cumulative_interest += interest_payment;

        self.epig_value = timing.step(self.epig_value, borrow_amount, inputs.direct_cagr);
        self.loan_balance += borrow_amount;

        LeveragedYearRow {
            year: self.year,
            funding: premium,
            borrowed: borrow_amount,
            loan_balance: self.loan_balance,
            interest_payment,
            cumulative_interest: self.cumulative_interest,
            epig_value: self.epig_value,
            cash_value: self.cash_value,
        }
    }
}
