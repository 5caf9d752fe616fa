//! Validated simulation inputs

use serde::{Deserialize, Serialize};

use super::warning::InputWarning;
use crate::assumptions::AdvisoryThresholds;

/// Whether a year's contribution lands before or after that year's growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionTiming {
    /// Contribution is added, then the year's growth applies to it
    Start,
    /// Growth applies first, then the contribution is added
    End,
}

impl ContributionTiming {
    /// Parse `start` / `end` (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "start" => Some(ContributionTiming::Start),
            "end" => Some(ContributionTiming::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionTiming::Start => "start",
            ContributionTiming::End => "end",
        }
    }

    /// Advance `balance` one year at `rate`, adding `amount` per this timing
    pub fn step(&self, balance: f64, amount: f64, rate: f64) -> f64 {
        match self {
            ContributionTiming::Start => (balance + amount) * (1.0 + rate),
            ContributionTiming::End => balance * (1.0 + rate) + amount,
        }
    }
}

/// Simulation parameters. Rates are decimals (0.20 = 20%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputModel {
    /// Age at the start of funding
    pub current_age: u32,

    /// Number of funding years (at least 1)
    pub time_horizon: u32,

    /// Amount contributed (Plan A) or paid as premium (Plan B) each year
    pub annual_contribution: f64,

    pub contribution_timing: ContributionTiming,

    // Plan A / shared
    /// Growth rate of the direct portfolio and of the EPIG
    pub direct_cagr: f64,
    pub tax_rate: f64,
    /// Payout rate on annuitized capital
    pub perpetual_rate: f64,

    // Plan B
    pub cv_growth_rate: f64,
    /// Fraction of each year's premium borrowed against the policy
    pub borrow_percent: f64,
    pub loan_rate: f64,
    /// Nominal death benefit
    pub death_benefit: f64,
}

impl Default for InputModel {
    fn default() -> Self {
        Self {
            current_age: 51,
            time_horizon: 10,
            annual_contribution: 50_000.0,
            contribution_timing: ContributionTiming::End,
            direct_cagr: 0.20,
            tax_rate: 0.25,
            perpetual_rate: 0.07,
            cv_growth_rate: 0.04,
            borrow_percent: 0.90,
            loan_rate: 0.06,
            death_benefit: 750_000.0,
        }
    }
}

impl InputModel {
    /// Total funding over the horizon
    pub fn total_contributed(&self) -> f64 {
        self.annual_contribution * self.time_horizon as f64
    }

    /// Age when funding ends
    pub fn age_at_funding_end(&self) -> u32 {
        self.current_age.saturating_add(self.time_horizon)
    }

    /// Advisory warnings for semantically risky values. Never blocks a run.
    pub fn advisories(&self, thresholds: &AdvisoryThresholds) -> Vec<InputWarning> {
        let mut warnings = Vec::new();

        let signed_fields = [
            ("annualContribution", self.annual_contribution),
            ("directCAGR", self.direct_cagr),
            ("taxRate", self.tax_rate),
            ("perpetualRate", self.perpetual_rate),
            ("cvGrowthRate", self.cv_growth_rate),
            ("borrowPercent", self.borrow_percent),
            ("loanRate", self.loan_rate),
            ("deathBenefit", self.death_benefit),
        ];
        for (field, value) in signed_fields {
            if value < 0.0 {
                warnings.push(InputWarning::NegativeValue { field, value });
            }
        }

        if self.borrow_percent > thresholds.max_borrow_percent {
            warnings.push(InputWarning::HighBorrowPercent {
                borrow_percent: self.borrow_percent,
                threshold: thresholds.max_borrow_percent,
            });
        }

        // Simplified: one year of cash value growth on total premiums
        let estimated_loan = self.total_contributed() * self.borrow_percent;
        let estimated_cash_value = self.total_contributed() * (1.0 + self.cv_growth_rate);
        if estimated_loan > estimated_cash_value * thresholds.max_loan_to_cash_value {
            warnings.push(InputWarning::LoanExceedsCashValueShare {
                estimated_loan,
                estimated_cash_value,
                share: thresholds.max_loan_to_cash_value,
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_step() {
        assert!((ContributionTiming::Start.step(100.0, 50.0, 0.10) - 165.0).abs() < 1e-10);
        assert!((ContributionTiming::End.step(100.0, 50.0, 0.10) - 160.0).abs() < 1e-10);
    }

    #[test]
    fn test_timing_parse() {
        assert_eq!(ContributionTiming::parse("START"), Some(ContributionTiming::Start));
        assert_eq!(ContributionTiming::parse(" end "), Some(ContributionTiming::End));
        assert_eq!(ContributionTiming::parse("middle"), None);
    }

    #[test]
    fn test_default_advisories() {
        let warnings = InputModel::default().advisories(&AdvisoryThresholds::default());

        // 450,000 loan vs 0.5 x 520,000 estimated cash value
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], InputWarning::LoanExceedsCashValueShare { .. }));
    }

    #[test]
    fn test_high_borrow_and_negative_advisories() {
        let inputs = InputModel {
            borrow_percent: 1.10,
            loan_rate: -0.01,
            ..InputModel::default()
        };
        let warnings = inputs.advisories(&AdvisoryThresholds::default());

        assert!(warnings.iter().any(|w| matches!(w, InputWarning::HighBorrowPercent { .. })));
        assert!(warnings.iter().any(|w| matches!(w, InputWarning::NegativeValue { field: "loanRate", .. })));
    }

    #[test]
    fn test_low_borrow_has_no_advisories() {
        let inputs = InputModel {
            borrow_percent: 0.40,
            ..InputModel::default()
        };
        assert!(inputs.advisories(&AdvisoryThresholds::default()).is_empty());
    }
}
