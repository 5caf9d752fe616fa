//! Piecewise compound growth curves for the post-funding horizon

use serde::{Deserialize, Serialize};

/// Three-tier compound growth curve.
///
/// Tier 1 applies from year 0 to `boundaries[0]`, tier 2 from `boundaries[0]`
/// to `boundaries[1]`, and tier 3 for every year after `boundaries[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieredGrowthCurve {
    /// Annual growth rate per tier (decimal)
    pub rates: [f64; 3],

    /// Year offsets where tier 2 and tier 3 begin
    pub boundaries: [u32; 2],
}

impl TieredGrowthCurve {
    pub fn new(rates: [f64; 3], boundaries: [u32; 2]) -> Self {
        Self { rates, boundaries }
    }

    /// Value of `start` after `years` of tiered compounding
    pub fn value_at(&self, start: f64, years: u32) -> f64 {
        let [first_end, second_end] = self.boundaries;

        let tier1_years = years.min(first_end);
        let tier2_years = years.min(second_end).saturating_sub(first_end);
        let tier3_years = years.saturating_sub(second_end);

        let mut value = start;
        if tier1_years > 0 {
            value *= (1.0 + self.rates[0]).powi(tier1_years as i32);
        }
        if tier2_years > 0 {
            value *= (1.0 + self.rates[1]).powi(tier2_years as i32);
        }
        if tier3_years > 0 {
            value *= (1.0 + self.rates[2]).powi(tier3_years as i32);
        }
        value
    }
}

/// Uniform compound growth at a single annual rate
pub fn compound(start: f64, rate: f64, years: u32) -> f64 {
    start * (1.0 + rate).powi(years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> TieredGrowthCurve {
        TieredGrowthCurve::new([0.10, 0.05, 0.02], [10, 20])
    }

    #[test]
    fn test_zero_years_returns_start() {
        assert_eq!(curve().value_at(1000.0, 0), 1000.0);
    }

    #[test]
    fn test_first_tier_only() {
        let c = curve();
        assert_relative_eq!(c.value_at(1000.0, 7), 1000.0 * 1.10f64.powi(7), max_relative = 1e-12);
        assert_relative_eq!(c.value_at(1000.0, 10), 1000.0 * 1.10f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_second_tier_continues_from_boundary() {
        let c = curve();
        let at_10 = c.value_at(1000.0, 10);
        assert_relative_eq!(c.value_at(1000.0, 15), at_10 * 1.05f64.powi(5), max_relative = 1e-12);
        assert_relative_eq!(c.value_at(1000.0, 20), at_10 * 1.05f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_third_tier_after_second_boundary() {
        let c = curve();
        let at_20 = c.value_at(1000.0, 20);
        assert_relative_eq!(c.value_at(1000.0, 40), at_20 * 1.02f64.powi(20), max_relative = 1e-12);
    }

    #[test]
    fn test_equal_tiers_match_compound() {
        let c = TieredGrowthCurve::new([0.0375; 3], [10, 20]);
        for years in [0, 5, 10, 25, 40] {
            assert_relative_eq!(c.value_at(329_535.0, years), compound(329_535.0, 0.0375, years), max_relative = 1e-12);
        }
    }
}
