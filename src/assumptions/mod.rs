//! Illustration assumptions for the post-funding comparison
//!
//! All constants here are calibrated from a whole life 12-pay illustration
//! (Standard Plus Non-Tobacco, issue age 52, $50K/year). The illustrated
//! values at years 10/20/30/40 were CV $582K/$1.133M/$1.890M/$2.966M and
//! DB $1.533M/$2.062M/$2.707M/$3.615M; the tier rates are the CAGRs between
//! those points.

mod growth;

pub use growth::{compound, TieredGrowthCurve};

use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{PlannerError, Result};

/// Share of Plan A after-tax capital converted to perpetual income
pub const ANNUITIZED_SHARE: f64 = 0.70;

/// Pre-tax bond yield for post-funding liquidity (taxed annually)
pub const BOND_RATE: f64 = 0.05;

/// Year offsets (past funding end) where tier 2 and tier 3 begin
pub const TIER_BOUNDARIES: [u32; 2] = [10, 20];

/// Cash value CAGR by tier
pub const CASH_VALUE_TIER_RATES: [f64; 3] = [0.0688, 0.0524, 0.0461];

/// Death benefit CAGR by tier
pub const DEATH_BENEFIT_TIER_RATES: [f64; 3] = [0.0300, 0.0276, 0.0293];

/// Checkpoint year offsets past the funding horizon
pub const CHECKPOINT_OFFSETS: [u32; 5] = [0, 10, 20, 30, 40];

/// Longest post-funding horizon a curve boundary or checkpoint may reach
pub const MAX_PROJECTION_YEARS: u32 = 120;

/// Thresholds for advisory (never blocking) input warnings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// Borrow percent above which policy lending is flagged as unrealistic
    pub max_borrow_percent: f64,

    /// Estimated loan balance / estimated cash value above which lapse risk is flagged
    pub max_loan_to_cash_value: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            max_borrow_percent: 0.95,
            max_loan_to_cash_value: 0.5,
        }
    }
}

/// Container for all comparison assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IllustrationAssumptions {
    /// Plan A annuitized share (remainder stays liquid)
    pub annuitized_share: f64,

    /// Pre-tax bond rate for Plan A liquidity and Plan B net EPIG
    pub bond_rate: f64,

    /// Plan B cash value growth after funding ends
    #[serde(deserialize_with = "cash_value_curve")]
    pub cash_value_curve: TieredGrowthCurve,

    /// Plan B death benefit growth after funding ends
    #[serde(deserialize_with = "death_benefit_curve")]
    pub death_benefit_curve: TieredGrowthCurve,

    /// Checkpoint offsets for the comparison table
    pub checkpoint_offsets: Vec<u32>,

    pub thresholds: AdvisoryThresholds,
}

impl IllustrationAssumptions {
    /// Assumptions matching the reference illustration
    pub fn default_illustration() -> Self {
        Self {
            annuitized_share: ANNUITIZED_SHARE,
            bond_rate: BOND_RATE,
            cash_value_curve: TieredGrowthCurve::new(CASH_VALUE_TIER_RATES, TIER_BOUNDARIES),
            death_benefit_curve: TieredGrowthCurve::new(DEATH_BENEFIT_TIER_RATES, TIER_BOUNDARIES),
            checkpoint_offsets: CHECKPOINT_OFFSETS.to_vec(),
            thresholds: AdvisoryThresholds::default(),
        }
    }

    /// Load assumption overrides from a JSON file; missing keys keep the illustration defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let assumptions: Self = serde_json::from_reader(BufReader::new(file))?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Parse assumption overrides from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let assumptions: Self = serde_json::from_str(json)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Reject overrides the projector cannot represent
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.annuitized_share) {
            return Err(invalid(format!(
                "annuitized_share must be within [0, 1], got {}",
                self.annuitized_share
            )));
        }

        for (name, curve) in [
            ("cash_value_curve", &self.cash_value_curve),
            ("death_benefit_curve", &self.death_benefit_curve),
        ] {
            let [first, second] = curve.boundaries;
            if first > second {
                return Err(invalid(format!(
                    "{} boundaries must be ascending, got [{}, {}]",
                    name, first, second
                )));
            }
            if second > MAX_PROJECTION_YEARS {
                return Err(invalid(format!(
                    "{} boundary {} exceeds {} years",
                    name, second, MAX_PROJECTION_YEARS
                )));
            }
        }

        let offsets = &self.checkpoint_offsets;
        if offsets.len() != CHECKPOINT_OFFSETS.len() {
            return Err(invalid(format!(
                "expected {} checkpoint offsets, got {}",
                CHECKPOINT_OFFSETS.len(),
                offsets.len()
            )));
        }
        if !offsets.windows(2).all(|w| w[0] < w[1]) {
            return Err(invalid(format!(
                "checkpoint offsets must be strictly increasing, got {:?}",
                offsets
            )));
        }
        if let Some(&last) = offsets.last() {
            if last > MAX_PROJECTION_YEARS {
                return Err(invalid(format!(
                    "checkpoint offset {} exceeds {} years",
                    last, MAX_PROJECTION_YEARS
                )));
            }
        }

        Ok(())
    }

    /// Share of Plan A after-tax capital left liquid
    pub fn liquid_share(&self) -> f64 {
        1.0 - self.annuitized_share
    }

    /// Bond rate net of annual taxation
    pub fn after_tax_bond_rate(&self, tax_rate: f64) -> f64 {
        self.bond_rate * (1.0 - tax_rate)
    }
}

impl Default for IllustrationAssumptions {
    fn default() -> Self {
        Self::default_illustration()
    }
}

fn invalid(message: String) -> PlannerError {
    PlannerError::InvalidAssumptions(message)
}

/// Curve as written in an override file; absent parts keep the curve's defaults
#[derive(Debug, Deserialize)]
struct CurveOverride {
    rates: Option<[f64; 3]>,
    boundaries: Option<[u32; 2]>,
}

impl CurveOverride {
    fn merge(self, base: TieredGrowthCurve) -> TieredGrowthCurve {
        TieredGrowthCurve::new(
            self.rates.unwrap_or(base.rates),
            self.boundaries.unwrap_or(base.boundaries),
        )
    }
}

fn cash_value_curve<'de, D>(deserializer: D) -> std::result::Result<TieredGrowthCurve, D::Error>
where
    D: Deserializer<'de>,
{
    let base = TieredGrowthCurve::new(CASH_VALUE_TIER_RATES, TIER_BOUNDARIES);
    Ok(CurveOverride::deserialize(deserializer)?.merge(base))
}

fn death_benefit_curve<'de, D>(deserializer: D) -> std::result::Result<TieredGrowthCurve, D::Error>
where
    D: Deserializer<'de>,
{
    let base = TieredGrowthCurve::new(DEATH_BENEFIT_TIER_RATES, TIER_BOUNDARIES);
    Ok(CurveOverride::deserialize(deserializer)?.merge(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_illustration() {
        let a = IllustrationAssumptions::default_illustration();
        assert_eq!(a.annuitized_share, 0.70);
        assert!((a.liquid_share() - 0.30).abs() < 1e-12);
        assert_eq!(a.checkpoint_offsets, vec![0, 10, 20, 30, 40]);
        assert_eq!(a.cash_value_curve.rates, [0.0688, 0.0524, 0.0461]);
        assert_eq!(a.death_benefit_curve.boundaries, [10, 20]);
    }

    #[test]
    fn test_after_tax_bond_rate() {
        let a = IllustrationAssumptions::default_illustration();
        // 5% x (1 - 25%) = 3.75%
        assert!((a.after_tax_bond_rate(0.25) - 0.0375).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let a = IllustrationAssumptions::from_json_str(r#"{ "bond_rate": 0.04 }"#).unwrap();
        assert_eq!(a.bond_rate, 0.04);
        assert_eq!(a.annuitized_share, ANNUITIZED_SHARE);
        assert_eq!(a.death_benefit_curve.rates, DEATH_BENEFIT_TIER_RATES);
    }

    #[test]
    fn test_curve_override() {
        let json = r#"{
            "cash_value_curve": { "rates": [0.05, 0.04, 0.03], "boundaries": [5, 15] },
            "thresholds": { "max_borrow_percent": 0.8 }
        }"#;
        let a = IllustrationAssumptions::from_json_str(json).unwrap();
        assert_eq!(a.cash_value_curve.boundaries, [5, 15]);
        assert_eq!(a.thresholds.max_borrow_percent, 0.8);
        assert_eq!(a.thresholds.max_loan_to_cash_value, 0.5);
    }

    #[test]
    fn test_partial_curve_override_keeps_curve_defaults() {
        let json = r#"{
            "cash_value_curve": { "rates": [0.1, 0.2, 0.3] },
            "death_benefit_curve": { "boundaries": [15, 25] }
        }"#;
        let a = IllustrationAssumptions::from_json_str(json).unwrap();
        assert_eq!(a.cash_value_curve.rates, [0.1, 0.2, 0.3]);
        assert_eq!(a.cash_value_curve.boundaries, TIER_BOUNDARIES);
        assert_eq!(a.death_benefit_curve.rates, DEATH_BENEFIT_TIER_RATES);
        assert_eq!(a.death_benefit_curve.boundaries, [15, 25]);
    }

    #[test]
    fn test_inverted_boundaries_rejected() {
        let json = r#"{ "cash_value_curve": { "boundaries": [20, 10] } }"#;
        let err = IllustrationAssumptions::from_json_str(json).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidAssumptions(_)));
        assert!(err.to_string().contains("cash_value_curve"));
    }

    #[test]
    fn test_checkpoint_offsets_validated() {
        for json in [
            r#"{ "checkpoint_offsets": [0, 20, 10, 30, 40] }"#,
            r#"{ "checkpoint_offsets": [0, 10, 20] }"#,
            r#"{ "checkpoint_offsets": [0, 10, 20, 30, 3000000000] }"#,
        ] {
            let err = IllustrationAssumptions::from_json_str(json).unwrap_err();
            assert!(matches!(err, PlannerError::InvalidAssumptions(_)), "{}", json);
        }

        let ok = IllustrationAssumptions::from_json_str(r#"{ "checkpoint_offsets": [0, 5, 15, 25, 35] }"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_annuitized_share_out_of_range_rejected() {
        let err = IllustrationAssumptions::from_json_str(r#"{ "annuitized_share": 1.5 }"#).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidAssumptions(_)));
    }

    #[test]
    fn test_default_illustration_is_valid() {
        assert!(IllustrationAssumptions::default_illustration().validate().is_ok());
    }
}
