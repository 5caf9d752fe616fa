//! Boundary step turning raw form values into a complete `InputModel`
//!
//! Resolution never fails: anything missing or malformed falls back to the
//! documented default and is reported as an advisory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{ContributionTiming, InputModel};
use super::warning::InputWarning;
use crate::assumptions::AdvisoryThresholds;

pub const CURRENT_AGE: &str = "currentAge";
pub const TIME_HORIZON: &str = "timeHorizon";
pub const ANNUAL_CONTRIBUTION: &str = "annualContribution";
pub const CONTRIBUTION_TIMING: &str = "contributionTiming";
pub const DIRECT_CAGR: &str = "directCAGR";
pub const TAX_RATE: &str = "taxRate";
pub const PERPETUAL_RATE: &str = "perpetualRate";
pub const CV_GROWTH_RATE: &str = "cvGrowthRate";
pub const BORROW_PERCENT: &str = "borrowPercent";
pub const LOAN_RATE: &str = "loanRate";
pub const DEATH_BENEFIT: &str = "deathBenefit";

/// Oldest accepted starting age; anything above is treated as malformed
pub const MAX_CURRENT_AGE: u32 = 120;

/// Longest accepted funding horizon in years
pub const MAX_TIME_HORIZON: u32 = 100;

/// Every recognised form field, in display order
pub const FIELD_NAMES: [&str; 11] = [
    CURRENT_AGE,
    TIME_HORIZON,
    ANNUAL_CONTRIBUTION,
    CONTRIBUTION_TIMING,
    DIRECT_CAGR,
    TAX_RATE,
    PERPETUAL_RATE,
    CV_GROWTH_RATE,
    BORROW_PERCENT,
    LOAN_RATE,
    DEATH_BENEFIT,
];

/// Raw field values as entered. Rate fields are percentages (`20` = 20%).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputForm {
    fields: BTreeMap<String, String>,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Trimmed value; blank values count as absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = InputForm::new();
        for (k, v) in iter {
            form.insert(k, v);
        }
        form
    }
}

/// Resolved inputs plus every advisory raised on the way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedInputs {
    pub inputs: InputModel,
    pub warnings: Vec<InputWarning>,
}

/// Resolve a raw form into a complete `InputModel`
pub fn resolve_inputs(form: &InputForm, thresholds: &AdvisoryThresholds) -> ResolvedInputs {
    let defaults = InputModel::default();
    let mut resolver = Resolver { form, warnings: Vec::new() };

    let inputs = InputModel {
        current_age: resolver.integer(CURRENT_AGE, defaults.current_age, 0, MAX_CURRENT_AGE),
        time_horizon: resolver.integer(TIME_HORIZON, defaults.time_horizon, 1, MAX_TIME_HORIZON),
        annual_contribution: resolver.amount(ANNUAL_CONTRIBUTION, defaults.annual_contribution),
        contribution_timing: resolver.timing(CONTRIBUTION_TIMING, defaults.contribution_timing),
        direct_cagr: resolver.percent(DIRECT_CAGR, defaults.direct_cagr),
        tax_rate: resolver.percent(TAX_RATE, defaults.tax_rate),
        perpetual_rate: resolver.percent(PERPETUAL_RATE, defaults.perpetual_rate),
        cv_growth_rate: resolver.percent(CV_GROWTH_RATE, defaults.cv_growth_rate),
        borrow_percent: resolver.percent(BORROW_PERCENT, defaults.borrow_percent),
        loan_rate: resolver.percent(LOAN_RATE, defaults.loan_rate),
        death_benefit: resolver.amount(DEATH_BENEFIT, defaults.death_benefit),
    };

    let mut warnings = resolver.warnings;
    warnings.extend(inputs.advisories(thresholds));

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    ResolvedInputs { inputs, warnings }
}

struct Resolver<'a> {
    form: &'a InputForm,
    warnings: Vec<InputWarning>,
}

impl Resolver<'_> {
    fn substitute(&mut self, field: &'static str, raw: Option<&str>, default: String) {
        self.warnings.push(InputWarning::DefaultSubstituted {
            field,
            raw: raw.map(str::to_string),
            default,
        });
    }

    /// Whole number within `min..=max`; out-of-range values count as malformed
    fn integer(&mut self, field: &'static str, default: u32, min: i64, max: u32) -> u32 {
        let raw = self.form.get(field);
        match raw.and_then(parse_integer) {
            Some(v) if v >= min && v <= max as i64 => v as u32,
            _ => {
                self.substitute(field, raw, default.to_string());
                default
            }
        }
    }

    fn amount(&mut self, field: &'static str, default: f64) -> f64 {
        let raw = self.form.get(field);
        match raw.and_then(parse_number) {
            Some(v) => v,
            None => {
                self.substitute(field, raw, trim_float(default));
                default
            }
        }
    }

    /// Percentage entered as e.g. `20`, stored as `0.20`
    fn percent(&mut self, field: &'static str, default: f64) -> f64 {
        let raw = self.form.get(field);
        match raw.and_then(parse_number) {
            Some(v) => v / 100.0,
            None => {
                self.substitute(field, raw, trim_float(default * 100.0));
                default
            }
        }
    }

    fn timing(&mut self, field: &'static str, default: ContributionTiming) -> ContributionTiming {
        let raw = self.form.get(field);
        match raw.and_then(ContributionTiming::parse) {
            Some(t) => t,
            None => {
                self.substitute(field, raw, default.as_str().to_string());
                default
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole numbers, or decimals truncated toward zero
fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .or_else(|| parse_number(raw).map(|v| v.trunc() as i64))
}

/// Shortest display of a default, without float noise (7.000000000000001 -> "7")
fn trim_float(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{}", rounded)
}
