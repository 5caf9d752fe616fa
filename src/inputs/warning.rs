//! Advisory warnings raised while resolving inputs

use serde::Serialize;
use std::fmt;

/// Non-fatal input advisory, surfaced to the caller alongside the results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputWarning {
    /// Field absent, blank or unparseable; the documented default was used
    DefaultSubstituted {
        field: &'static str,
        raw: Option<String>,
        default: String,
    },
    /// Negative value accepted as entered
    NegativeValue { field: &'static str, value: f64 },
    /// Borrow percent above the realistic policy-lending limit
    HighBorrowPercent { borrow_percent: f64, threshold: f64 },
    /// Estimated loan balance above the given share of estimated cash value
    LoanExceedsCashValueShare {
        estimated_loan: f64,
        estimated_cash_value: f64,
        share: f64,
    },
}

impl InputWarning {
    /// Input field the warning refers to
    pub fn field(&self) -> &'static str {
        match self {
            InputWarning::DefaultSubstituted { field, .. } => *field,
            InputWarning::NegativeValue { field, .. } => *field,
            InputWarning::HighBorrowPercent { .. } => "borrowPercent",
            InputWarning::LoanExceedsCashValueShare { .. } => "borrowPercent",
        }
    }
}

/// "directCAGR" -> "Direct CAGR", "cvGrowthRate" -> "Cv Growth Rate"
pub fn format_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut prev_upper = false;
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_ascii_uppercase() && !prev_upper {
                label.push(' ');
            }
            label.push(c);
        }
        prev_upper = c.is_ascii_uppercase();
    }
    label
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::DefaultSubstituted { field, raw: Some(raw), default } => {
                write!(f, "{} value '{}' is not valid, using default: {}", format_label(field), raw, default)
            }
            InputWarning::DefaultSubstituted { field, raw: None, default } => {
                write!(f, "{} not provided, using default: {}", format_label(field), default)
            }
            InputWarning::NegativeValue { field, .. } => {
                write!(f, "{} cannot be negative", format_label(field))
            }
            InputWarning::HighBorrowPercent { threshold, .. } => {
                write!(f, "Borrow % above {:.0}% may not be realistic for policy lending", threshold * 100.0)
            }
            InputWarning::LoanExceedsCashValueShare { share, .. } => {
                write!(
                    f,
                    "Estimated loan balance may exceed {:.0}% of cash value, increasing lapse risk",
                    share * 100.0
                )
            }
        }
    }
}
