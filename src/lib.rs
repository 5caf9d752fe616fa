//! Wealth Comparison - Projection engine for direct investing vs. whole life plus policy loans
//!
//! This library provides:
//! - Input resolution with documented defaults and advisory warnings
//! - Plan A: year-by-year direct taxable investment with a 70/30 annuity/liquidity split
//! - Plan B: whole life cash value plus an EPIG funded by policy loans
//! - Long-horizon checkpoint projection on tiered illustration growth curves
//! - Batch scenario runs and CSV/JSON table output

pub mod error;
pub mod assumptions;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use assumptions::{IllustrationAssumptions, TieredGrowthCurve};
pub use inputs::{resolve_inputs, ContributionTiming, InputForm, InputModel, InputWarning};
pub use projection::{ComparisonReport, ComparisonRow, PlanOutcome, ProjectionEngine};
pub use scenario::ScenarioRunner;
