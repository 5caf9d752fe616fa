//! Plan simulations and the long-horizon comparison

mod state;
mod engine;
mod results;
mod direct;
mod leveraged;
mod comparison;

pub use state::LeveragedState;
pub use engine::ProjectionEngine;
pub use results::{
    ComparisonReport, ComparisonRow, DirectPlanResult, DirectYearRow, LeveragedPlanResult,
    LeveragedYearRow, PlanOutcome,
};
pub use direct::simulate_direct;
pub use leveraged::simulate_leveraged;
pub use comparison::project_checkpoints;
