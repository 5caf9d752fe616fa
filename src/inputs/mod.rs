//! Simulation inputs, boundary resolution and scenario loading

mod model;
mod warning;
pub mod resolve;
pub mod loader;

pub use model::{ContributionTiming, InputModel};
pub use warning::{format_label, InputWarning};
pub use resolve::{resolve_inputs, InputForm, ResolvedInputs, FIELD_NAMES};
pub use loader::{load_scenarios, load_scenarios_from_reader, ScenarioForm};
