//! Runs both plan simulations and the checkpoint projection

use crate::assumptions::IllustrationAssumptions;
use crate::inputs::{InputModel, InputWarning};
use super::comparison::project_checkpoints;
use super::direct::simulate_direct;
use super::leveraged::simulate_leveraged;
use super::results::{ComparisonReport, ComparisonRow, DirectPlanResult, LeveragedPlanResult};

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: IllustrationAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions
    pub fn new(assumptions: IllustrationAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &IllustrationAssumptions {
        &self.assumptions
    }

    pub fn simulate_direct(&self, inputs: &InputModel) -> DirectPlanResult {
        simulate_direct(inputs, &self.assumptions)
    }

    pub fn simulate_leveraged(&self, inputs: &InputModel) -> LeveragedPlanResult {
        simulate_leveraged(inputs)
    }

    pub fn project(
        &self,
        plan_a: &DirectPlanResult,
        plan_b: &LeveragedPlanResult,
        inputs: &InputModel,
    ) -> Vec<ComparisonRow> {
        project_checkpoints(plan_a, plan_b, inputs, &self.assumptions)
    }

    /// Full comparison for already-resolved inputs; advisories are recomputed
    pub fn run(&self, inputs: &InputModel) -> ComparisonReport {
        let warnings = inputs.advisories(&self.assumptions.thresholds);
        self.run_with_warnings(inputs, warnings)
    }

    /// Full comparison, carrying advisories raised at resolution
    pub fn run_with_warnings(&self, inputs: &InputModel, warnings: Vec<InputWarning>) -> ComparisonReport {
        let plan_a = self.simulate_direct(inputs);
        let plan_b = self.simulate_leveraged(inputs);
        let checkpoints = self.project(&plan_a, &plan_b, inputs);

        ComparisonReport {
            inputs: inputs.clone(),
            warnings,
            plan_a,
            plan_b,
            checkpoints,
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(IllustrationAssumptions::default_illustration())
    }
}
