//! Scenario runner for single and batch comparisons
//!
//! Holds the illustration assumptions once and runs any number of input
//! sets against them. Every run is pure, so batches fan out across threads.

use rayon::prelude::*;
use std::path::Path;

use crate::assumptions::IllustrationAssumptions;
use crate::inputs::{resolve_inputs, InputForm, InputModel, ScenarioForm};
use crate::projection::{ComparisonReport, ProjectionEngine};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let form = InputForm::new().with("annualContribution", "60000");
/// let report = runner.run_form(&form);
/// println!("{}", report.plan_b.perpetual_income);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

/// Report for a named scenario
#[derive(Debug, Clone)]
pub struct NamedReport {
    pub name: String,
    pub report: ComparisonReport,
}

impl ScenarioRunner {
    /// Create runner with the reference illustration assumptions
    pub fn new() -> Self {
        Self::with_assumptions(IllustrationAssumptions::default_illustration())
    }

    /// Create runner from a JSON assumptions override file
    pub fn from_json_path(path: &Path) -> crate::Result<Self> {
        Ok(Self::with_assumptions(IllustrationAssumptions::from_json_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: IllustrationAssumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Run a single comparison for resolved inputs
    pub fn run(&self, inputs: &InputModel) -> ComparisonReport {
        self.engine.run(inputs)
    }

    /// Resolve a raw form (defaults + advisories), then run
    pub fn run_form(&self, form: &InputForm) -> ComparisonReport {
        let resolved = resolve_inputs(form, &self.assumptions().thresholds);
        self.engine.run_with_warnings(&resolved.inputs, resolved.warnings)
    }

    /// Run many input sets in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[InputModel]) -> Vec<ComparisonReport> {
        inputs.par_iter().map(|i| self.engine.run(i)).collect()
    }

    /// Resolve and run named scenarios in parallel
    pub fn run_scenarios(&self, scenarios: &[ScenarioForm]) -> Vec<NamedReport> {
        scenarios
            .par_iter()
            .map(|scenario| NamedReport {
                name: scenario.name.clone(),
                report: self.run_form(&scenario.form),
            })
            .collect()
    }

    pub fn assumptions(&self) -> &IllustrationAssumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{load_scenarios_from_reader, InputWarning};

    #[test]
    fn test_batch_matches_sequential() {
        let runner = ScenarioRunner::new();

        let inputs: Vec<_> = [20_000.0, 50_000.0, 80_000.0]
            .iter()
            .map(|&contribution| InputModel {
                annual_contribution: contribution,
                ..InputModel::default()
            })
            .collect();

        let batch = runner.run_batch(&inputs);
        assert_eq!(batch.len(), 3);
        for (report, input) in batch.iter().zip(&inputs) {
            assert_eq!(*report, runner.run(input));
        }

        // Larger contribution should result in higher income
        assert!(batch[2].plan_a.perpetual_income > batch[0].plan_a.perpetual_income);
    }

    #[test]
    fn test_run_form_reports_substitutions() {
        let runner = ScenarioRunner::new();
        let form = InputForm::new().with("annualContribution", "lots");
        let report = runner.run_form(&form);

        assert_eq!(report.inputs, InputModel::default());
        assert!(report.warnings.iter().any(|w| matches!(
            w,
            InputWarning::DefaultSubstituted { field: "annualContribution", .. }
        )));
    }

    #[test]
    fn test_run_form_with_huge_age_uses_default() {
        let runner = ScenarioRunner::new();
        let form = InputForm::new().with("currentAge", "4294967290");
        let report = runner.run_form(&form);

        assert_eq!(report.inputs.current_age, 51);
        assert_eq!(report.checkpoints.len(), 5);
        assert_eq!(report.checkpoints[4].age, 101);
        assert!(report.warnings.iter().any(|w| matches!(
            w,
            InputWarning::DefaultSubstituted { field: "currentAge", .. }
        )));
    }

    #[test]
    fn test_run_form_with_huge_horizon_uses_default() {
        let runner = ScenarioRunner::new();
        let form = InputForm::new().with("timeHorizon", "4000000000");
        let report = runner.run_form(&form);

        assert_eq!(report.inputs.time_horizon, 10);
        assert_eq!(report.plan_a.years.len(), 10);
        assert_eq!(report.plan_b.years.len(), 10);
    }

    #[test]
    fn test_run_scenarios_keeps_order_and_names() {
        let data = "\
scenario,annualContribution,timeHorizon
small,10000,5
large,100000,20
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        let reports = ScenarioRunner::new().run_scenarios(&scenarios);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "small");
        assert_eq!(reports[0].report.plan_a.years.len(), 5);
        assert_eq!(reports[1].name, "large");
        assert_eq!(reports[1].report.checkpoints[0].age, 51 + 20);
    }
}
