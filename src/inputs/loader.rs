//! Load scenario forms from CSV
//!
//! One scenario per row. A `scenario` column names the row; every other
//! column is passed through as a raw form field, so blank cells resolve to
//! defaults exactly like a blank form field.

use csv::Reader;
use std::io::Read;
use std::path::Path;

use super::resolve::InputForm;
use crate::error::{PlannerError, Result};

/// Name of the label column
pub const SCENARIO_COLUMN: &str = "scenario";

/// A named raw scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioForm {
    pub name: String,
    pub form: InputForm,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioForm>> {
    let reader = Reader::from_path(path)?;
    read_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioForm>> {
    read_scenarios(Reader::from_reader(reader))
}

fn read_scenarios<R: Read>(mut reader: Reader<R>) -> Result<Vec<ScenarioForm>> {
    let headers = reader.headers()?.clone();
    let label_idx = headers
        .iter()
        .position(|h| h.trim() == SCENARIO_COLUMN)
        .ok_or_else(|| PlannerError::MissingColumn(SCENARIO_COLUMN.to_string()))?;

    let mut scenarios = Vec::new();
    for result in reader.records() {
        let record = result?;
        let name = record.get(label_idx).unwrap_or_default().trim().to_string();

        let form: InputForm = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .filter(|(idx, _)| *idx != label_idx)
            .map(|(_, (header, value))| (header.trim().to_string(), value.to_string()))
            .collect();

        scenarios.push(ScenarioForm { name, form });
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::resolve::{ANNUAL_CONTRIBUTION, DIRECT_CAGR};

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = "\
scenario,annualContribution,directCAGR,contributionTiming
base,50000,20,end
lean,25000,,start
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].form.get(ANNUAL_CONTRIBUTION), Some("50000"));
        assert_eq!(scenarios[1].name, "lean");
        assert_eq!(scenarios[1].form.get(DIRECT_CAGR), None);
        assert_eq!(scenarios[1].form.len(), 3);
    }

    #[test]
    fn test_missing_scenario_column() {
        let data = "annualContribution\n50000\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::MissingColumn(ref c) if c == SCENARIO_COLUMN));
    }
}
