//! Error type for the file and serialization boundaries
//!
//! The simulators themselves are total and never return errors; only loading
//! scenarios/assumptions and writing reports can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid assumptions: {0}")]
    InvalidAssumptions(String),

    #[error("scenario file is missing required column '{0}'")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
