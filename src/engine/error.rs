// ==========================================
// Teaching Claim - Engine error types
// ==========================================
// Only caller-supplied contract violations are errors here.
// Dirty spreadsheet data is excluded or counted, never raised.
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid term date for {field}: '{value}' (expected e.g. \"21 April 2025\")")]
    InvalidTermDate { field: String, value: String },

    #[error("term start {start} is after term end {end}")]
    InvertedTerm { start: NaiveDate, end: NaiveDate },
}

pub type EngineResult<T> = Result<T, EngineError>;
