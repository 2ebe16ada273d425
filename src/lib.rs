// ==========================================
// Teaching Claim - Core library
// ==========================================
// Adjunct timetable → payroll claim roster
// Pipeline: Clean Data → Merge Headers → Date Transform
// Every output is reviewed by an operator before submission.
// ==========================================

// ==========================================
// Modules
// ==========================================

// Domain layer - record types
pub mod domain;

// Engine layer - the three pipeline stages
pub mod engine;

// Import layer - spreadsheets in
pub mod importer;

// Export layer - spreadsheets out
pub mod exporter;

// Configuration
pub mod config;

// Stage state machine
pub mod workflow;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    ExpandedRecord, HiringRecord, MatchedRecord, TimetableRecord, UnmatchedRecord, Weekday,
};

pub use engine::{
    DateExpander, EngineError, EntityMatcher, ExpansionOutcome, FilterOutcome, MatchOutcome,
    RowFilter, TermRange, WeekdayCalendar,
};

pub use config::ClaimConfig;

pub use workflow::{ClaimWorkflow, RunSummary, Stage, WorkflowError};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Teaching Claim";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "Teaching Claim");
    }
}
