// ==========================================
// Teaching Claim - Claim workflow
// ==========================================
// Linear state machine: Clean Data → Merge Headers → Date Transform
// Holds stage outputs between runs; the stages themselves stay stateless.
// ==========================================
// Re-running a stage discards every downstream output.
// ==========================================

use crate::domain::hiring::HiringRecord;
use crate::domain::timetable::TimetableRecord;
use crate::engine::{
    DateExpander, EngineError, EntityMatcher, ExpansionOutcome, FilterOutcome, MatchOutcome,
    RowFilter, TermRange,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("{stage} cannot run before {required} has produced output")]
    StageNotReady { stage: Stage, required: Stage },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

// ==========================================
// Stage
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Filter,
    Merge,
    Expand,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Filter, Stage::Merge, Stage::Expand];

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Filter => "Clean Data",
            Stage::Merge => "Merge Headers",
            Stage::Expand => "Date Transform",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ==========================================
// RunSummary - operator report
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub input_rows: usize,
    pub filtered_rows: usize,
    pub multi_day_rows: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub expanded: usize,
    pub skipped: usize,
    pub term_start: Option<NaiveDate>,
    pub term_end: Option<NaiveDate>,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            input_rows: 0,
            filtered_rows: 0,
            multi_day_rows: 0,
            matched: 0,
            unmatched: 0,
            expanded: 0,
            skipped: 0,
            term_start: None,
            term_end: None,
        }
    }

    fn reset_from(&mut self, stage: Stage) {
        if stage <= Stage::Filter {
            self.input_rows = 0;
            self.filtered_rows = 0;
            self.multi_day_rows = 0;
        }
        if stage <= Stage::Merge {
            self.matched = 0;
            self.unmatched = 0;
        }
        self.expanded = 0;
        self.skipped = 0;
        self.term_start = None;
        self.term_end = None;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ==========================================
// ClaimWorkflow
// ==========================================
pub struct ClaimWorkflow {
    row_filter: RowFilter,
    matcher: EntityMatcher,
    expander: DateExpander,
    current: Stage,
    filtered: Option<FilterOutcome>,
    merge: Option<MatchOutcome>,
    expansion: Option<ExpansionOutcome>,
    summary: RunSummary,
}

impl Default for ClaimWorkflow {
    fn default() -> Self {
        Self::new(RowFilter::default())
    }
}

impl ClaimWorkflow {
    pub fn new(row_filter: RowFilter) -> Self {
        Self {
            row_filter,
            matcher: EntityMatcher::new(),
            expander: DateExpander::new(),
            current: Stage::Filter,
            filtered: None,
            merge: None,
            expansion: None,
            summary: RunSummary::new(),
        }
    }

    pub fn current_stage(&self) -> Stage {
        self.current
    }

    /// Manual step selection. Outputs are kept; a stage whose input is
    /// missing still refuses to run.
    pub fn go_to(&mut self, stage: Stage) {
        self.current = stage;
    }

    pub fn filtered(&self) -> Option<&FilterOutcome> {
        self.filtered.as_ref()
    }

    pub fn merge(&self) -> Option<&MatchOutcome> {
        self.merge.as_ref()
    }

    pub fn expansion(&self) -> Option<&ExpansionOutcome> {
        self.expansion.as_ref()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    #[instrument(skip(self, raw), fields(run_id = %self.summary.run_id, rows = raw.len()))]
    pub fn run_filter(&mut self, raw: &[TimetableRecord]) -> &FilterOutcome {
        self.merge = None;
        self.expansion = None;
        self.summary.reset_from(Stage::Filter);

        let outcome = self.row_filter.filter(raw);
        self.summary.input_rows = raw.len();
        self.summary.filtered_rows = outcome.records.len();
        self.summary.multi_day_rows = outcome.multi_day_rows;
        self.current = Stage::Merge;

        info!(stage = %Stage::Filter, filtered = outcome.records.len(), "stage finished");
        self.filtered.insert(outcome)
    }

    #[instrument(skip(self, hiring), fields(run_id = %self.summary.run_id, hiring = hiring.len()))]
    pub fn run_merge(&mut self, hiring: &[HiringRecord]) -> WorkflowResult<&MatchOutcome> {
        let filtered = self.filtered.as_ref().ok_or(WorkflowError::StageNotReady {
            stage: Stage::Merge,
            required: Stage::Filter,
        })?;

        let outcome = self.matcher.match_records(&filtered.records, hiring);
        self.expansion = None;
        self.summary.reset_from(Stage::Merge);
        self.summary.matched = outcome.matched.len();
        self.summary.unmatched = outcome.unmatched_count();
        self.current = Stage::Expand;

        info!(stage = %Stage::Merge, matched = outcome.matched.len(), "stage finished");
        Ok(self.merge.insert(outcome))
    }

    #[instrument(skip(self), fields(run_id = %self.summary.run_id))]
    pub fn run_expand(&mut self, term: &TermRange) -> WorkflowResult<&ExpansionOutcome> {
        let merge = self.merge.as_ref().ok_or(WorkflowError::StageNotReady {
            stage: Stage::Expand,
            required: Stage::Merge,
        })?;

        let outcome = self.expander.expand_term(&merge.matched, term);
        self.summary.reset_from(Stage::Expand);
        self.summary.expanded = outcome.records.len();
        self.summary.skipped = outcome.skipped;
        self.summary.term_start = Some(term.start());
        self.summary.term_end = Some(term.end());

        info!(stage = %Stage::Expand, expanded = outcome.records.len(), "stage finished");
        Ok(self.expansion.insert(outcome))
    }

    /// Convenience for `run_expand` from raw dates.
    pub fn run_expand_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> WorkflowResult<&ExpansionOutcome> {
        let term = TermRange::new(start, end)?;
        self.run_expand(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timetable() -> Vec<TimetableRecord> {
        vec![TimetableRecord {
            email: Some("a@adj.np.edu.sg".to_string()),
            class_section: Some("DA".to_string()),
            day: Some("Mon Wed".to_string()),
            name: Some("JOHN TAN".to_string()),
            catalog_nbr: Some("CS101".to_string()),
            row_number: 1,
            ..Default::default()
        }]
    }

    fn hiring() -> Vec<HiringRecord> {
        vec![HiringRecord {
            empl_id: Some("E1".to_string()),
            full_legal_name: Some("TAN JOHN".to_string()),
            requester_remarks: Some("CS101".to_string()),
            ..Default::default()
        }]
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stage_display_names() {
        let names: Vec<String> = Stage::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Clean Data", "Merge Headers", "Date Transform"]);
    }

    #[test]
    fn test_merge_before_filter_is_rejected() {
        let mut workflow = ClaimWorkflow::default();
        let err = workflow.run_merge(&hiring()).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::StageNotReady {
                stage: Stage::Merge,
                required: Stage::Filter
            }
        );
        assert_eq!(err.to_string(), "Merge Headers cannot run before Clean Data has produced output");
    }

    #[test]
    fn test_full_run_updates_summary_and_stage() {
        let mut workflow = ClaimWorkflow::default();
        workflow.run_filter(&timetable());
        assert_eq!(workflow.current_stage(), Stage::Merge);

        workflow.run_merge(&hiring()).unwrap();
        assert_eq!(workflow.current_stage(), Stage::Expand);

        let expanded = workflow
            .run_expand_between(date(2024, 4, 1), date(2024, 4, 10))
            .unwrap()
            .records
            .len();
        // Mon 1st, 8th + Wed 3rd, 10th
        assert_eq!(expanded, 4);

        let summary = workflow.summary();
        assert_eq!(summary.input_rows, 1);
        assert_eq!(summary.filtered_rows, 2);
        assert_eq!(summary.multi_day_rows, 1);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.unmatched, 0);
        assert_eq!(summary.expanded, 4);
        assert_eq!(summary.term_start, Some(date(2024, 4, 1)));
    }

    #[test]
    fn test_refilter_discards_downstream_outputs() {
        let mut workflow = ClaimWorkflow::default();
        workflow.run_filter(&timetable());
        workflow.run_merge(&hiring()).unwrap();
        workflow.run_filter(&timetable());

        assert!(workflow.merge().is_none());
        assert!(workflow.expansion().is_none());
        assert_eq!(workflow.summary().matched, 0);
        let err = workflow
            .run_expand_between(date(2024, 4, 1), date(2024, 4, 10))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::StageNotReady { required: Stage::Merge, .. }));
    }

    #[test]
    fn test_inverted_term_surfaces_engine_error() {
        let mut workflow = ClaimWorkflow::default();
        workflow.run_filter(&timetable());
        workflow.run_merge(&hiring()).unwrap();
        let err = workflow
            .run_expand_between(date(2024, 4, 10), date(2024, 4, 1))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Engine(EngineError::InvertedTerm { .. })));
        assert!(workflow.expansion().is_none());
    }

    #[test]
    fn test_go_to_keeps_outputs() {
        let mut workflow = ClaimWorkflow::default();
        workflow.run_filter(&timetable());
        workflow.go_to(Stage::Filter);
        assert_eq!(workflow.current_stage(), Stage::Filter);
        assert!(workflow.filtered().is_some());
    }

    #[test]
    fn test_summary_serialises() {
        let workflow = ClaimWorkflow::default();
        let json = workflow.summary().to_json().unwrap();
        assert!(json.contains("\"run_id\""));
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, workflow.summary());
    }
}
