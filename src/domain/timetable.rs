// ==========================================
// Teaching Claim - Timetable records
// ==========================================
// One scheduled class-session entry from the raw timetable export.
// Produced by the importer, consumed by RowFilter / EntityMatcher.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// TimetableRecord
// ==========================================
// Blank cells are None. Columns the mapper does not know about are kept in
// `passthrough` verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRecord {
    pub email: Option<String>,         // identity-contact field
    pub class_section: Option<String>, // e.g. "DA", "P01", "TSP1"
    pub day: Option<String>,           // one or more weekday tokens, space separated
    pub start_time: Option<String>,    // HH:MM:SS after filtering
    pub end_time: Option<String>,      // HH:MM:SS after filtering
    pub name: Option<String>,          // lecturer free-text name
    pub catalog_nbr: Option<String>,   // course code

    #[serde(default)]
    pub passthrough: BTreeMap<String, String>,

    // Source row (1-based, header excluded); 0 when built in memory
    #[serde(default)]
    pub row_number: usize,
}

impl TimetableRecord {
    /// Whitespace-separated day tokens, in source order.
    pub fn day_tokens(&self) -> Vec<&str> {
        self.day
            .as_deref()
            .map(|d| d.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Copy of this record with `day` replaced by a single token.
    pub fn with_day(&self, token: &str) -> Self {
        Self {
            day: Some(token.to_string()),
            ..self.clone()
        }
    }
}

/// Timetable rows that found no hiring record.
///
/// Matching never attaches scratch columns to the record, so an unmatched row
/// is the filtered row as it was.
pub type UnmatchedRecord = TimetableRecord;
