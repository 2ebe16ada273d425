// ==========================================
// Teaching Claim - Claim records
// ==========================================
// MatchedRecord: timetable row joined with exactly one hiring record.
// ExpandedRecord: matched row bound to one concrete term date.
// ==========================================

use crate::domain::hiring::HiringRecord;
use crate::domain::timetable::TimetableRecord;
use crate::domain::types::Weekday;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MatchedRecord
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRecord {
    // ===== From HiringRecord =====
    pub empl_id: Option<String>,
    pub full_legal_name: Option<String>,
    pub time_entry_code: Option<String>,
    pub position_id: Option<String>,
    pub program_id: Option<String>,

    // ===== From TimetableRecord =====
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub day: Option<String>,
    pub catalog_nbr: Option<String>,
    pub name: Option<String>,
    pub class_section: Option<String>,

    // Initially the hiring record's requester remarks
    pub comment: Option<String>,
}

impl MatchedRecord {
    /// Joins a timetable row with the hiring record it was linked to.
    pub fn join(row: &TimetableRecord, hiring: &HiringRecord) -> Self {
        Self {
            empl_id: hiring.empl_id.clone(),
            full_legal_name: hiring.full_legal_name.clone(),
            time_entry_code: hiring.time_entry_code.clone(),
            position_id: hiring.position_id.clone(),
            program_id: hiring.program_id.clone(),
            start_time: row.start_time.clone(),
            end_time: row.end_time.clone(),
            day: row.day.clone(),
            catalog_nbr: row.catalog_nbr.clone(),
            name: row.name.clone(),
            class_section: row.class_section.clone(),
            comment: hiring.requester_remarks.clone(),
        }
    }
}

// ==========================================
// ExpandedRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedRecord {
    pub empl_id: Option<String>,
    pub full_legal_name: Option<String>,
    pub name: Option<String>,
    pub time_entry_code: Option<String>,
    pub day: Weekday,
    pub date: NaiveDate,
    pub week_number: u32, // 1-based, per weekday bucket
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub position_id: Option<String>,
    pub program_id: Option<String>,
    pub class_section: Option<String>,
    pub catalog_nbr: Option<String>,
    pub comment: String,
}

impl ExpandedRecord {
    /// Label shown in the roster's "Week Number" column.
    pub fn week_label(&self) -> String {
        format!("Week {}", self.week_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_takes_identity_from_hiring_and_schedule_from_timetable() {
        let row = TimetableRecord {
            name: Some("JOHN TAN".to_string()),
            day: Some("Mon".to_string()),
            catalog_nbr: Some("CS101".to_string()),
            class_section: Some("DA".to_string()),
            start_time: Some("09:00:00".to_string()),
            ..Default::default()
        };
        let hiring = HiringRecord {
            empl_id: Some("E1".to_string()),
            full_legal_name: Some("TAN JOHN".to_string()),
            requester_remarks: Some("CS101 tutor".to_string()),
            ..Default::default()
        };

        let matched = MatchedRecord::join(&row, &hiring);
        assert_eq!(matched.empl_id.as_deref(), Some("E1"));
        assert_eq!(matched.full_legal_name.as_deref(), Some("TAN JOHN"));
        assert_eq!(matched.name.as_deref(), Some("JOHN TAN"));
        assert_eq!(matched.day.as_deref(), Some("Mon"));
        assert_eq!(matched.class_section.as_deref(), Some("DA"));
        assert_eq!(matched.comment.as_deref(), Some("CS101 tutor"));
    }
}
