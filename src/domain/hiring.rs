// ==========================================
// Teaching Claim - Hiring records
// ==========================================
// One funding/position entry from the hiring spreadsheet.
// Immutable reference data for a pipeline run.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringRecord {
    pub empl_id: Option<String>,
    pub full_legal_name: Option<String>,
    pub time_entry_code: Option<String>,
    pub position_id: Option<String>,
    pub program_id: Option<String>,
    pub requester_remarks: Option<String>, // free text, matched against catalog_nbr

    #[serde(default)]
    pub row_number: usize,
}
