// ==========================================
// Teaching Claim - Column vocabulary
// ==========================================
// Canonical header names used on output, plus the aliases accepted on input.
// Header lookup is case-insensitive and ignores surrounding whitespace.
// ==========================================

// ===== Timetable export =====
pub const EMAIL: &str = "Email";
pub const CLASS_SECTION: &str = "Class Section";
pub const DAY: &str = "Day";
pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const NAME: &str = "Name";
pub const CATALOG_NBR: &str = "Catalog Nbr";

// ===== Hiring form =====
pub const EMPL_ID: &str = "Empl ID";
pub const FULL_LEGAL_NAME: &str = "Full Legal Name";
pub const TIME_ENTRY_CODE: &str = "Time entry code";
pub const POSITION_ID: &str = "Position ID";
pub const PROGRAM_ID: &str = "Program ID";
pub const REQUESTER_REMARKS: &str = "Requester Remarks";

// ===== Produced by the pipeline =====
pub const COMMENT: &str = "Comment";
pub const DATE: &str = "Date";
pub const WEEK_NUMBER: &str = "Week Number";

/// Accepted spellings for a canonical column, canonical first.
pub fn aliases(column: &str) -> &'static [&'static str] {
    match column {
        EMAIL => &["Email", "Email Address", "E-mail"],
        CLASS_SECTION => &["Class Section", "Section"],
        DAY => &["Day", "Days"],
        START_TIME => &["Start Time", "Mtg Start"],
        END_TIME => &["End Time", "Mtg End"],
        NAME => &["Name", "Instructor Name"],
        CATALOG_NBR => &["Catalog Nbr", "Catalog Number", "Catalog"],
        EMPL_ID => &["Empl ID", "Worker* (Emp ID)", "Emp ID", "Employee ID"],
        FULL_LEGAL_NAME => &["Full Legal Name", "Full Name"],
        TIME_ENTRY_CODE => &["Time entry code", "Time Entry Code"],
        POSITION_ID => &["Position ID"],
        PROGRAM_ID => &["Program ID"],
        REQUESTER_REMARKS => &["Requester Remarks", "Remarks"],
        COMMENT => &["Comment"],
        _ => &[],
    }
}

/// Finds the header in `headers` that spells `column` (or one of its aliases).
pub fn resolve<'a>(headers: &'a [String], column: &str) -> Option<&'a str> {
    let candidates = aliases(column);
    let candidates: &[&str] = if candidates.is_empty() {
        std::slice::from_ref(&column)
    } else {
        candidates
    };

    candidates.iter().find_map(|alias| {
        headers
            .iter()
            .find(|h| h.trim().eq_ignore_ascii_case(alias))
            .map(String::as_str)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_alias_for_empl_id() {
        let h = headers(&["Worker* (Emp ID)", "Full Legal Name"]);
        assert_eq!(resolve(&h, EMPL_ID), Some("Worker* (Emp ID)"));
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_prefers_canonical() {
        let h = headers(&["Catalog", " catalog nbr "]);
        assert_eq!(resolve(&h, CATALOG_NBR), Some(" catalog nbr "));
    }

    #[test]
    fn test_resolve_unknown_column() {
        let h = headers(&["Facility"]);
        assert_eq!(resolve(&h, EMAIL), None);
        assert_eq!(resolve(&h, "Facility"), Some("Facility"));
    }
}
