// ==========================================
// Teaching Claim - Row filter
// ==========================================
// Stage 1 of the claim pipeline.
// Input: raw timetable rows
// Output: adjunct rows, times canonicalised, one weekday token per row
// ==========================================
// Rules (in order):
// 1) email contains the domain suffix (case-insensitive); missing email → dropped
// 2) class section has ≤ 2 letters, or is exactly an allow-listed section
// 3) start/end time → HH:MM:SS, unparsable → None
// 4) multi-token day → one copy per token, consecutive, token order
// ==========================================

use crate::domain::timetable::TimetableRecord;
use crate::importer::data_cleaner::{alphabetic_residue, DataCleaner};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Default adjunct e-mail domain.
pub const DEFAULT_DOMAIN_SUFFIX: &str = "@adj.np.edu.sg";

/// Sections allowed through despite having more than two letters.
pub const DEFAULT_EXCLUDED_SECTIONS: &[&str] = &["TSP1", "WSP1"];

/// Longest letter count a class section may reduce to.
const MAX_SECTION_LETTERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub records: Vec<TimetableRecord>,
    /// Kept rows whose day cell held more than one token.
    pub multi_day_rows: usize,
}

// ==========================================
// RowFilter
// ==========================================
#[derive(Debug, Clone)]
pub struct RowFilter {
    domain_suffix_lower: String,
    excluded_sections: BTreeSet<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_DOMAIN_SUFFIX,
            DEFAULT_EXCLUDED_SECTIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl RowFilter {
    pub fn new(domain_suffix: &str, excluded_sections: BTreeSet<String>) -> Self {
        Self {
            domain_suffix_lower: domain_suffix.to_lowercase(),
            excluded_sections,
        }
    }

    /// Runs the whole stage over `records`, preserving input order.
    #[instrument(skip(self, records), fields(input_rows = records.len()))]
    pub fn filter(&self, records: &[TimetableRecord]) -> FilterOutcome {
        let cleaner = DataCleaner;
        let mut output = Vec::with_capacity(records.len());
        let mut multi_day_rows = 0;
        let mut kept = 0;

        for record in records {
            if !self.is_domain_match(record) || !self.is_section_allowed(record) {
                continue;
            }
            kept += 1;

            let normalized = TimetableRecord {
                start_time: cleaner.normalize_time(record.start_time.as_deref()),
                end_time: cleaner.normalize_time(record.end_time.as_deref()),
                ..record.clone()
            };

            let tokens = normalized.day_tokens();
            if tokens.len() <= 1 {
                output.push(normalized);
                continue;
            }

            debug!(
                row_number = record.row_number,
                tokens = tokens.len(),
                "decomposing multi-day row"
            );
            multi_day_rows += 1;
            let copies: Vec<TimetableRecord> =
                tokens.iter().map(|token| normalized.with_day(token)).collect();
            output.extend(copies);
        }

        info!(
            kept = kept,
            multi_day_rows = multi_day_rows,
            output_rows = output.len(),
            "row filter complete"
        );

        FilterOutcome {
            records: output,
            multi_day_rows,
        }
    }

    /// Email contains the configured suffix, ignoring case.
    pub fn is_domain_match(&self, record: &TimetableRecord) -> bool {
        record
            .email
            .as_deref()
            .map(|email| email.to_lowercase().contains(&self.domain_suffix_lower))
            .unwrap_or(false)
    }

    /// At most two letters, or an exact allow-list hit (e.g. "TSP1").
    pub fn is_section_allowed(&self, record: &TimetableRecord) -> bool {
        match record.class_section.as_deref() {
            Some(section) => {
                alphabetic_residue(section).chars().count() <= MAX_SECTION_LETTERS
                    || self.excluded_sections.contains(section)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str, section: &str, day: &str) -> TimetableRecord {
        TimetableRecord {
            email: Some(email.to_string()),
            class_section: Some(section.to_string()),
            day: Some(day.to_string()),
            start_time: Some("9:00".to_string()),
            end_time: Some("11:00".to_string()),
            name: Some("JOHN TAN".to_string()),
            catalog_nbr: Some("CS101".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_domain_match_is_case_insensitive() {
        let filter = RowFilter::default();
        assert!(filter.is_domain_match(&row("A@ADJ.NP.EDU.SG", "DA", "Mon")));
        assert!(!filter.is_domain_match(&row("a@np.edu.sg", "DA", "Mon")));

        let missing = TimetableRecord {
            email: None,
            ..row("", "DA", "Mon")
        };
        assert!(!filter.is_domain_match(&missing));
    }

    #[test]
    fn test_section_letter_bound_and_allow_list() {
        let filter = RowFilter::default();
        assert!(filter.is_section_allowed(&row("a@adj.np.edu.sg", "DA", "Mon")));
        assert!(filter.is_section_allowed(&row("a@adj.np.edu.sg", "P01", "Mon")));
        assert!(filter.is_section_allowed(&row("a@adj.np.edu.sg", "01", "Mon")));
        assert!(!filter.is_section_allowed(&row("a@adj.np.edu.sg", "DAX", "Mon")));
        assert!(filter.is_section_allowed(&row("a@adj.np.edu.sg", "TSP1", "Mon")));
        assert!(filter.is_section_allowed(&row("a@adj.np.edu.sg", "WSP1", "Mon")));
        // allow-list is exact
        assert!(!filter.is_section_allowed(&row("a@adj.np.edu.sg", "tsp1", "Mon")));
        assert!(!filter.is_section_allowed(&row("a@adj.np.edu.sg", "TSP2", "Mon")));

        let missing = TimetableRecord {
            class_section: None,
            ..row("a@adj.np.edu.sg", "", "Mon")
        };
        assert!(!filter.is_section_allowed(&missing));
    }

    #[test]
    fn test_filter_decomposes_multi_day_rows_in_order() {
        let filter = RowFilter::default();
        let input = vec![
            row("a@adj.np.edu.sg", "DA", "Mon Wed"),
            row("b@adj.np.edu.sg", "DB", "Fri"),
        ];

        let outcome = filter.filter(&input);
        let days: Vec<&str> = outcome
            .records
            .iter()
            .map(|r| r.day.as_deref().unwrap())
            .collect();
        assert_eq!(days, vec!["Mon", "Wed", "Fri"]);
        assert_eq!(outcome.multi_day_rows, 1);
        assert_eq!(outcome.records[0].email, outcome.records[1].email);
    }

    #[test]
    fn test_filter_normalizes_times() {
        let filter = RowFilter::default();
        let mut bad = row("a@adj.np.edu.sg", "DA", "Tue");
        bad.end_time = Some("TBA".to_string());

        let outcome = filter.filter(&[bad]);
        assert_eq!(outcome.records[0].start_time.as_deref(), Some("09:00:00"));
        assert_eq!(outcome.records[0].end_time, None);
    }

    #[test]
    fn test_filter_drops_non_adjunct_and_long_sections() {
        let filter = RowFilter::default();
        let input = vec![
            row("staff@np.edu.sg", "DA", "Mon"),
            row("a@adj.np.edu.sg", "DAX", "Mon"),
            row("a@adj.np.edu.sg", "TSP1", "Thu"),
        ];

        let outcome = filter.filter(&input);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].class_section.as_deref(), Some("TSP1"));
    }

    #[test]
    fn test_filter_keeps_blank_day_rows_as_is() {
        let filter = RowFilter::default();
        let mut blank = row("a@adj.np.edu.sg", "DA", "");
        blank.day = None;

        let outcome = filter.filter(&[blank]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].day, None);
        assert_eq!(outcome.multi_day_rows, 0);
    }

    #[test]
    fn test_custom_domain_suffix() {
        let filter = RowFilter::new("@Example.org", BTreeSet::new());
        assert!(filter.is_domain_match(&row("x@EXAMPLE.ORG", "A", "Mon")));
        assert!(!filter.is_section_allowed(&row("x@example.org", "TSP1", "Mon")));
    }
}
