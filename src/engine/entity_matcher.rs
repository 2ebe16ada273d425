// ==========================================
// Teaching Claim - Entity matcher
// ==========================================
// Stage 2 of the claim pipeline.
// Links each filtered timetable row to at most one hiring record.
// ==========================================
// A hiring record is accepted when BOTH hold:
// - name match: ≥ 2 shared upper-cased whitespace tokens
// - code match: catalog_nbr vs requester_remarks substring rules
// The first accepted hiring record in input order wins; later candidates are
// never looked at. The rules are deliberately permissive: every match is
// reviewed by an operator downstream.
// ==========================================

use crate::domain::claim::MatchedRecord;
use crate::domain::hiring::HiringRecord;
use crate::domain::timetable::{TimetableRecord, UnmatchedRecord};
use crate::importer::data_cleaner::alphabetic_residue;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Shared name tokens needed for a partial name match.
pub const MIN_COMMON_NAME_TOKENS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: Vec<MatchedRecord>,
    pub unmatched: Vec<UnmatchedRecord>,
}

impl MatchOutcome {
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }
}

// ==========================================
// EntityMatcher
// ==========================================
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    min_common_tokens: usize,
}

impl Default for EntityMatcher {
    fn default() -> Self {
        Self {
            min_common_tokens: MIN_COMMON_NAME_TOKENS,
        }
    }
}

impl EntityMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nested-scan join of `filtered` against `hiring`.
    ///
    /// `matched.len() + unmatched.len() == filtered.len()` always holds, and
    /// both partitions keep the input order.
    #[instrument(skip(self, filtered, hiring), fields(filtered = filtered.len(), hiring = hiring.len()))]
    pub fn match_records(
        &self,
        filtered: &[TimetableRecord],
        hiring: &[HiringRecord],
    ) -> MatchOutcome {
        // Tokenise hiring names once; they are scanned for every timetable row
        let hiring_tokens: Vec<HashSet<String>> = hiring
            .iter()
            .map(|h| name_tokens(h.full_legal_name.as_deref()))
            .collect();

        let mut outcome = MatchOutcome::default();

        for row in filtered {
            let row_tokens = name_tokens(row.name.as_deref());

            let found = hiring.iter().zip(&hiring_tokens).find(|(candidate, tokens)| {
                self.is_name_match(&row_tokens, tokens)
                    && is_catalog_match(
                        row.catalog_nbr.as_deref(),
                        candidate.requester_remarks.as_deref(),
                    )
            });

            match found {
                Some((candidate, _)) => {
                    debug!(
                        row_number = row.row_number,
                        hiring_row = candidate.row_number,
                        "timetable row matched"
                    );
                    outcome.matched.push(MatchedRecord::join(row, candidate));
                }
                None => outcome.unmatched.push(row.clone()),
            }
        }

        info!(
            matched = outcome.matched.len(),
            unmatched = outcome.unmatched_count(),
            "entity matching complete"
        );
        outcome
    }

    /// Token-set overlap of at least `min_common_tokens`; empty sets never match.
    pub fn is_name_match(&self, left: &HashSet<String>, right: &HashSet<String>) -> bool {
        if left.is_empty() || right.is_empty() {
            return false;
        }
        left.intersection(right).count() >= self.min_common_tokens
    }
}

/// Upper-cased whitespace tokens of a free-text name.
pub fn name_tokens(name: Option<&str>) -> HashSet<String> {
    name.map(|n| n.to_uppercase().split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Catalog number vs requester remarks.
///
/// Catalog loses all whitespace, remarks are trimmed, case is kept. Matches
/// when any of:
/// 1. either string contains the other
/// 2. the catalog's letters alone appear in the remarks
/// 3. the letters of some `_`-separated catalog segment appear in the remarks
///
/// A missing value on either side never matches. A whitespace-only value
/// normalises to "" and so matches through rule 1.
pub fn is_catalog_match(catalog: Option<&str>, remarks: Option<&str>) -> bool {
    let (Some(catalog), Some(remarks)) = (catalog, remarks) else {
        return false;
    };

    let catalog: String = catalog.chars().filter(|c| !c.is_whitespace()).collect();
    let remarks = remarks.trim();

    if remarks.contains(catalog.as_str()) || catalog.contains(remarks) {
        return true;
    }

    let catalog_alpha = alphabetic_residue(&catalog);
    if !catalog_alpha.is_empty() && remarks.contains(catalog_alpha.as_str()) {
        return true;
    }

    catalog.split('_').any(|segment| {
        let segment_alpha = alphabetic_residue(segment);
        !segment_alpha.is_empty() && remarks.contains(segment_alpha.as_str())
    })
}
