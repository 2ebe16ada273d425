// ==========================================
// Teaching Claim - Date expander
// ==========================================
// Stage 3 of the claim pipeline.
// Multiplies each matched row into one row per term date of its weekday.
// ==========================================
// Day validation:
// - blank / missing day → skipped
// - each whitespace token normalised ("MON" → "Mon"), duplicates collapse
// - any token outside Mon..Sat → whole row skipped
// A skipped row counts once in `skipped`.
// ==========================================

use crate::domain::claim::{ExpandedRecord, MatchedRecord};
use crate::domain::types::Weekday;
use crate::engine::calendar::{TermRange, WeekdayCalendar};
use crate::engine::error::EngineResult;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionOutcome {
    pub records: Vec<ExpandedRecord>,
    pub skipped: usize,
}

// ==========================================
// DateExpander
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DateExpander;

impl DateExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands over `start..=end`.
    ///
    /// An inverted range is a caller error and produces no output at all.
    pub fn expand(
        &self,
        matched: &[MatchedRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<ExpansionOutcome> {
        let term = TermRange::new(start, end)?;
        Ok(self.expand_term(matched, &term))
    }

    #[instrument(skip(self, matched), fields(matched = matched.len(), start = %term.start(), end = %term.end()))]
    pub fn expand_term(&self, matched: &[MatchedRecord], term: &TermRange) -> ExpansionOutcome {
        let calendar = WeekdayCalendar::for_term(term);
        self.expand_with_calendar(matched, &calendar)
    }

    pub fn expand_with_calendar(
        &self,
        matched: &[MatchedRecord],
        calendar: &WeekdayCalendar,
    ) -> ExpansionOutcome {
        let mut outcome = ExpansionOutcome::default();

        for record in matched {
            let Some(days) = parse_day_tokens(record.day.as_deref()) else {
                warn!(day = ?record.day, name = ?record.name, "skipping row with invalid day");
                outcome.skipped += 1;
                continue;
            };

            let program_id = first_token(record.program_id.as_deref());
            for day in days {
                for (week_number, date) in calendar.weeks(day) {
                    outcome
                        .records
                        .push(expand_one(record, day, date, week_number, program_id.clone()));
                }
            }
            debug!(name = ?record.name, total = outcome.records.len(), "row expanded");
        }

        info!(
            expanded = outcome.records.len(),
            skipped = outcome.skipped,
            "date expansion complete"
        );
        outcome
    }
}

/// Distinct weekday tokens of a day cell, first-seen order.
///
/// None when the cell is blank or any token is not a weekday.
pub fn parse_day_tokens(day: Option<&str>) -> Option<Vec<Weekday>> {
    let mut days = Vec::new();
    for part in day.unwrap_or("").split_whitespace() {
        let parsed = Weekday::from_token(part)?;
        if !days.contains(&parsed) {
            days.push(parsed);
        }
    }
    if days.is_empty() {
        None
    } else {
        Some(days)
    }
}

/// `WEEK {n}_{DAY}_{CATALOG}_{SECTION}_{FULL LEGAL NAME}`, upper-cased.
pub fn claim_comment(
    week_number: u32,
    day: Weekday,
    catalog_nbr: Option<&str>,
    class_section: Option<&str>,
    full_legal_name: Option<&str>,
) -> String {
    format!(
        "Week {}_{}_{}_{}_{}",
        week_number,
        day,
        catalog_nbr.unwrap_or("").trim(),
        class_section.unwrap_or(""),
        full_legal_name.unwrap_or("")
    )
    .to_uppercase()
}

fn first_token(value: Option<&str>) -> Option<String> {
    value
        .and_then(|v| v.split_whitespace().next())
        .map(str::to_string)
}

fn expand_one(
    record: &MatchedRecord,
    day: Weekday,
    date: NaiveDate,
    week_number: u32,
    program_id: Option<String>,
) -> ExpandedRecord {
    ExpandedRecord {
        empl_id: record.empl_id.clone(),
        full_legal_name: record.full_legal_name.clone(),
        name: record.name.clone(),
        time_entry_code: record.time_entry_code.clone(),
        day,
        date,
        week_number,
        start_time: record.start_time.clone(),
        end_time: record.end_time.clone(),
        position_id: record.position_id.clone(),
        program_id,
        class_section: record.class_section.clone(),
        catalog_nbr: record.catalog_nbr.clone(),
        comment: claim_comment(
            week_number,
            day,
            record.catalog_nbr.as_deref(),
            record.class_section.as_deref(),
            record.full_legal_name.as_deref(),
        ),
    }
}
