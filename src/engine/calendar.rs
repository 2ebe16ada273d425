// ==========================================
// Teaching Claim - Term calendar
// ==========================================
// Buckets every date of a term under its weekday token.
// Week numbers are per-bucket ordinals, not ISO weeks:
// "Week 3" on Mon and "Week 3" on Tue can be different physical weeks.
// ==========================================

use crate::domain::types::Weekday;
use crate::engine::error::{EngineError, EngineResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Operator-facing date format, e.g. "21 April 2025".
pub const TERM_DATE_FORMAT: &str = "%d %B %Y";

// ==========================================
// TermRange
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TermRange {
    /// Builds a validated range; `start` must not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvertedTerm { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends from operator strings.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        let start = parse_term_date("start", start)?;
        let end = parse_term_date("end", end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parses "21 April 2025" (ISO "2025-04-21" is accepted too).
pub fn parse_term_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, TERM_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| EngineError::InvalidTermDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

// ==========================================
// WeekdayCalendar
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayCalendar {
    buckets: BTreeMap<Weekday, Vec<NaiveDate>>,
}

impl WeekdayCalendar {
    /// Enumerates `start..=end`, dropping Sundays.
    ///
    /// An inverted range yields empty buckets rather than an error; callers
    /// that need the error go through `TermRange`.
    pub fn build(start: NaiveDate, end: NaiveDate) -> Self {
        let mut buckets: BTreeMap<Weekday, Vec<NaiveDate>> =
            Weekday::ALL.iter().map(|day| (*day, Vec::new())).collect();

        for date in start.iter_days().take_while(|d| *d <= end) {
            if let Some(day) = Weekday::from_chrono(date.weekday()) {
                buckets.entry(day).or_default().push(date);
            }
        }

        Self { buckets }
    }

    pub fn for_term(term: &TermRange) -> Self {
        Self::build(term.start(), term.end())
    }

    /// Dates for one weekday, chronological. Index `k` has week number `k + 1`.
    pub fn dates(&self, day: Weekday) -> &[NaiveDate] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(week_number, date)` pairs for one weekday.
    pub fn weeks(&self, day: Weekday) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        self.dates(day)
            .iter()
            .enumerate()
            .map(|(idx, date)| (idx as u32 + 1, *date))
    }

    /// Week number of a date within its own weekday bucket.
    pub fn week_number(&self, date: NaiveDate) -> Option<u32> {
        let day = Weekday::from_chrono(date.weekday())?;
        self.dates(day)
            .iter()
            .position(|d| *d == date)
            .map(|idx| idx as u32 + 1)
    }

    pub fn total_dates(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
