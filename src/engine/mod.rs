// ==========================================
// Teaching Claim - Engine layer
// ==========================================
// The three pipeline stages, in order:
// RowFilter → EntityMatcher → DateExpander
// ==========================================
// Every stage is a pure function of its inputs: no I/O, no shared state.
// ==========================================

pub mod calendar;
pub mod date_expander;
pub mod entity_matcher;
pub mod error;
pub mod row_filter;

pub use calendar::{parse_term_date, TermRange, WeekdayCalendar, TERM_DATE_FORMAT};
pub use date_expander::{claim_comment, DateExpander, ExpansionOutcome};
pub use entity_matcher::{is_catalog_match, name_tokens, EntityMatcher, MatchOutcome};
pub use error::{EngineError, EngineResult};
pub use row_filter::{FilterOutcome, RowFilter, DEFAULT_DOMAIN_SUFFIX, DEFAULT_EXCLUDED_SECTIONS};
