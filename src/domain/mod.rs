// ==========================================
// Teaching Claim - Domain layer
// ==========================================
// Record types flowing between pipeline stages.
// No parsing, no I/O, no stage logic.
// ==========================================

pub mod claim;
pub mod hiring;
pub mod timetable;
pub mod types;

pub use claim::{ExpandedRecord, MatchedRecord};
pub use hiring::HiringRecord;
pub use timetable::{TimetableRecord, UnmatchedRecord};
pub use types::Weekday;
