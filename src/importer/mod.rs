// ==========================================
// Teaching Claim - Import layer
// ==========================================
// Spreadsheet files → typed records.
// Supports: Excel, CSV
// ==========================================
// Flow: parse → resolve columns → clean values → records
// ==========================================

pub mod columns;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, RawSheet, UniversalFileParser};

use crate::domain::{HiringRecord, MatchedRecord, TimetableRecord};
use std::path::Path;
use tracing::info;

/// Reads a timetable export (.xlsx/.xls/.csv).
pub fn load_timetable<P: AsRef<Path>>(path: P) -> ImportResult<Vec<TimetableRecord>> {
    let sheet = UniversalFileParser.parse(path.as_ref())?;
    let records = FieldMapper.map_timetable(&sheet)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "timetable loaded");
    Ok(records)
}

/// Reads a hiring form (.xlsx/.xls/.csv).
pub fn load_hiring<P: AsRef<Path>>(path: P) -> ImportResult<Vec<HiringRecord>> {
    let sheet = UniversalFileParser.parse(path.as_ref())?;
    let records = FieldMapper.map_hiring(&sheet)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "hiring form loaded");
    Ok(records)
}

/// Reads a merged artifact produced by the merge stage.
pub fn load_matched<P: AsRef<Path>>(path: P) -> ImportResult<Vec<MatchedRecord>> {
    let sheet = UniversalFileParser.parse(path.as_ref())?;
    let records = FieldMapper.map_matched(&sheet)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "merged rows loaded");
    Ok(records)
}
