// ==========================================
// Teaching Claim - Field mapper
// ==========================================
// Raw sheet columns → typed records.
// Column names are resolved through `columns::aliases`, so source variants
// ("Worker* (Emp ID)" vs "Empl ID") map to the same field.
// ==========================================

use crate::domain::claim::MatchedRecord;
use crate::domain::hiring::HiringRecord;
use crate::domain::timetable::TimetableRecord;
use crate::importer::columns;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawRow, RawSheet};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, instrument};

const TIMETABLE_COLUMNS: &[&str] = &[
    columns::EMAIL,
    columns::CLASS_SECTION,
    columns::DAY,
    columns::START_TIME,
    columns::END_TIME,
    columns::NAME,
    columns::CATALOG_NBR,
];

const TIMETABLE_REQUIRED: &[&str] = &[
    columns::EMAIL,
    columns::CLASS_SECTION,
    columns::DAY,
    columns::NAME,
    columns::CATALOG_NBR,
];

const HIRING_REQUIRED: &[&str] = &[
    columns::FULL_LEGAL_NAME,
    columns::EMPL_ID,
    columns::TIME_ENTRY_CODE,
    columns::POSITION_ID,
    columns::PROGRAM_ID,
    columns::REQUESTER_REMARKS,
];

const MATCHED_COLUMNS: &[&str] = &[
    columns::EMPL_ID,
    columns::FULL_LEGAL_NAME,
    columns::TIME_ENTRY_CODE,
    columns::START_TIME,
    columns::END_TIME,
    columns::POSITION_ID,
    columns::PROGRAM_ID,
    columns::COMMENT,
    columns::DAY,
    columns::CATALOG_NBR,
    columns::NAME,
    columns::CLASS_SECTION,
];

const MATCHED_REQUIRED: &[&str] = &[columns::DAY, columns::FULL_LEGAL_NAME];

// ==========================================
// ColumnMap - canonical name → actual header
// ==========================================
struct ColumnMap {
    resolved: HashMap<&'static str, String>,
}

impl ColumnMap {
    fn resolve(
        sheet: &RawSheet,
        sheet_label: &str,
        wanted: &[&'static str],
        required: &[&'static str],
    ) -> ImportResult<Self> {
        let mut resolved = HashMap::new();
        for column in wanted.iter().chain(required) {
            if let Some(header) = columns::resolve(&sheet.headers, column) {
                resolved.insert(*column, header.to_string());
            }
        }

        let missing: Vec<String> = required
            .iter()
            .filter(|c| !resolved.contains_key(*c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns {
                sheet: sheet_label.to_string(),
                columns: missing,
            });
        }

        Ok(Self { resolved })
    }

    fn get(&self, row: &RawRow, column: &str) -> Option<String> {
        let header = self.resolved.get(column)?;
        DataCleaner.normalize_null(row.get(header).map(str::to_string))
    }

    fn consumed_headers(&self) -> HashSet<&str> {
        self.resolved.values().map(String::as_str).collect()
    }
}

pub struct FieldMapper;

impl FieldMapper {
    /// Maps the timetable export. Unmapped columns become passthrough fields.
    #[instrument(skip(self, sheet), fields(rows = sheet.rows.len()))]
    pub fn map_timetable(&self, sheet: &RawSheet) -> ImportResult<Vec<TimetableRecord>> {
        let map = ColumnMap::resolve(sheet, "timetable", TIMETABLE_COLUMNS, TIMETABLE_REQUIRED)?;
        let consumed = map.consumed_headers();
        let passthrough_headers: Vec<&String> = sheet
            .headers
            .iter()
            .filter(|h| !h.is_empty() && !consumed.contains(h.as_str()))
            .collect();
        debug!(passthrough = passthrough_headers.len(), "timetable columns resolved");

        let records = sheet
            .rows
            .iter()
            .map(|row| {
                let passthrough: BTreeMap<String, String> = passthrough_headers
                    .iter()
                    .map(|h| (h.to_string(), row.get(h).unwrap_or("").to_string()))
                    .collect();

                TimetableRecord {
                    email: map.get(row, columns::EMAIL),
                    class_section: map.get(row, columns::CLASS_SECTION),
                    day: map.get(row, columns::DAY),
                    start_time: map.get(row, columns::START_TIME),
                    end_time: map.get(row, columns::END_TIME),
                    name: map.get(row, columns::NAME),
                    catalog_nbr: map.get(row, columns::CATALOG_NBR),
                    passthrough,
                    row_number: row.row_number,
                }
            })
            .collect();

        Ok(records)
    }

    /// Maps the hiring form; all six reference columns must be present.
    #[instrument(skip(self, sheet), fields(rows = sheet.rows.len()))]
    pub fn map_hiring(&self, sheet: &RawSheet) -> ImportResult<Vec<HiringRecord>> {
        let map = ColumnMap::resolve(sheet, "hiring", HIRING_REQUIRED, HIRING_REQUIRED)?;

        Ok(sheet
            .rows
            .iter()
            .map(|row| HiringRecord {
                empl_id: map.get(row, columns::EMPL_ID),
                full_legal_name: map.get(row, columns::FULL_LEGAL_NAME),
                time_entry_code: map.get(row, columns::TIME_ENTRY_CODE),
                position_id: map.get(row, columns::POSITION_ID),
                program_id: map.get(row, columns::PROGRAM_ID),
                requester_remarks: map.get(row, columns::REQUESTER_REMARKS),
                row_number: row.row_number,
            })
            .collect())
    }

    /// Reloads a merged artifact written by an earlier `merge` run.
    #[instrument(skip(self, sheet), fields(rows = sheet.rows.len()))]
    pub fn map_matched(&self, sheet: &RawSheet) -> ImportResult<Vec<MatchedRecord>> {
        let map = ColumnMap::resolve(sheet, "merged", MATCHED_COLUMNS, MATCHED_REQUIRED)?;

        Ok(sheet
            .rows
            .iter()
            .map(|row| MatchedRecord {
                empl_id: map.get(row, columns::EMPL_ID),
                full_legal_name: map.get(row, columns::FULL_LEGAL_NAME),
                time_entry_code: map.get(row, columns::TIME_ENTRY_CODE),
                position_id: map.get(row, columns::POSITION_ID),
                program_id: map.get(row, columns::PROGRAM_ID),
                start_time: map.get(row, columns::START_TIME),
                end_time: map.get(row, columns::END_TIME),
                day: map.get(row, columns::DAY),
                catalog_nbr: map.get(row, columns::CATALOG_NBR),
                name: map.get(row, columns::NAME),
                class_section: map.get(row, columns::CLASS_SECTION),
                comment: map.get(row, columns::COMMENT),
            })
            .collect())
    }
}
