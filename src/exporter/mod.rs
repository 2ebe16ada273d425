// ==========================================
// Teaching Claim - Export layer
// ==========================================
// Stage outputs → .csv / .xlsx artifacts for operator review.
// The extension of the target path selects the format.
// ==========================================

pub mod error;
pub mod table;

pub use error::{ExportError, ExportResult};
pub use table::{expanded_table, matched_table, timetable_table, Table};

use crate::domain::{ExpandedRecord, MatchedRecord, TimetableRecord};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

const SHEET_NAME: &str = "Sheet1";

// Default artifact names inside the output directory
pub const FILTERED_FILE: &str = "filtered_results.xlsx";
pub const MERGED_FILE: &str = "merged_output.xlsx";
pub const UNMATCHED_FILE: &str = "unmatched_rows.xlsx";
pub const EXPANDED_FILE: &str = "expanded_with_dates.xlsx";
pub const SUMMARY_FILE: &str = "summary.json";

pub fn write_filtered(path: &Path, records: &[TimetableRecord]) -> ExportResult<()> {
    write_table(path, &timetable_table(records))
}

pub fn write_unmatched(path: &Path, records: &[TimetableRecord]) -> ExportResult<()> {
    write_table(path, &timetable_table(records))
}

pub fn write_matched(path: &Path, records: &[MatchedRecord]) -> ExportResult<()> {
    write_table(path, &matched_table(records))
}

pub fn write_expanded(path: &Path, records: &[ExpandedRecord]) -> ExportResult<()> {
    write_table(path, &expanded_table(records))
}

/// Writes `table` as CSV or XLSX depending on the extension of `path`.
pub fn write_table(path: &Path, table: &Table) -> ExportResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, table)?,
        "xlsx" => write_xlsx(path, table)?,
        other => return Err(ExportError::UnsupportedFormat(other.to_string())),
    }

    info!(path = %path.display(), rows = table.rows.len(), "artifact written");
    Ok(())
}

fn write_csv(path: &Path, table: &Table) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_xlsx(path: &Path, table: &Table) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet.write_string(row_idx as u32 + 1, col as u16, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
