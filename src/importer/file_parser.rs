// ==========================================
// Teaching Claim - File parsers
// ==========================================
// Supports: Excel (.xlsx/.xls) / CSV (.csv)
// First row is the header; fully blank rows are skipped.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, instrument};

// ==========================================
// RawSheet
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize, // 1-based data row, header excluded
    pub cells: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }
}

// ==========================================
// FileParser trait
// ==========================================
pub trait FileParser: Send + Sync {
    fn parse(&self, file_path: &Path) -> ImportResult<RawSheet>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn push_row(headers: &[String], values: Vec<String>, row_number: usize, rows: &mut Vec<RawRow>) {
    let mut cells = HashMap::new();
    for (col_idx, value) in values.into_iter().enumerate() {
        if let Some(header) = headers.get(col_idx) {
            cells.insert(header.clone(), value.trim().to_string());
        }
    }

    if cells.values().all(|v| v.is_empty()) {
        return;
    }
    rows.push(RawRow { row_number, cells });
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    #[instrument(skip(self), fields(path = %file_path.display()))]
    fn parse(&self, file_path: &Path) -> ImportResult<RawSheet> {
        ensure_exists(file_path)?;
        let ext = extension(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let values = record.iter().map(str::to_string).collect();
            push_row(&headers, values, idx + 1, &mut rows);
        }

        debug!(rows = rows.len(), "csv parsed");
        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// ExcelParser
// ==========================================
// Reads the first worksheet only.
pub struct ExcelParser;

impl FileParser for ExcelParser {
    #[instrument(skip(self), fields(path = %file_path.display()))]
    fn parse(&self, file_path: &Path) -> ImportResult<RawSheet> {
        ensure_exists(file_path)?;
        let ext = extension(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no worksheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("worksheet has no header row".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, data_row) in sheet_rows.enumerate() {
            let values = data_row.iter().map(|cell| cell.to_string()).collect();
            push_row(&headers, values, idx + 1, &mut rows);
        }

        debug!(sheet = %sheet_name, rows = rows.len(), "worksheet parsed");
        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// UniversalFileParser (dispatch on extension)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse(&self, file_path: &Path) -> ImportResult<RawSheet> {
        match extension(file_path).as_str() {
            "csv" => CsvParser.parse(file_path),
            "xlsx" | "xls" => ExcelParser.parse(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
