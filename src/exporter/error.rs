// ==========================================
// Teaching Claim - Export error types
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unsupported output format: {0} (only .xlsx/.csv)")]
    UnsupportedFormat(String),

    #[error("failed to write file: {0}")]
    FileWriteError(String),

    #[error("failed to write CSV: {0}")]
    CsvWriteError(String),

    #[error("failed to write Excel workbook: {0}")]
    ExcelWriteError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::ExcelWriteError(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
