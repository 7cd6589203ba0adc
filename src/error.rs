//! Error types for fixture generation

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Main error type for building, writing and reading fixture workbooks
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Error occurred while reading a workbook back
    #[error("Failed to read Excel file: {0}")]
    ReadError(String),

    /// Error occurred while writing the workbook package
    #[error("Failed to write Excel file: {0}")]
    WriteError(String),

    /// Sheet not found by name
    #[error("Sheet '{sheet}' not found. Available sheets: {available}")]
    SheetNotFound { sheet: String, available: String },

    /// Sheet name already used in this workbook
    #[error("Sheet '{0}' already exists in workbook")]
    DuplicateSheet(String),

    /// Sheet name rejected by Excel naming rules
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: &'static str },

    /// Invalid cell reference or coordinate
    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<calamine::XlsxError> for FixtureError {
    fn from(err: calamine::XlsxError) -> Self {
        FixtureError::ReadError(err.to_string())
    }
}
