//! Error handling for ledger loading, classification and report emission.

use std::io;

/// Specialized error type for the revenue report pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading a workbook file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the workbook reader
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Requested worksheet does not exist in the workbook
    #[error("Sheet '{name}' not found in workbook")]
    SheetNotFound { name: String },

    /// Worksheet has no header row
    #[error("Sheet '{name}' is empty")]
    EmptySheet { name: String },

    /// Required column missing after header normalization
    #[error("Column '{column}' not found. Please check the actual column names in the file.")]
    Schema { column: String },

    /// Column exists but does not hold string data
    #[error("Column '{column}' is not a string column")]
    ColumnType { column: String },

    /// A cell in an amount column held non-numeric residue after cleanup
    #[error("Unparseable amount '{value}' in column '{column}', row {row}")]
    AmountParse {
        column: String,
        row: usize,
        value: String,
    },

    /// Error assembling an Arrow record batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error writing the output workbook
    #[error("Report error: {0}")]
    Report(String),

    /// Error reading the rule configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for revenue report operations
pub type Result<T> = std::result::Result<T, Error>;
