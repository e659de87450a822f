use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or exporting tabular files
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Unsupported file type: {extension:?} (use .csv, .xlsx or .xls)")]
    UnsupportedFormat { extension: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
