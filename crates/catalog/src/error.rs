//! Error types for the catalog crate.
//!
//! Every failure here means the catalog could not be produced. Callers
//! treat them as "catalog unavailable" and stop; nothing is retried.

use thiserror::Error;

/// Errors that can occur while loading, parsing or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, unreadable header, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A present field could not be converted to its typed value
    ///
    /// `line` is the 1-based line in the source file, header included.
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same business id
    #[error("Duplicate business_id: {0}")]
    DuplicateBusinessId(String),

    /// Header is missing a column the catalog needs
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
