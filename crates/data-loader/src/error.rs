//! Error types for the data-loader crate.
//!
//! Loading errors are fatal at startup and surfaced to the operator.
//! A failed title lookup is a separate, recoverable error so callers can
//! render "not found" instead of aborting.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader could not decode the source (bad quoting, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A required header is absent from the source
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Row in the data file couldn't be parsed
    ///
    /// Only raised when loading in strict mode; lenient loads skip the row.
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// Two records passed to `Catalog::from_records` share a title
    #[error("Duplicate title in catalog: {title}")]
    DuplicateTitle { title: String },
}

/// Returned when a title lookup misses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No movie titled '{title}' in the catalog")]
pub struct NotFoundError {
    pub title: String,
}

impl NotFoundError {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
