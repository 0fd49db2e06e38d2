//! Error types for CSV text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or parsing CSV input.
///
/// The byte-level extraction path never returns these: decoding always
/// succeeds and unparseable records are skipped with a warning.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// A record could not be parsed as CSV.
    #[error("CSV parsing error: {0}")]
    CsvError(String),
}
