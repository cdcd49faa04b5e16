use std::path::PathBuf;
use thiserror::Error;

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Failure modes of a single parse call. Nothing here is retried by the
/// core; the calling layer decides how each kind maps to a user response.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Declared type is not one of csv / xlsx / xls.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The stored file is gone, even though its record may still exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Opening or reading the file stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not valid CSV / spreadsheet data.
    #[error("failed to parse file: {0}")]
    Parse(String),
}
