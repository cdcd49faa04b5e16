//! Tabular file ingestion and normalization.
//!
//! Given a stored upload's path and declared type (csv / xlsx / xls), the
//! readers here produce a uniform [`ParsedTable`]: trimmed headers plus up
//! to [`MAX_DATA_ROWS`] coerced, blank-filtered data rows, ready for JSON
//! serialization. Each call is synchronous, owns its own file handle, and
//! holds no state across calls.

pub mod csv;
pub mod error;
pub mod excel;
pub mod table;
pub mod value;

use std::path::Path;

pub use error::{IngestError, Result};
pub use table::ParsedTable;
pub use value::CellValue;

/// Hard cap on data rows retained per parsed file. Blank rows are dropped
/// before they count toward this.
pub const MAX_DATA_ROWS: usize = 1000;

/// Declared type of a stored upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
    Xls,
}

impl FileKind {
    /// Case-insensitive parse of a declared type tag or path extension.
    pub fn from_tag(tag: &str) -> Result<FileKind> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(FileKind::Csv),
            "xlsx" => Ok(FileKind::Xlsx),
            "xls" => Ok(FileKind::Xls),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Xlsx => "xlsx",
            FileKind::Xls => "xls",
        }
    }
}

/// Parse a stored upload into a normalized table, dispatching on its
/// declared type. A missing path fails with [`IngestError::NotFound`]
/// before any reader runs.
#[tracing::instrument(level = "info", skip(path, file_type), fields(path = %path.as_ref().display(), file_type = %file_type))]
pub fn parse_file<P: AsRef<Path>>(path: P, file_type: &str) -> Result<ParsedTable> {
    let kind = FileKind::from_tag(file_type)?;
    let path = path.as_ref();
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    match kind {
        FileKind::Csv => csv::parse_csv(path),
        FileKind::Xlsx | FileKind::Xls => excel::parse_excel(path),
    }
}
