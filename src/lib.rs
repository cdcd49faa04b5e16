pub mod category;
pub mod envelope;
pub mod ingest;

pub use ingest::{parse_file, CellValue, FileKind, IngestError, ParsedTable, MAX_DATA_ROWS};
