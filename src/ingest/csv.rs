use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::ingest::error::{IngestError, Result};
use crate::ingest::table::{row_has_data, ParsedTable};
use crate::ingest::value::CellValue;
use crate::ingest::MAX_DATA_ROWS;

/// Read `path` as CSV. The first record is the header row; data records
/// follow until EOF or until `MAX_DATA_ROWS` non-blank rows are held.
/// Records beyond the cap are never pulled from the reader.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedTable> {
    let file = File::open(path.as_ref())?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| IngestError::Parse(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect(),
        None => return Ok(ParsedTable::default()),
    };

    let mut table = ParsedTable::with_headers(headers);
    let mut blank = 0usize;
    let mut ragged = 0usize;
    while table.rows.len() < MAX_DATA_ROWS {
        let record = match records.next() {
            Some(record) => record.map_err(|e| IngestError::Parse(e.to_string()))?,
            None => break,
        };
        if record.len() != table.headers.len() {
            ragged += 1;
        }

        // Align to the header list: extra fields are ignored, missing
        // trailing fields are null.
        let row: Vec<CellValue> = (0..table.headers.len())
            .map(|i| record.get(i).map(CellValue::from_raw).unwrap_or(CellValue::Null))
            .collect();

        if row_has_data(&row) {
            table.rows.push(row);
        } else {
            blank += 1;
        }
    }
    if ragged > 0 {
        warn!(ragged, "records did not match the header width");
    }

    debug!(
        headers = table.headers.len(),
        rows = table.rows.len(),
        blank,
        "csv normalized"
    );
    Ok(table)
}
