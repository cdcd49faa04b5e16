use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::ingest::error::{IngestError, Result};
use crate::ingest::table::{row_has_data, ParsedTable};
use crate::ingest::value::CellValue;
use crate::ingest::MAX_DATA_ROWS;

/// Read the first sheet of an XLSX/XLS workbook. The first used row is
/// always treated as the header row, whatever it holds; data rows follow
/// the same cap and blank-row policy as the CSV reader.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_excel<P: AsRef<Path>>(path: P) -> Result<ParsedTable> {
    let mut workbook = open_workbook_auto(path.as_ref()).map_err(from_calamine)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::Parse("workbook has no sheets".into()))?
        .map_err(from_calamine)?;

    let mut source_rows = range.rows();
    let headers: Vec<String> = match source_rows.next() {
        Some(cells) => cells.iter().map(header_text).collect(),
        None => return Ok(ParsedTable::default()),
    };

    let mut table = ParsedTable::with_headers(headers);
    let mut blank = 0usize;
    for cells in source_rows {
        if table.rows.len() >= MAX_DATA_ROWS {
            break;
        }

        // Align by column position to the header list.
        let row: Vec<CellValue> = (0..table.headers.len())
            .map(|i| cells.get(i).map(cell_value).unwrap_or(CellValue::Null))
            .collect();

        if row_has_data(&row) {
            table.rows.push(row);
        } else {
            blank += 1;
        }
    }

    debug!(
        headers = table.headers.len(),
        rows = table.rows.len(),
        blank,
        "worksheet normalized"
    );
    Ok(table)
}

fn from_calamine(err: calamine::Error) -> IngestError {
    match err {
        calamine::Error::Io(e) => IngestError::Io(e),
        other => IngestError::Parse(other.to_string()),
    }
}

/// Header cells are taken verbatim from row one: text is trimmed, anything
/// else is rendered to its display text.
fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Native numbers keep their kind; text goes through the shared trim and
/// numeric coercion. Booleans and cell errors render to their display text,
/// date/time cells pass through as their numeric serial.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::from_raw(s),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::from_raw(s),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
