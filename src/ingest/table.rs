use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::ingest::value::CellValue;

/// Normalized result of ingesting one tabular file.
///
/// Headers keep their source order and may repeat; every row holds exactly
/// one cell per header, aligned by position. Built fresh per parse call and
/// never mutated afterwards.
#[derive(Debug, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ParsedTable {
    pub(crate) fn with_headers(headers: Vec<String>) -> Self {
        ParsedTable {
            headers,
            rows: Vec::new(),
        }
    }

    /// Convenience accessor: the cell under the first header matching
    /// `name`. Positional access via `rows` is authoritative when headers
    /// repeat.
    pub fn value(&self, row: usize, name: &str) -> Option<&CellValue> {
        let col = self.headers.iter().position(|h| h == name)?;
        self.rows.get(row)?.get(col)
    }

    /// The rows as serialized to consumers: one JSON object per row, cells
    /// keyed by header text. Lossy when headers repeat (last writer wins).
    pub fn rows_projection(&self) -> RowsProjection<'_> {
        RowsProjection(self)
    }
}

/// `true` when at least one cell carries a value. Rows failing this are
/// dropped from output by both readers.
pub(crate) fn row_has_data(cells: &[CellValue]) -> bool {
    cells.iter().any(|c| !c.is_null())
}

pub struct RowsProjection<'a>(&'a ParsedTable);

impl Serialize for RowsProjection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.rows.len()))?;
        for row in &self.0.rows {
            seq.serialize_element(&RowView {
                headers: &self.0.headers,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct RowView<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}

impl Serialize for ParsedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedTable", 2)?;
        state.serialize_field("headers", &self.headers)?;
        state.serialize_field("rows", &self.rows_projection())?;
        state.end()
    }
}
