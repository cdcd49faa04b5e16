//! Response assembly for file-preview requests.
//!
//! A pure projection: the request-handling layer pairs a [`ParsedTable`]
//! with the stored file's metadata and serializes the result. Parse
//! failures are passed through untouched; nothing here can fail.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ingest::ParsedTable;

/// Metadata of a stored upload, supplied by the storage layer.
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub id: i64,
    pub name: String,
    pub file_type: String,
    pub size_bytes: u64,
}

/// Render a byte count for display: `0 Bytes`, then KB / MB steps rounded
/// to two decimals.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exp])
}

/// Envelope for a successful preview, in the shape the portal front end
/// consumes: the parsed table under `data`, file metadata under
/// `file_info`, and top-level `headers` / `rows` mirrors.
pub struct PreviewEnvelope<'a> {
    meta: &'a FileMeta,
    table: &'a ParsedTable,
}

impl<'a> PreviewEnvelope<'a> {
    pub fn new(meta: &'a FileMeta, table: &'a ParsedTable) -> Self {
        PreviewEnvelope { meta, table }
    }
}

impl Serialize for PreviewEnvelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct FileInfo<'a> {
            id: i64,
            name: &'a str,
            #[serde(rename = "type")]
            file_type: &'a str,
            size: String,
        }

        let mut state = serializer.serialize_struct("PreviewEnvelope", 6)?;
        state.serialize_field("success", &true)?;
        state.serialize_field("data", self.table)?;
        state.serialize_field(
            "file_info",
            &FileInfo {
                id: self.meta.id,
                name: &self.meta.name,
                file_type: &self.meta.file_type,
                size: human_size(self.meta.size_bytes),
            },
        )?;
        state.serialize_field("file_type", &self.meta.file_type)?;
        state.serialize_field("headers", &self.table.headers)?;
        state.serialize_field("rows", &self.table.rows_projection())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::CellValue;

    #[test]
    fn human_sizes_step_through_units() {
        assert_eq!(human_size(0), "0 Bytes");
        assert_eq!(human_size(500), "500 Bytes");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(10 * 1024 * 1024), "10 MB");
        // stays in MB even past the last unit boundary
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5120 MB");
    }

    #[test]
    fn envelope_mirrors_table_and_formats_metadata() {
        let table = ParsedTable {
            headers: vec!["Name".into(), "Score".into()],
            rows: vec![vec![CellValue::Text("Alice".into()), CellValue::Int(10)]],
        };
        let meta = FileMeta {
            id: 7,
            name: "scores.csv".into(),
            file_type: "csv".into(),
            size_bytes: 2048,
        };

        let json = serde_json::to_value(PreviewEnvelope::new(&meta, &table)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "data": {
                    "headers": ["Name", "Score"],
                    "rows": [{"Name": "Alice", "Score": 10}]
                },
                "file_info": {"id": 7, "name": "scores.csv", "type": "csv", "size": "2 KB"},
                "file_type": "csv",
                "headers": ["Name", "Score"],
                "rows": [{"Name": "Alice", "Score": 10}]
            })
        );
    }
}
