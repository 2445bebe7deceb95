use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::domain::entities::dataset::{Dataset, Row, Schema};
use crate::error::{EditorError, Result};
use crate::usecase::ports::table_io::{ParsedTable, TableParser};

/// Comma-delimited parser with a mandatory header row. Ragged records are
/// accepted: missing fields become empty, surplus fields are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableParser;

impl TableParser for CsvTableParser {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);
        let headers = reader.headers()?.clone();

        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(EditorError::MissingHeader);
        }

        let schema = Schema::from_headers(headers.iter());
        let header_len = schema.len();
        let mut rows = Vec::new();
        let mut dropped_fields = 0;
        for record in reader.records() {
            let record = record?;
            if record.len() > header_len {
                dropped_fields += record.len() - header_len;
            }
            let values = (0..header_len)
                .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
                .collect();
            rows.push(Row::new(values));
        }

        if dropped_fields > 0 {
            warn!(dropped_fields, "csv records wider than header, extra fields dropped");
        }
        debug!(columns = header_len, rows = rows.len(), "parsed csv");

        Ok(ParsedTable {
            dataset: Dataset::new(schema, rows),
            dropped_fields,
        })
    }
}
