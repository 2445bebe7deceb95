use crate::domain::entities::dataset::Dataset;
use crate::error::EditorError;

/// Outcome of parsing one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub dataset: Dataset,
    /// Fields beyond the header width that were dropped.
    pub dropped_fields: usize,
}

/// Turns the raw bytes of an uploaded file into a dataset keyed by its header row.
pub trait TableParser {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedTable, EditorError>;
}
