use thiserror::Error;

/// Errors raised by table editing, loading and export.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Cells can only be changed in edit mode")]
    NotEditing,

    #[error("Row index out of bounds: {index} (table has {count} rows)")]
    RowOutOfRange { index: usize, count: usize },

    #[error("Column not found: {name}")]
    UnknownColumn { name: String },

    #[error("Nothing to export: the table has no rows")]
    EmptyDataset,

    #[error("CSV header row is required")]
    MissingHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
