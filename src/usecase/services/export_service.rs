use crate::domain::entities::dataset::Dataset;
use crate::error::{EditorError, Result};
use crate::infra::export::csv::write_dataset_csv;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "table_data.csv";
pub const CSV_MIME: &str = "text/csv";

/// Downloadable CSV produced from the full dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: Vec<u8>,
}

pub struct ExportService {
    file_name: String,
    phone_column: String,
}

impl ExportService {
    pub fn new(file_name: impl Into<String>, phone_column: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            phone_column: phone_column.into(),
        }
    }

    pub fn export(&self, dataset: &Dataset) -> Result<ExportArtifact> {
        if dataset.is_empty() {
            return Err(EditorError::EmptyDataset);
        }
        let contents = write_dataset_csv(dataset, &self.phone_column)?;
        Ok(ExportArtifact {
            file_name: self.file_name.clone(),
            mime: CSV_MIME,
            contents,
        })
    }
}
