use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfd::FileDialog;

use crate::usecase::services::export_service::ExportArtifact;

/// Native open dialog. The spreadsheet filter is a hint only, bytes are
/// always parsed as CSV.
pub fn pick_table_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("CSV", &["csv"])
        .add_filter("Spreadsheet", &["xlsx", "xls"])
        .pick_file()
}

pub fn read_table_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))
}

pub fn write_artifact(path: &Path, artifact: &ExportArtifact) -> Result<()> {
    fs::write(path, &artifact.contents)
        .with_context(|| format!("failed to write export: {}", path.display()))
}

/// Asks where to save the export. `Ok(None)` when the user cancels.
pub fn save_artifact(artifact: &ExportArtifact) -> Result<Option<PathBuf>> {
    let Some(path) = FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(artifact.file_name.as_str())
        .save_file()
    else {
        return Ok(None);
    };
    write_artifact(&path, artifact)?;
    Ok(Some(path))
}
