use tracing::{debug, info, warn};

use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::edit::{EditMode, SelectionSet};
use crate::domain::entities::page::{PageDirection, Pagination, DEFAULT_PAGE_SIZE};
use crate::domain::validation::{CellValidity, ColumnRules};
use crate::error::{EditorError, Result};
use crate::usecase::ports::table_io::TableParser;
use crate::usecase::services::export_service::{
    ExportArtifact, ExportService, DEFAULT_EXPORT_FILE_NAME,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    pub page_size: usize,
    pub rules: ColumnRules,
    pub export_file_name: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            rules: ColumnRules::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub column: String,
    pub value: String,
    pub validity: CellValidity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Index in the full dataset.
    pub index: usize,
    pub selected: bool,
    pub cells: Vec<CellView>,
}

/// Owned snapshot of the current page, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub page_fully_selected: bool,
    pub invalid_cells: usize,
}

/// In-memory table the user is editing: dataset, selection, edit mode and page cursor.
pub struct TableEditor {
    rules: ColumnRules,
    exporter: ExportService,
    dataset: Dataset,
    selection: SelectionSet,
    mode: EditMode,
    pagination: Pagination,
    file_uploaded: bool,
    error: Option<String>,
}

impl Default for TableEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl TableEditor {
    pub fn new(settings: EditorSettings) -> Self {
        let exporter = ExportService::new(
            settings.export_file_name,
            settings.rules.phone_column.clone(),
        );
        Self {
            rules: settings.rules,
            exporter,
            dataset: Dataset::default(),
            selection: SelectionSet::default(),
            mode: EditMode::default(),
            pagination: Pagination::new(settings.page_size),
            file_uploaded: false,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.dataset.len())
    }

    pub fn file_uploaded(&self) -> bool {
        self.file_uploaded
    }

    /// Message of the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the delete trigger should be offered.
    pub fn can_delete(&self) -> bool {
        self.is_editing() && !self.selection.is_empty()
    }

    /// Replaces the dataset with the parsed file. On failure the current
    /// dataset stays and the message is kept for display.
    pub fn load(&mut self, parser: &dyn TableParser, bytes: &[u8]) -> Result<usize> {
        let parsed = match parser.parse(bytes) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(error = %err, "failed to load table");
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        self.dataset = parsed.dataset;
        self.selection.clear();
        self.file_uploaded = true;
        self.error = None;
        self.pagination.clamp(self.dataset.len());
        info!(
            rows = self.dataset.len(),
            columns = self.dataset.columns().len(),
            dropped_fields = parsed.dropped_fields,
            "table loaded"
        );
        Ok(self.dataset.len())
    }

    pub fn edit_cell(&mut self, row_idx: usize, column: &str, text: String) -> Result<()> {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        self.dataset.set_cell(row_idx, column, text)?;
        debug!(row_idx, column, "cell edited");
        Ok(())
    }

    /// Flips between viewing and editing. Leaving edit mode drops the selection;
    /// edits were already applied on blur so nothing else is committed.
    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        if self.mode == EditMode::Viewing {
            self.selection.clear();
        }
        info!(mode = ?self.mode, "edit mode toggled");
        self.mode
    }

    /// Toggles the row at `page_idx` on the current page. Returns whether it is
    /// selected afterwards.
    pub fn toggle_row_selection(&mut self, page_idx: usize) -> Result<bool> {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        let range = self.pagination.range(self.dataset.len());
        let row_idx = range.start + page_idx;
        if !range.contains(&row_idx) {
            return Err(EditorError::RowOutOfRange {
                index: row_idx,
                count: self.dataset.len(),
            });
        }
        Ok(self.selection.toggle(row_idx))
    }

    /// Selects every row on the current page, or clears them if all were selected.
    pub fn toggle_page_selection(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        let range = self.pagination.range(self.dataset.len());
        if self.page_fully_selected() {
            range.for_each(|row_idx| self.selection.remove(row_idx));
        } else {
            range.for_each(|row_idx| self.selection.insert(row_idx));
        }
        Ok(())
    }

    /// Removes the selected rows in one pass and clears the selection.
    /// Callers go through the confirmation gate.
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.dataset.remove_rows(self.selection.indices());
        self.selection.clear();
        self.pagination.clamp(self.dataset.len());
        info!(removed, remaining = self.dataset.len(), "selected rows deleted");
        removed
    }

    pub fn paginate(&mut self, direction: PageDirection) -> bool {
        self.pagination.step(direction, self.dataset.len())
    }

    pub fn export_csv(&self) -> Result<ExportArtifact> {
        let artifact = self.exporter.export(&self.dataset)?;
        info!(
            rows = self.dataset.len(),
            bytes = artifact.contents.len(),
            file_name = %artifact.file_name,
            mime = artifact.mime,
            "table exported"
        );
        Ok(artifact)
    }

    pub fn validate(&self, column: &str, value: &str) -> CellValidity {
        self.rules.validate(column, value)
    }

    pub fn invalid_cell_count(&self) -> usize {
        let columns = self.dataset.columns();
        self.dataset
            .rows()
            .iter()
            .flat_map(|row| columns.iter().zip(row.values()))
            .filter(|(column, value)| self.validate(column, value).is_invalid())
            .count()
    }

    fn page_fully_selected(&self) -> bool {
        let mut range = self.pagination.range(self.dataset.len());
        !range.is_empty() && range.all(|row_idx| self.selection.contains(row_idx))
    }

    pub fn page_view(&self) -> PageView {
        let columns = self.dataset.columns().to_vec();
        let range = self.pagination.range(self.dataset.len());
        let rows = self.dataset.rows()[range.clone()]
            .iter()
            .zip(range)
            .map(|(row, index)| RowView {
                index,
                selected: self.selection.contains(index),
                cells: columns
                    .iter()
                    .zip(row.values())
                    .map(|(column, value)| CellView {
                        column: column.clone(),
                        value: value.clone(),
                        validity: self.validate(column, value),
                    })
                    .collect(),
            })
            .collect();
        let page = self.page();
        let total_pages = self.total_pages();

        PageView {
            columns,
            rows,
            page,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
            page_fully_selected: self.page_fully_selected(),
            invalid_cells: self.invalid_cell_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::import::csv::CsvTableParser;

    fn numbered_csv(rows: usize) -> String {
        let mut text = String::from("Name,City\n");
        for idx in 0..rows {
            text.push_str(&format!("Row{idx},Town\n"));
        }
        text
    }

    fn loaded(rows: usize) -> TableEditor {
        let mut editor = TableEditor::default();
        editor
            .load(&CsvTableParser, numbered_csv(rows).as_bytes())
            .expect("load should succeed");
        editor
    }

    fn names(editor: &TableEditor) -> Vec<String> {
        (0..editor.dataset().len())
            .filter_map(|idx| editor.dataset().cell(idx, "Name").map(str::to_string))
            .collect()
    }

    #[test]
    fn load_sets_uploaded_flag_and_clears_error() {
        let mut editor = TableEditor::default();
        assert!(!editor.file_uploaded());
        assert!(editor.load(&CsvTableParser, b"").is_err());
        assert!(editor.error().is_some());

        editor
            .load(&CsvTableParser, b"Name\nAnn\n")
            .expect("load should succeed");

        assert!(editor.file_uploaded());
        assert_eq!(editor.error(), None);
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut editor = loaded(3);
        let result = editor.load(&CsvTableParser, b"Name\n\xff\n");

        assert!(result.is_err());
        assert_eq!(editor.dataset().len(), 3);
        assert!(editor.error().expect("error should be kept").contains("CSV"));
    }

    #[test]
    fn edit_requires_edit_mode() {
        let mut editor = loaded(2);
        let result = editor.edit_cell(0, "Name", "Zed".to_string());
        assert!(matches!(result, Err(EditorError::NotEditing)));

        editor.toggle_edit_mode();
        editor
            .edit_cell(0, "Name", "Zed".to_string())
            .expect("edit should succeed");
        assert_eq!(editor.dataset().cell(0, "Name"), Some("Zed"));
    }

    #[test]
    fn edit_is_idempotent_and_verbatim() {
        let mut editor = loaded(2);
        editor.toggle_edit_mode();
        editor
            .edit_cell(1, "City", "  Spaced ".to_string())
            .expect("edit should succeed");
        let once = editor.dataset().clone();
        editor
            .edit_cell(1, "City", "  Spaced ".to_string())
            .expect("edit should succeed");

        assert_eq!(editor.dataset(), &once);
        assert_eq!(editor.dataset().cell(1, "City"), Some("  Spaced "));
    }

    #[test]
    fn delete_selected_removes_exact_rows_in_order() {
        let mut editor = loaded(4);
        editor.toggle_edit_mode();
        editor.toggle_row_selection(1).expect("row 1 selectable");
        editor.toggle_row_selection(3).expect("row 3 selectable");

        let removed = editor.delete_selected();

        assert_eq!(removed, 2);
        assert_eq!(names(&editor), ["Row0", "Row2"]);
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn selection_uses_absolute_indices() {
        let mut editor = loaded(20);
        editor.toggle_edit_mode();
        editor.paginate(PageDirection::Next);
        editor.toggle_row_selection(0).expect("row selectable");

        assert!(editor.selection().contains(8));
    }

    #[test]
    fn selection_outside_page_is_rejected() {
        let mut editor = loaded(20);
        editor.toggle_edit_mode();
        editor.paginate(PageDirection::Next);
        editor.paginate(PageDirection::Next);

        let result = editor.toggle_row_selection(4);
        assert!(matches!(
            result,
            Err(EditorError::RowOutOfRange { index: 20, count: 20 })
        ));
    }

    #[test]
    fn selection_disabled_while_viewing_and_cleared_on_save() {
        let mut editor = loaded(3);
        assert!(matches!(
            editor.toggle_row_selection(0),
            Err(EditorError::NotEditing)
        ));

        editor.toggle_edit_mode();
        editor.toggle_row_selection(0).expect("row selectable");
        assert!(editor.can_delete());

        assert_eq!(editor.toggle_edit_mode(), EditMode::Viewing);
        assert!(editor.selection().is_empty());
        assert!(!editor.can_delete());
    }

    #[test]
    fn page_selection_toggles_whole_page() {
        let mut editor = loaded(10);
        editor.toggle_edit_mode();
        editor.toggle_row_selection(2).expect("row selectable");

        editor.toggle_page_selection().expect("page selectable");
        assert_eq!(editor.selection().len(), 8);
        assert!(editor.page_view().page_fully_selected);

        editor.toggle_page_selection().expect("page selectable");
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn pagination_views_match_page_bounds() {
        let mut editor = loaded(20);
        let first = editor.page_view();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.first().map(|row| row.index), Some(0));
        assert_eq!(first.rows.last().map(|row| row.index), Some(7));
        assert!(!first.has_previous);

        editor.paginate(PageDirection::Next);
        editor.paginate(PageDirection::Next);
        let last = editor.page_view();
        assert_eq!(last.rows.len(), 4);
        assert_eq!(last.rows.first().map(|row| row.index), Some(16));
        assert!(!last.has_next);

        assert!(!editor.paginate(PageDirection::Next));
        assert_eq!(editor.page(), 3);
    }

    #[test]
    fn delete_clamps_cursor_when_pages_disappear() {
        let mut editor = loaded(17);
        editor.paginate(PageDirection::Next);
        editor.paginate(PageDirection::Next);
        assert_eq!(editor.page(), 3);

        editor.toggle_edit_mode();
        editor.toggle_row_selection(0).expect("row selectable");
        editor.delete_selected();

        assert_eq!(editor.total_pages(), 2);
        assert_eq!(editor.page(), 2);
    }

    #[test]
    fn load_keeps_cursor_but_clamps_it() {
        let mut editor = loaded(20);
        editor.paginate(PageDirection::Next);
        editor
            .load(&CsvTableParser, numbered_csv(30).as_bytes())
            .expect("load should succeed");
        assert_eq!(editor.page(), 2);

        editor
            .load(&CsvTableParser, numbered_csv(3).as_bytes())
            .expect("load should succeed");
        assert_eq!(editor.page(), 1);
    }

    #[test]
    fn export_of_empty_table_is_rejected() {
        let mut editor = loaded(1);
        assert!(matches!(
            TableEditor::default().export_csv(),
            Err(EditorError::EmptyDataset)
        ));

        editor.toggle_edit_mode();
        editor.toggle_row_selection(0).expect("row selectable");
        editor.delete_selected();
        assert!(matches!(editor.export_csv(), Err(EditorError::EmptyDataset)));
    }

    #[test]
    fn export_uses_configured_file_name() {
        let mut editor = TableEditor::new(EditorSettings {
            export_file_name: "people.csv".to_string(),
            ..EditorSettings::default()
        });
        editor
            .load(&CsvTableParser, b"Name\nAnn\n")
            .expect("load should succeed");

        let artifact = editor.export_csv().expect("export should succeed");
        assert_eq!(artifact.file_name, "people.csv");
        assert_eq!(artifact.mime, "text/csv");
    }

    #[test]
    fn custom_page_size_applies() {
        let mut editor = TableEditor::new(EditorSettings {
            page_size: 5,
            ..EditorSettings::default()
        });
        editor
            .load(&CsvTableParser, numbered_csv(12).as_bytes())
            .expect("load should succeed");
        assert_eq!(editor.total_pages(), 3);
        assert_eq!(editor.page_view().rows.len(), 5);
    }
}
