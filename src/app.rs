use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::EditorConfig;
use crate::domain::entities::edit::EditMode;
use crate::infra::import::csv::CsvTableParser;
use crate::platform::desktop::files::{pick_table_file, read_table_file, save_artifact};
use crate::ui::components::confirm_dialog::ConfirmDelete;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::pager::Pager;
use crate::ui::components::toolbar::Toolbar;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{root_container_style, table_container_style};

#[component]
pub fn App() -> Element {
    let config = use_context::<EditorConfig>();
    let AppState {
        mut editor,
        mut gate,
        mut status,
        mut editing_cell,
        mut editing_value,
    } = AppState::new(config.editor_settings());

    let (view, mode, file_uploaded, can_delete, selected_count, load_error) = {
        let snapshot = editor.read();
        (
            snapshot.page_view(),
            snapshot.mode(),
            snapshot.file_uploaded(),
            snapshot.can_delete(),
            snapshot.selection().len(),
            snapshot.error().map(str::to_string),
        )
    };
    let has_rows = !view.rows.is_empty();
    let invalid_cells = view.invalid_cells;

    rsx! {
        div { style: "{root_container_style()}",
            Toolbar {
                file_uploaded,
                mode,
                can_export: has_rows,
                on_upload: move |_| {
                    let Some(file_path) = pick_table_file() else {
                        status.set("Upload cancelled".to_string());
                        return;
                    };
                    let result = read_table_file(&file_path).and_then(|bytes| {
                        editor
                            .write()
                            .load(&CsvTableParser, &bytes)
                            .map_err(anyhow::Error::from)
                    });
                    match result {
                        Ok(row_count) => {
                            info!(path = %file_path.display(), row_count, "file uploaded");
                            status.set(format!("Loaded {row_count} rows from {}", file_path.display()));
                        }
                        Err(err) => {
                            warn!(path = %file_path.display(), error = %err, "upload failed");
                            status.set(format!("Upload failed: {err}"));
                        }
                    }
                    editing_cell.set(None);
                    editing_value.set(String::new());
                    gate.write().cancel();
                },
                on_toggle_mode: move |_| {
                    let mode = editor.write().toggle_edit_mode();
                    gate.write().close_unless_editing(&editor.read());
                    if mode == EditMode::Viewing {
                        editing_cell.set(None);
                        editing_value.set(String::new());
                        status.set("Changes saved".to_string());
                    } else {
                        status.set("Editing".to_string());
                    }
                },
                on_export: move |_| {
                    let exported = editor.read().export_csv();
                    let artifact = match exported {
                        Ok(artifact) => artifact,
                        Err(err) => {
                            status.set(format!("Export failed: {err}"));
                            return;
                        }
                    };
                    match save_artifact(&artifact) {
                        Ok(Some(path)) => {
                            status.set(format!("Exported to {}", path.display()));
                        }
                        Ok(None) => status.set("Export cancelled".to_string()),
                        Err(err) => {
                            warn!(error = %err, "export failed");
                            status.set(format!("Export failed: {err}"));
                        }
                    }
                },
                if can_delete {
                    ConfirmDelete {
                        open: gate.read().is_open(),
                        selected_count,
                        on_request: move |_| {
                            let opened = gate.write().request(&editor.read());
                            if !opened {
                                status.set("Select rows to delete first".to_string());
                            }
                        },
                        on_cancel: move |_| gate.write().cancel(),
                        on_confirm: move |_| {
                            let removed = gate.write().confirm(&mut editor.write());
                            status.set(format!("Deleted {removed} rows"));
                        },
                    }
                }
            }

            span { style: "color: #555;",
                "{status}"
                if invalid_cells > 0 {
                    " · {invalid_cells} invalid cells"
                }
            }

            if has_rows {
                div { style: "{table_container_style()}",
                    DataTable {
                        view: view.clone(),
                        editing: mode == EditMode::Editing,
                        editing_cell: editing_cell(),
                        editing_value: editing_value(),
                        on_toggle_row: move |page_idx| {
                            if let Err(err) = editor.write().toggle_row_selection(page_idx) {
                                status.set(format!("Selection failed: {err}"));
                            }
                        },
                        on_toggle_page: move |_| {
                            if let Err(err) = editor.write().toggle_page_selection() {
                                status.set(format!("Selection failed: {err}"));
                            }
                        },
                        on_focus_cell: move |(cell_key, value)| {
                            editing_cell.set(Some(cell_key));
                            editing_value.set(value);
                        },
                        on_input: move |value| editing_value.set(value),
                        on_commit: move |_| {
                            let Some(cell_key) = editing_cell() else {
                                return;
                            };
                            let text = editing_value();
                            let edited = editor.write().edit_cell(cell_key.row_idx, &cell_key.column, text);
                            if let Err(err) = edited {
                                status.set(format!("Edit failed: {err}"));
                            }
                            editing_cell.set(None);
                            editing_value.set(String::new());
                        },
                    }
                    Pager {
                        page: view.page,
                        total_pages: view.total_pages,
                        has_previous: view.has_previous,
                        has_next: view.has_next,
                        on_page: move |direction| {
                            editor.write().paginate(direction);
                        },
                    }
                }
            }

            if let Some(message) = load_error {
                div { style: "color: red;", "{message}" }
            }
        }
    }
}
