use dioxus::prelude::*;

use crate::domain::entities::edit::CellKey;
use crate::ui::styles::{cell_input_style, cell_style, row_style, table_header_cell_style};
use crate::usecase::services::editor_service::PageView;

/// Renders one page. In edit mode cells become inputs and rows get checkboxes;
/// row checkbox events carry the page-relative index.
#[component]
pub fn DataTable(
    view: PageView,
    editing: bool,
    editing_cell: Option<CellKey>,
    editing_value: String,
    on_toggle_row: EventHandler<usize>,
    on_toggle_page: EventHandler<()>,
    on_focus_cell: EventHandler<(CellKey, String)>,
    on_input: EventHandler<String>,
    on_commit: EventHandler<()>,
) -> Element {
    let page_fully_selected = view.page_fully_selected;

    rsx! {
        table { style: "border-collapse: collapse; width: 100%;",
            thead {
                tr {
                    th { style: "{table_header_cell_style()}",
                        if editing {
                            input {
                                r#type: "checkbox",
                                checked: page_fully_selected,
                                onclick: move |_| on_toggle_page.call(()),
                            }
                        }
                    }
                    for column in view.columns.iter() {
                        th { style: "{table_header_cell_style()}", "{column}" }
                    }
                }
            }
            tbody {
                {view.rows.iter().enumerate().map(|(page_idx, row)| {
                    let row_idx = row.index;
                    let selected = row.selected;
                    rsx!(
                        tr {
                            key: "{row_idx}",
                            style: "{row_style(selected)}",
                            td { style: "padding: 6px 8px;",
                                if editing {
                                    input {
                                        r#type: "checkbox",
                                        checked: selected,
                                        onclick: move |_| on_toggle_row.call(page_idx),
                                    }
                                }
                            }
                            {row.cells.iter().map(|cell| {
                                let cell_key = CellKey {
                                    row_idx,
                                    column: cell.column.clone(),
                                };
                                let value = cell.value.clone();
                                let validity = cell.validity;
                                if editing {
                                    let shown = if editing_cell.as_ref() == Some(&cell_key) {
                                        editing_value.clone()
                                    } else {
                                        value.clone()
                                    };
                                    rsx!(
                                        td { style: "{cell_style(validity)}",
                                            input {
                                                style: "{cell_input_style(validity)}",
                                                value: "{shown}",
                                                onfocus: move |_| {
                                                    on_focus_cell.call((cell_key.clone(), value.clone()));
                                                },
                                                oninput: move |event| on_input.call(event.value()),
                                                onblur: move |_| on_commit.call(()),
                                            }
                                        }
                                    )
                                } else {
                                    rsx!(
                                        td { style: "{cell_style(validity)}", "{value}" }
                                    )
                                }
                            })}
                        }
                    )
                })}
            }
        }
    }
}
