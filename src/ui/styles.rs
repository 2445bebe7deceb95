use crate::domain::validation::CellValidity;

pub const INVALID_COLOR: &str = "red";

pub fn root_container_style() -> &'static str {
    "min-height: 100vh; padding: 16px; box-sizing: border-box; display: flex; flex-direction: column; gap: 12px; background: #f4f5f7; font-family: sans-serif;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;"
}

pub fn table_container_style() -> &'static str {
    "overflow-x: auto; background: #1d232a; color: #fff; border-radius: 10px; padding-bottom: 8px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; background: #1d232a; border-bottom: 1px solid #444; padding: 8px; text-align: left;"
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #2b3a55;"
    } else {
        ""
    }
}

fn validity_color(validity: CellValidity) -> &'static str {
    if validity.is_invalid() {
        INVALID_COLOR
    } else {
        "inherit"
    }
}

pub fn cell_style(validity: CellValidity) -> String {
    format!(
        "border-bottom: 1px solid #333; padding: 6px 8px; color: {};",
        validity_color(validity)
    )
}

pub fn cell_input_style(validity: CellValidity) -> String {
    format!(
        "width: 100%; background: transparent; border: 1px dashed #666; padding: 2px 4px; color: {};",
        validity_color(validity)
    )
}

pub fn danger_button_style() -> &'static str {
    "background: #dc2626; color: #eee; border: none; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
}

pub fn modal_overlay_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;"
}

pub fn modal_box_style() -> &'static str {
    "background: #1d232a; color: #eee; padding: 16px; border-radius: 10px; min-width: 280px;"
}
