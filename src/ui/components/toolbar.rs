use dioxus::prelude::*;

use crate::domain::entities::edit::EditMode;
use crate::ui::styles::toolbar_style;

#[component]
pub fn Toolbar(
    file_uploaded: bool,
    mode: EditMode,
    can_export: bool,
    on_upload: EventHandler<()>,
    on_toggle_mode: EventHandler<()>,
    on_export: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { style: "{toolbar_style()}",
            button {
                onclick: move |_| on_upload.call(()),
                "Upload CSV"
            }
            if file_uploaded {
                button {
                    onclick: move |_| on_toggle_mode.call(()),
                    "{mode.toggle_label()}"
                }
            }
            if can_export {
                button {
                    onclick: move |_| on_export.call(()),
                    "Export CSV"
                }
            }
            {children}
        }
    }
}
