use dioxus::prelude::*;

use crate::ui::styles::{danger_button_style, modal_box_style, modal_overlay_style};
use crate::usecase::services::confirm_gate::CONFIRM_DELETE_PROMPT;

/// Delete trigger plus its confirmation dialog. Open state and actions come
/// from the owner through props.
#[component]
pub fn ConfirmDelete(
    open: bool,
    selected_count: usize,
    on_request: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            style: "{danger_button_style()}",
            onclick: move |_| on_request.call(()),
            "Delete ({selected_count})"
        }

        if open {
            div {
                style: "{modal_overlay_style()}",
                div {
                    style: "{modal_box_style()}",
                    p { style: "padding: 16px 0; font-size: 20px;", "{CONFIRM_DELETE_PROMPT}" }
                    div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                        button {
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            style: "{danger_button_style()}",
                            onclick: move |_| on_confirm.call(()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
