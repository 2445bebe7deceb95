use dioxus::prelude::*;

use crate::domain::entities::page::PageDirection;

#[component]
pub fn Pager(
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    on_page: EventHandler<PageDirection>,
) -> Element {
    rsx! {
        div { style: "display: flex; gap: 8px; align-items: center; padding: 8px;",
            button {
                disabled: !has_previous,
                onclick: move |_| on_page.call(PageDirection::Previous),
                "Previous"
            }
            span { "Page {page} of {total_pages}" }
            button {
                disabled: !has_next,
                onclick: move |_| on_page.call(PageDirection::Next),
                "Next"
            }
        }
    }
}
