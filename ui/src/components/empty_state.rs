use dioxus::prelude::*;

use crate::t;

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state__icon", aria_hidden: "true", "📈" }
            h3 { class: "empty-state__title", {t!("empty-title")} }
            p { class: "empty-state__body", {t!("empty-body")} }
        }
    }
}
