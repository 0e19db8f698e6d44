use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::{CategoryId, ChartMode, DashboardAction, SelectionState};
use crate::t;

/// Category checkboxes (any combination, including none) and the
/// line/bar radio pair.
#[component]
pub fn Controls(selection: SelectionState, on_action: EventHandler<DashboardAction>) -> Element {
    let systems = CategoryId::ALL.map(|id| {
        (
            id,
            selection.is_enabled(id),
            t!("controls-show-system", name = id.label()),
        )
    });
    let modes = ChartMode::ALL.map(|mode| {
        let label = match mode {
            ChartMode::Line => t!("mode-line"),
            ChartMode::Bar => t!("mode-bar"),
        };
        (mode, selection.mode() == mode, label)
    });

    rsx! {
        section { class: "card controls",
            h2 { class: "controls__title", {t!("controls-title")} }

            div { class: "controls__group",
                h3 { class: "controls__heading",
                    {t!("controls-systems")}
                    " "
                    span { class: "controls__hint", {t!("controls-systems-hint")} }
                }
                div { class: "controls__options",
                    for (id, checked, aria) in systems {
                        label {
                            key: "{id.key()}",
                            class: "controls__option controls__option--{id.css_modifier()}",
                            input {
                                r#type: "checkbox",
                                name: "category",
                                value: "{id.key()}",
                                checked,
                                aria_label: "{aria}",
                                onchange: move |_| on_action.call(DashboardAction::Toggle(id)),
                            }
                            span { class: "controls__swatch", background_color: id.colors().stroke }
                            span { class: "controls__label", "{id.label()} {id.icon()}" }
                        }
                    }
                }
            }

            div { class: "controls__group",
                h3 { class: "controls__heading",
                    {t!("controls-chart-type")}
                    " "
                    span { class: "controls__hint", {t!("controls-chart-type-hint")} }
                }
                div { class: "controls__options",
                    for (mode, checked, label) in modes {
                        label {
                            key: "{mode.as_str()}",
                            class: "controls__option",
                            input {
                                r#type: "radio",
                                name: "chart-mode",
                                value: "{mode.as_str()}",
                                checked,
                                onchange: move |evt: FormEvent| match evt.value().parse::<ChartMode>() {
                                    Ok(mode) => on_action.call(DashboardAction::SetMode(mode)),
                                    Err(err) => warn!(%err, "ignoring chart mode input"),
                                },
                            }
                            span { class: "controls__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
