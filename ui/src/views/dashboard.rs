use dioxus::prelude::*;

use crate::chart::{self, ChartCaptions};
use crate::components::{Controls, EmptyState, StatsCards};
use crate::core::{dataset, Dashboard, DashboardAction, Dataset, Frame};
use crate::t;

/// Session state of the dashboard: the composition root plus the frame it
/// last produced.
///
/// Create it with [`use_dashboard_state`] above any subtree that is keyed by
/// language, so a remount of [`DashboardView`] keeps the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    dashboard: Dashboard<'static>,
    frame: Frame,
}

impl DashboardState {
    pub fn new(dataset: &'static Dataset) -> Self {
        let dashboard = Dashboard::new(dataset);
        let frame = dashboard.frame();
        Self { dashboard, frame }
    }

    /// Dispatch one action and keep the recomputed frame.
    pub fn apply(&mut self, action: DashboardAction) -> &Frame {
        self.frame = self.dashboard.dispatch(action);
        &self.frame
    }

    pub fn dashboard(&self) -> &Dashboard<'static> {
        &self.dashboard
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

/// Session-long dashboard state over the bundled dataset.
pub fn use_dashboard_state() -> Signal<DashboardState> {
    use_signal(|| DashboardState::new(dataset::bundled()))
}

/// Dashboard page. Each control event dispatches an action into `state`; the
/// stored frame drives the render.
#[component]
pub fn DashboardView(state: Signal<DashboardState>) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut state = state;
    let on_action = move |action: DashboardAction| {
        state.with_mut(|current| {
            current.apply(action);
        });
    };

    let (selection, (first, last), frame) = {
        let current = state.read();
        let dashboard = current.dashboard();
        (
            *dashboard.selection(),
            dashboard.dataset().span(),
            current.frame().clone(),
        )
    };
    let (first_label, last_label) = (first.to_string(), last.to_string());

    let body = match frame {
        Frame::Empty => rsx! {
            div { class: "card dashboard__chart", EmptyState {} }
        },
        Frame::Populated { summary, chart } => {
            let captions = ChartCaptions {
                title: t!("chart-title", first = first_label.clone(), last = last_label.clone()),
                x_axis: t!("chart-axis-x"),
                y_axis: t!("chart-axis-y"),
            };
            rsx! {
                StatsCards { summary, span: (first, last) }
                div { class: "card dashboard__chart", {chart::render(&chart, &captions)} }
            }
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                h1 { "📊 " {t!("app-title")} }
                p { {t!("app-subtitle", first = first_label.clone(), last = last_label.clone())} }
            }

            Controls { selection, on_action }

            {body}

            footer { class: "card dashboard__footer",
                p { class: "dashboard__footer-title",
                    {t!("footer-title", first = first_label.clone(), last = last_label.clone())}
                }
                p { {t!("footer-built-with")} }
                p { class: "dashboard__footer-notes", {t!("footer-notes")} }
            }
        }
    }
}
