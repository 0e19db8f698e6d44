use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{use_dashboard_state, DashboardView};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; AppNavbar writes it, keyed subtree remounts on change.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    // Held above the keyed subtree so a language switch keeps the selection.
    let dashboard = use_dashboard_state();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppNavbar {}
        div {
            key: "{lang_code()}",
            DashboardView { state: dashboard }
        }
    }
}
