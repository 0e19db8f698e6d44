use dioxus::prelude::*;

use crate::core::format::{format_change, format_percent};
use crate::core::SummaryEntry;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
struct CardView {
    key: &'static str,
    modifier: &'static str,
    label: &'static str,
    icon: &'static str,
    latest: String,
    latest_tooltip: String,
    since: String,
    change: String,
    change_class: &'static str,
    change_tooltip: String,
}

/// One card per summary entry: latest share and signed change since the
/// first year. `span` is `(first_year, last_year)` of the dataset.
#[component]
pub fn StatsCards(summary: Vec<SummaryEntry>, span: (i32, i32)) -> Element {
    let (first, last) = (span.0.to_string(), span.1.to_string());

    let cards: Vec<CardView> = summary
        .iter()
        .map(|entry| {
            let id = entry.category;
            CardView {
                key: id.key(),
                modifier: id.css_modifier(),
                label: id.label(),
                icon: id.icon(),
                latest: format_percent(entry.latest),
                latest_tooltip: t!("stats-latest-tooltip", year = last.clone()),
                since: t!("stats-change-since", year = first.clone()),
                change: format_change(entry.delta),
                change_class: entry.trend().css_class(),
                change_tooltip: t!(
                    "stats-change-tooltip",
                    earliest = format_percent(entry.earliest),
                    first = first.clone(),
                    latest = format_percent(entry.latest),
                    last = last.clone()
                ),
            }
        })
        .collect();

    rsx! {
        section { class: "stats",
            for card in cards {
                div { key: "{card.key}", class: "stats-card stats-card--{card.modifier}",
                    div { class: "stats-card__body",
                        h3 { class: "stats-card__label", "{card.label}" }
                        p { class: "stats-card__value", title: "{card.latest_tooltip}", "{card.latest}" }
                        p { class: "stats-card__change",
                            "{card.since}"
                            span {
                                class: "stats-card__delta {card.change_class}",
                                title: "{card.change_tooltip}",
                                "{card.change}"
                            }
                        }
                    }
                    div { class: "stats-card__icon", title: "{card.label}", "{card.icon}" }
                }
            }
        }
    }
}
