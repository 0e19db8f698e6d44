//! Latest / earliest / delta figures for the summary cards.

use serde::Serialize;

use super::category::CategoryId;
use super::dataset::Dataset;
use super::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Favorable,
    Unfavorable,
}

impl Trend {
    /// Zero counts as favorable.
    pub fn of(delta: f64) -> Self {
        if delta >= 0.0 {
            Trend::Favorable
        } else {
            Trend::Unfavorable
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Favorable => "stats-card__delta--up",
            Trend::Unfavorable => "stats-card__delta--down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub category: CategoryId,
    pub latest: f64,
    pub earliest: f64,
    pub delta: f64,
}

impl SummaryEntry {
    pub fn trend(&self) -> Trend {
        Trend::of(self.delta)
    }
}

/// One entry per enabled category, in canonical order. `latest` comes from the
/// last record, `earliest` from the first; nothing is rounded here.
pub fn compute_summary(dataset: &Dataset, selection: &SelectionState) -> Vec<SummaryEntry> {
    let first = dataset.first();
    let last = dataset.last();

    selection
        .enabled_categories()
        .map(|category| {
            let latest = last.value(category);
            let earliest = first.value(category);
            SummaryEntry {
                category,
                latest,
                earliest,
                delta: latest - earliest,
            }
        })
        .collect()
}
