//! Per-category time series derived from the dataset and the current selection.

use serde::Serialize;

use super::category::CategoryId;
use super::dataset::Dataset;
use super::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: CategoryId,
    pub points: Vec<SeriesPoint>,
}

impl CategorySeries {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }
}

/// One series per enabled category, in canonical category order, each holding
/// the dataset's points in year order. Empty when nothing is enabled.
pub fn build_series(dataset: &Dataset, selection: &SelectionState) -> Vec<CategorySeries> {
    selection
        .enabled_categories()
        .map(|category| CategorySeries {
            category,
            points: dataset
                .records()
                .iter()
                .map(|record| SeriesPoint {
                    year: record.year,
                    value: record.value(category),
                })
                .collect(),
        })
        .collect()
}
