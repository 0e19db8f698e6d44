//! Renderer-neutral description of the chart to draw.
//!
//! A [`ChartSpec`] is everything a renderer needs: x labels, one entry per
//! plotted series with its colours and values, the presentation mode, and the
//! fixed y-axis configuration. It serializes to JSON so a script-side charting
//! library could consume the same structure as the built-in SVG renderer.

use serde::Serialize;

use crate::core::category::CategoryId;
use crate::core::dataset::Dataset;
use crate::core::selection::ChartMode;
use crate::core::series::CategorySeries;

/// Fixed value-axis configuration: clamped range, tick spacing and unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub min: f64,
    pub max: f64,
    pub tick_step: f64,
    pub suffix: &'static str,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            tick_step: 10.0,
            suffix: "%",
        }
    }
}

impl AxisConfig {
    pub fn ticks(&self) -> Vec<f64> {
        if self.tick_step <= 0.0 || self.max <= self.min {
            return vec![self.min, self.max];
        }
        let steps = ((self.max - self.min) / self.tick_step).round() as usize;
        (0..=steps)
            .map(|i| self.min + self.tick_step * i as f64)
            .collect()
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub category: CategoryId,
    pub label: &'static str,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub mode: ChartMode,
    pub y_axis: AxisConfig,
}

impl ChartSpec {
    pub fn new(
        dataset: &Dataset,
        series: &[CategorySeries],
        mode: ChartMode,
        y_axis: AxisConfig,
    ) -> Self {
        let labels = dataset.years().map(|year| year.to_string()).collect();
        let series = series
            .iter()
            .map(|entry| {
                let colors = entry.category.colors();
                ChartSeries {
                    category: entry.category,
                    label: entry.category.label(),
                    fill: colors.fill,
                    stroke: colors.stroke,
                    values: entry.values().collect(),
                }
            })
            .collect();

        Self {
            labels,
            series,
            mode,
            y_axis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset;
    use crate::core::selection::SelectionState;
    use crate::core::series::build_series;
    use serde_json::json;

    #[test]
    fn default_axis_is_clamped_percentage() {
        let axis = AxisConfig::default();
        assert_eq!(axis.ticks().len(), 11);
        assert_eq!(axis.ticks().first(), Some(&0.0));
        assert_eq!(axis.ticks().last(), Some(&100.0));
        assert_eq!(axis.clamp(120.0), 100.0);
        assert_eq!(axis.clamp(-3.0), 0.0);
    }

    #[test]
    fn spec_carries_year_labels_and_colours() {
        let dataset = dataset::bundled();
        let mut selection = SelectionState::default();
        selection.toggle_category(CategoryId::Windows);
        let series = build_series(dataset, &selection);
        let spec = ChartSpec::new(dataset, &series, selection.mode(), AxisConfig::default());

        assert_eq!(spec.labels.len(), dataset.len());
        assert_eq!(spec.labels[0], "2001");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].label, "Linux");
        assert_eq!(spec.series[0].stroke, "rgba(255, 193, 7, 1)");
        assert_eq!(spec.series[1].values.last(), Some(&18.0));
    }

    #[test]
    fn json_shape_is_stable() {
        let dataset = dataset::bundled();
        let mut selection = SelectionState::default();
        selection.toggle_category(CategoryId::Linux);
        selection.toggle_category(CategoryId::Macos);
        selection.set_mode(ChartMode::Bar);
        let series = build_series(dataset, &selection);
        let spec = ChartSpec::new(dataset, &series, selection.mode(), AxisConfig::default());

        let value: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
        assert_eq!(value["mode"], json!("bar"));
        assert_eq!(
            value["yAxis"],
            json!({ "min": 0.0, "max": 100.0, "tickStep": 10.0, "suffix": "%" })
        );
        assert_eq!(value["series"][0]["category"], json!("windows"));
        assert_eq!(value["series"][0]["fill"], json!("rgba(0, 120, 212, 0.2)"));
        assert_eq!(value["series"][0]["values"][0], json!(90.0));
    }
}
