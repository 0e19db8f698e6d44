//! Plot geometry for the SVG renderer.
//!
//! Pure functions from a [`ChartSpec`] to coordinates in a fixed viewBox, so
//! the component only has to emit elements.

use crate::core::category::CategoryId;
use crate::core::format;
use crate::core::selection::ChartMode;

use super::spec::{AxisConfig, ChartSpec};

/// Share of a year band occupied by its bar group.
const GROUP_FRACTION: f64 = 0.8;
/// Share of a bar slot filled by the bar itself.
const BAR_FRACTION: f64 = 0.9;
/// Minimum horizontal room per x label before labels get thinned.
const MIN_LABEL_SPACING: f64 = 34.0;
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_CHAR_WIDTH: f64 = 7.0;
const LEGEND_GAP: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 420.0,
            margin_top: 64.0,
            margin_right: 24.0,
            margin_bottom: 56.0,
            margin_left: 64.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub category: CategoryId,
    pub stroke: &'static str,
    pub fill: &'static str,
    pub points: Vec<(f64, f64)>,
    pub values: Vec<f64>,
}

impl LinePath {
    /// `points` attribute for an SVG polyline.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub category: CategoryId,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub year: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub category: CategoryId,
    pub label: &'static str,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub x: f64,
}

impl PlotLayout {
    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Vertical position of `value`, clamped to the axis range.
    pub fn y_for(&self, value: f64, axis: &AxisConfig) -> f64 {
        let span = axis.max - axis.min;
        if span <= 0.0 {
            return self.bottom();
        }
        let ratio = (axis.clamp(value) - axis.min) / span;
        self.bottom() - ratio * self.plot_height()
    }

    /// Horizontal position of the `index`-th of `count` x slots. Lines run
    /// edge to edge; bars sit in the middle of equal bands.
    pub fn x_for(&self, index: usize, count: usize, mode: ChartMode) -> f64 {
        if count == 0 {
            return self.left();
        }
        match mode {
            ChartMode::Line if count == 1 => self.left() + self.plot_width() / 2.0,
            ChartMode::Line => {
                self.left() + self.plot_width() * index as f64 / (count - 1) as f64
            }
            ChartMode::Bar => {
                let band = self.plot_width() / count as f64;
                self.left() + band * (index as f64 + 0.5)
            }
        }
    }

    pub fn y_ticks(&self, axis: &AxisConfig) -> Vec<Tick> {
        axis.ticks()
            .into_iter()
            .map(|value| Tick {
                position: self.y_for(value, axis),
                label: format::format_tick(value, axis.suffix),
            })
            .collect()
    }

    /// Year labels, thinned to every n-th when the plot is too narrow.
    pub fn x_ticks(&self, spec: &ChartSpec) -> Vec<Tick> {
        let count = spec.labels.len();
        if count == 0 {
            return Vec::new();
        }
        let spacing = self.plot_width() / count as f64;
        let stride = (MIN_LABEL_SPACING / spacing).ceil().max(1.0) as usize;

        spec.labels
            .iter()
            .enumerate()
            .filter(|(index, _)| index % stride == 0)
            .map(|(index, label)| Tick {
                position: self.x_for(index, count, spec.mode),
                label: label.clone(),
            })
            .collect()
    }

    pub fn line_paths(&self, spec: &ChartSpec) -> Vec<LinePath> {
        let count = spec.labels.len();
        spec.series
            .iter()
            .map(|series| LinePath {
                category: series.category,
                stroke: series.stroke,
                fill: series.fill,
                points: series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| {
                        (
                            self.x_for(index, count, ChartMode::Line),
                            self.y_for(value, &spec.y_axis),
                        )
                    })
                    .collect(),
                values: series.values.clone(),
            })
            .collect()
    }

    /// Bars grouped per year; within a group, series keep their spec order.
    pub fn bars(&self, spec: &ChartSpec) -> Vec<BarRect> {
        let count = spec.labels.len();
        let per_group = spec.series.len();
        if count == 0 || per_group == 0 {
            return Vec::new();
        }

        let band = self.plot_width() / count as f64;
        let group = band * GROUP_FRACTION;
        let slot = group / per_group as f64;
        let width = slot * BAR_FRACTION;

        let mut rects = Vec::with_capacity(count * per_group);
        for (index, year) in spec.labels.iter().enumerate() {
            let group_left = self.x_for(index, count, ChartMode::Bar) - group / 2.0;
            for (position, series) in spec.series.iter().enumerate() {
                let Some(&value) = series.values.get(index) else {
                    continue;
                };
                let y = self.y_for(value, &spec.y_axis);
                rects.push(BarRect {
                    category: series.category,
                    fill: series.fill,
                    stroke: series.stroke,
                    x: group_left + slot * position as f64 + (slot - width) / 2.0,
                    y,
                    width,
                    height: self.bottom() - y,
                    year: year.clone(),
                    value,
                });
            }
        }
        rects
    }

    /// Legend entries centred above the plot.
    pub fn legend(&self, spec: &ChartSpec) -> Vec<LegendItem> {
        let widths: Vec<f64> = spec
            .series
            .iter()
            .map(|series| LEGEND_SWATCH + 6.0 + series.label.len() as f64 * LEGEND_CHAR_WIDTH)
            .collect();
        let total = widths.iter().sum::<f64>()
            + LEGEND_GAP * widths.len().saturating_sub(1) as f64;

        let mut x = (self.width - total) / 2.0;
        spec.series
            .iter()
            .zip(widths)
            .map(|(series, width)| {
                let item = LegendItem {
                    category: series.category,
                    label: series.label,
                    fill: series.fill,
                    stroke: series.stroke,
                    x,
                };
                x += width + LEGEND_GAP;
                item
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset;
    use crate::core::selection::SelectionState;
    use crate::core::series::build_series;

    fn spec_for(selection: &SelectionState) -> ChartSpec {
        let dataset = dataset::bundled();
        let series = build_series(dataset, selection);
        ChartSpec::new(dataset, &series, selection.mode(), AxisConfig::default())
    }

    #[test]
    fn y_axis_maps_range_onto_plot() {
        let layout = PlotLayout::default();
        let axis = AxisConfig::default();
        assert_eq!(layout.y_for(100.0, &axis), layout.top());
        assert_eq!(layout.y_for(0.0, &axis), layout.bottom());
        assert_eq!(layout.y_for(150.0, &axis), layout.top());
        let mid = layout.y_for(50.0, &axis);
        assert!((mid - (layout.top() + layout.plot_height() / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn line_points_span_plot_edges() {
        let layout = PlotLayout::default();
        let spec = spec_for(&SelectionState::default());
        let paths = layout.line_paths(&spec);

        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert_eq!(path.points.len(), spec.labels.len());
            assert_eq!(path.points.first().unwrap().0, layout.left());
            assert!((path.points.last().unwrap().0 - layout.right()).abs() < 1e-9);
        }
        assert!(paths[0].svg_points().starts_with("64.0,"));
    }

    #[test]
    fn single_label_line_is_centred() {
        let layout = PlotLayout::default();
        let x = layout.x_for(0, 1, ChartMode::Line);
        assert_eq!(x, layout.left() + layout.plot_width() / 2.0);
    }

    #[test]
    fn bars_are_grouped_per_year_in_series_order() {
        let layout = PlotLayout::default();
        let mut selection = SelectionState::default();
        selection.toggle_category(CategoryId::Linux);
        selection.set_mode(ChartMode::Bar);
        let spec = spec_for(&selection);
        let bars = layout.bars(&spec);

        assert_eq!(bars.len(), spec.labels.len() * 2);
        assert_eq!(bars[0].category, CategoryId::Windows);
        assert_eq!(bars[1].category, CategoryId::Macos);
        assert_eq!(bars[0].year, "2001");
        assert!(bars[0].x + bars[0].width <= bars[1].x);
        assert!(bars[0].height > bars[1].height);
        for bar in &bars {
            assert!((bar.y + bar.height - layout.bottom()).abs() < 1e-9);
            assert!(bar.x >= layout.left() && bar.x + bar.width <= layout.right());
        }
    }

    #[test]
    fn no_series_means_no_geometry() {
        let layout = PlotLayout::default();
        let mut selection = SelectionState::default();
        for id in CategoryId::ALL {
            selection.toggle_category(id);
        }
        let spec = spec_for(&selection);
        assert!(layout.bars(&spec).is_empty());
        assert!(layout.line_paths(&spec).is_empty());
        assert!(layout.legend(&spec).is_empty());
    }

    #[test]
    fn crowded_year_labels_are_thinned() {
        let layout = PlotLayout::default();
        let spec = spec_for(&SelectionState::default());
        let ticks = layout.x_ticks(&spec);
        assert!(ticks.len() < spec.labels.len());
        assert_eq!(ticks[0].label, "2001");
        assert_eq!(ticks[1].label, "2003");
    }

    #[test]
    fn y_ticks_carry_suffix() {
        let layout = PlotLayout::default();
        let ticks = layout.y_ticks(&AxisConfig::default());
        assert_eq!(ticks[0].label, "0%");
        assert_eq!(ticks[10].label, "100%");
        assert_eq!(ticks[10].position, layout.top());
    }

    #[test]
    fn legend_items_do_not_overlap() {
        let layout = PlotLayout::default();
        let legend = layout.legend(&spec_for(&SelectionState::default()));
        assert_eq!(legend.len(), 3);
        assert!(legend.windows(2).all(|pair| pair[0].x < pair[1].x));
        assert_eq!(legend[2].label, "macOS");
    }
}
