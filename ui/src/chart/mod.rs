//! Chart rendering boundary.
//!
//! The dashboard hands a [`ChartSpec`] plus localized [`ChartCaptions`] to
//! whatever [`ChartRenderer`] is installed. Platforms may register their own
//! renderer once at startup (for example one backed by a script charting
//! library); otherwise the built-in [`SvgRenderer`] draws the chart.

mod layout;
pub use layout::{BarRect, LegendItem, LinePath, PlotLayout, Tick};

mod spec;
pub use spec::{AxisConfig, ChartSeries, ChartSpec};

mod svg;
pub use svg::{SvgChart, SvgRenderer};

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Localized text drawn around the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCaptions {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, spec: &ChartSpec, captions: &ChartCaptions) -> Element;
}

static RENDERER: OnceCell<Box<dyn ChartRenderer>> = OnceCell::new();

/// Install a process-wide renderer. Only the first registration wins; returns
/// `false` if one was already installed.
pub fn register_renderer(renderer: impl ChartRenderer + 'static) -> bool {
    RENDERER.set(Box::new(renderer)).is_ok()
}

/// Render with the registered renderer, falling back to SVG.
pub fn render(spec: &ChartSpec, captions: &ChartCaptions) -> Element {
    match RENDERER.get() {
        Some(renderer) => renderer.render(spec, captions),
        None => SvgRenderer.render(spec, captions),
    }
}
