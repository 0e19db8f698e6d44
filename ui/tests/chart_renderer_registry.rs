//! Renderer registration is process-wide, so it is exercised in its own test
//! binary where no other test renders a chart.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;

use ui::chart::{self, AxisConfig, ChartCaptions, ChartRenderer, ChartSpec};
use ui::core::{build_series, dataset, SelectionState};

struct CountingRenderer {
    calls: Arc<AtomicUsize>,
    series_seen: Arc<AtomicUsize>,
}

impl ChartRenderer for CountingRenderer {
    fn render(&self, spec: &ChartSpec, _captions: &ChartCaptions) -> Element {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.series_seen.store(spec.series.len(), Ordering::SeqCst);
        VNode::empty()
    }
}

#[test]
fn first_registered_renderer_receives_every_spec() {
    let calls = Arc::new(AtomicUsize::new(0));
    let series_seen = Arc::new(AtomicUsize::new(0));
    assert!(chart::register_renderer(CountingRenderer {
        calls: calls.clone(),
        series_seen: series_seen.clone(),
    }));

    let data = dataset::bundled();
    let mut selection = SelectionState::default();
    let series = build_series(data, &selection);
    let spec = ChartSpec::new(data, &series, selection.mode(), AxisConfig::default());
    let captions = ChartCaptions {
        title: "title".into(),
        x_axis: "x".into(),
        y_axis: "y".into(),
    };

    let _ = chart::render(&spec, &captions);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(series_seen.load(Ordering::SeqCst), 3);

    // A second registration is refused; the first renderer stays active.
    let ignored = Arc::new(AtomicUsize::new(0));
    assert!(!chart::register_renderer(CountingRenderer {
        calls: ignored.clone(),
        series_seen: Arc::new(AtomicUsize::new(0)),
    }));

    selection.toggle_category(ui::core::CategoryId::Windows);
    let series = build_series(data, &selection);
    let spec = ChartSpec::new(data, &series, selection.mode(), AxisConfig::default());
    let _ = chart::render(&spec, &captions);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(series_seen.load(Ordering::SeqCst), 2);
    assert_eq!(ignored.load(Ordering::SeqCst), 0);
}
