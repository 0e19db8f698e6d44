use dioxus::prelude::*;

use crate::core::format;
use crate::core::selection::ChartMode;

use super::layout::PlotLayout;
use super::{ChartCaptions, ChartRenderer, ChartSpec};

/// Default renderer: inline SVG, no script dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl ChartRenderer for SvgRenderer {
    fn render(&self, spec: &ChartSpec, captions: &ChartCaptions) -> Element {
        rsx! {
            SvgChart { spec: spec.clone(), captions: captions.clone() }
        }
    }
}

#[component]
pub fn SvgChart(spec: ChartSpec, captions: ChartCaptions) -> Element {
    let layout = PlotLayout::default();
    let (left, right, top, bottom) = (layout.left(), layout.right(), layout.top(), layout.bottom());
    let centre_x = layout.width / 2.0;
    let y_title_x = -(top + layout.plot_height() / 2.0);

    let y_ticks = layout.y_ticks(&spec.y_axis);
    let x_ticks = layout.x_ticks(&spec);
    let legend = layout.legend(&spec);

    let marks = match spec.mode {
        ChartMode::Line => {
            let paths = layout.line_paths(&spec);
            rsx! {
                for path in paths {
                    g { key: "{path.category.key()}", class: "chart__series",
                        polyline {
                            class: "chart__line",
                            points: "{path.svg_points()}",
                            fill: "none",
                            stroke: path.stroke,
                            stroke_width: "2",
                        }
                        for (index, ((x, y), value)) in path.points.iter().copied().zip(path.values.iter().copied()).enumerate() {
                            circle {
                                key: "{index}",
                                class: "chart__point",
                                cx: "{x}",
                                cy: "{y}",
                                r: "3",
                                fill: path.fill,
                                stroke: path.stroke,
                                stroke_width: "1.5",
                                title { "{path.category.label()} · {spec.labels[index]}: {format::format_percent(value)}" }
                            }
                        }
                    }
                }
            }
        }
        ChartMode::Bar => {
            let bars = layout.bars(&spec);
            rsx! {
                g { class: "chart__bars",
                    for bar in bars {
                        rect {
                            key: "{bar.category.key()}-{bar.year}",
                            class: "chart__bar",
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: bar.fill,
                            stroke: bar.stroke,
                            stroke_width: "1",
                            title { "{bar.category.label()} · {bar.year}: {format::format_percent(bar.value)}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        figure { class: "chart chart--{spec.mode.as_str()}",
            svg {
                class: "chart__svg",
                view_box: "{layout.view_box()}",
                role: "img",
                "aria-label": "{captions.title}",

                text {
                    class: "chart__title",
                    x: "{centre_x}",
                    y: "24",
                    text_anchor: "middle",
                    "{captions.title}"
                }

                g { class: "chart__legend",
                    for item in legend {
                        g { key: "{item.category.key()}",
                            rect {
                                x: "{item.x}",
                                y: "36",
                                width: "14",
                                height: "14",
                                fill: item.fill,
                                stroke: item.stroke,
                                stroke_width: "2",
                            }
                            text { class: "chart__legend-label", x: "{item.x + 20.0}", y: "48", "{item.label}" }
                        }
                    }
                }

                g { class: "chart__grid",
                    for tick in y_ticks {
                        g { key: "{tick.label}",
                            line { x1: "{left}", y1: "{tick.position}", x2: "{right}", y2: "{tick.position}" }
                            text {
                                class: "chart__tick",
                                x: "{left - 8.0}",
                                y: "{tick.position + 4.0}",
                                text_anchor: "end",
                                "{tick.label}"
                            }
                        }
                    }
                }

                g { class: "chart__x-ticks",
                    for tick in x_ticks {
                        text {
                            key: "{tick.label}",
                            class: "chart__tick",
                            x: "{tick.position}",
                            y: "{bottom + 18.0}",
                            text_anchor: "middle",
                            "{tick.label}"
                        }
                    }
                }

                line { class: "chart__axis", x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}" }
                line { class: "chart__axis", x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }

                text {
                    class: "chart__axis-title",
                    x: "{centre_x}",
                    y: "{layout.height - 10.0}",
                    text_anchor: "middle",
                    "{captions.x_axis}"
                }
                text {
                    class: "chart__axis-title",
                    transform: "rotate(-90)",
                    x: "{y_title_x}",
                    y: "16",
                    text_anchor: "middle",
                    "{captions.y_axis}"
                }

                {marks}
            }
        }
    }
}
