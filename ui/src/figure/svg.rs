//! SVG rendering of subplot panels.

use std::f64::consts::TAU;

use dioxus::prelude::*;

use crate::core::format::format_tick;

use super::grid::Rect;
use super::series::{nice_ticks, Bounds, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Scatter,
    Bar,
    Pie,
}

/// One axes: where it sits in the figure and what it draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub title: String,
    pub kind: PlotKind,
    pub series: Vec<Series>,
    /// Fixed data range; `None` fits the data.
    pub bounds: Option<Bounds>,
    pub show_x_labels: bool,
    pub show_y_labels: bool,
}

impl Panel {
    pub fn new(rect: Rect, kind: PlotKind, series: Vec<Series>) -> Self {
        Self {
            rect,
            title: String::new(),
            kind,
            series,
            bounds: None,
            show_x_labels: true,
            show_y_labels: true,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Data range used for projection.
    pub fn data_bounds(&self) -> Option<Bounds> {
        if let Some(bounds) = self.bounds {
            return Some(bounds);
        }
        let fitted = Bounds::of_series(&self.series)?;
        Some(match self.kind {
            PlotKind::Bar => Bounds {
                x_min: fitted.x_min - 0.6,
                x_max: fitted.x_max + 0.6,
                ..fitted.including_zero_y().padded(0.05)
            },
            _ => fitted.padded(0.05),
        })
    }
}

/// Pixel-space box of an axes inside a `width` × `height` figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelBox {
    pub fn from_rect(rect: &Rect, width: f64, height: f64) -> Self {
        Self {
            x: rect.left * width,
            y: (1.0 - rect.top()) * height,
            width: rect.width * width,
            height: rect.height * height,
        }
    }

    pub fn project(&self, bounds: &Bounds, (x, y): (f64, f64)) -> (f64, f64) {
        let fx = if bounds.width() > 0.0 {
            (x - bounds.x_min) / bounds.width()
        } else {
            0.5
        };
        let fy = if bounds.height() > 0.0 {
            (y - bounds.y_min) / bounds.height()
        } else {
            0.5
        };
        (self.x + fx * self.width, self.y + (1.0 - fy) * self.height)
    }
}

/// `points` attribute for an SVG polyline.
pub fn polyline_points(area: &PixelBox, bounds: &Bounds, points: &[(f64, f64)]) -> String {
    points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&p| {
            let (px, py) = area.project(bounds, p);
            format!("{px:.1},{py:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Path for a pie wedge from `start` to `end` radians (clockwise from 12 o'clock).
pub fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large_arc = i32::from(end - start > std::f64::consts::PI);
    format!("M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.1},{r:.1} 0 {large_arc} 1 {x1:.1},{y1:.1} Z")
}

/// Angular extents of each positive value, in order.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if *v > 0.0 { v / total * TAU } else { 0.0 };
            let start = cursor;
            cursor += sweep;
            (start, cursor)
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct FigureProps {
    pub panels: Vec<Panel>,
    #[props(default = 640)]
    pub width: u32,
    #[props(default = 480)]
    pub height: u32,
    #[props(default)]
    pub caption: Option<String>,
}

#[component]
pub fn Figure(props: FigureProps) -> Element {
    let width = f64::from(props.width);
    let height = f64::from(props.height);

    rsx! {
        figure { class: "figure",
            svg {
                class: "figure__canvas",
                view_box: "0 0 {props.width} {props.height}",
                preserve_aspect_ratio: "xMidYMid meet",
                rect { class: "figure__background", x: "0", y: "0", width: "{props.width}", height: "{props.height}" }
                for (index, panel) in props.panels.iter().enumerate() {
                    g { key: "{index}", class: "figure__panel",
                        {render_panel(panel, width, height)}
                    }
                }
            }
            if let Some(caption) = props.caption.as_ref() {
                figcaption { class: "figure__caption", "{caption}" }
            }
        }
    }
}

fn render_panel(panel: &Panel, fig_width: f64, fig_height: f64) -> Element {
    let area = PixelBox::from_rect(&panel.rect, fig_width, fig_height);
    let title_x = area.x + area.width / 2.0;
    let title_y = area.y - 8.0;

    if panel.kind == PlotKind::Pie {
        return render_pie(panel, &area, title_x, title_y);
    }

    let Some(bounds) = panel.data_bounds() else {
        return rsx! {
            rect { class: "figure__axes", x: "{area.x}", y: "{area.y}", width: "{area.width}", height: "{area.height}" }
        };
    };

    let x_ticks: Vec<(f64, String)> = if panel.show_x_labels {
        nice_ticks(bounds.x_min, bounds.x_max, 5)
            .into_iter()
            .map(|t| (area.project(&bounds, (t, bounds.y_min)).0, format_tick(t)))
            .collect()
    } else {
        Vec::new()
    };
    let y_ticks: Vec<(f64, String)> = if panel.show_y_labels {
        nice_ticks(bounds.y_min, bounds.y_max, 4)
            .into_iter()
            .map(|t| (area.project(&bounds, (bounds.x_min, t)).1, format_tick(t)))
            .collect()
    } else {
        Vec::new()
    };
    let bottom = area.y + area.height;

    rsx! {
        rect { class: "figure__axes", x: "{area.x}", y: "{area.y}", width: "{area.width}", height: "{area.height}" }
        if !panel.title.is_empty() {
            text { class: "figure__title", x: "{title_x}", y: "{title_y}", text_anchor: "middle", "{panel.title}" }
        }
        for (x, label) in x_ticks {
            line { class: "figure__tick", x1: "{x}", y1: "{bottom}", x2: "{x}", y2: "{bottom + 4.0}" }
            text { class: "figure__tick-label", x: "{x}", y: "{bottom + 16.0}", text_anchor: "middle", "{label}" }
        }
        for (y, label) in y_ticks {
            line { class: "figure__tick", x1: "{area.x - 4.0}", y1: "{y}", x2: "{area.x}", y2: "{y}" }
            text { class: "figure__tick-label", x: "{area.x - 6.0}", y: "{y + 4.0}", text_anchor: "end", "{label}" }
        }
        for series in panel.series.iter() {
            {render_series(panel.kind, series, &area, &bounds)}
        }
    }
}

fn render_series(kind: PlotKind, series: &Series, area: &PixelBox, bounds: &Bounds) -> Element {
    match kind {
        PlotKind::Line => {
            let points = polyline_points(area, bounds, &series.points);
            rsx! {
                polyline { class: "figure__line", points: "{points}", stroke: series.color, fill: "none" }
            }
        }
        PlotKind::Scatter => {
            let dots: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|&p| area.project(bounds, p))
                .collect();
            rsx! {
                for (cx, cy) in dots {
                    circle { class: "figure__dot", cx: "{cx:.1}", cy: "{cy:.1}", r: "3", fill: series.color }
                }
            }
        }
        PlotKind::Bar => {
            let (_, zero_y) = area.project(bounds, (bounds.x_min, 0.0));
            let bar_width = area.width / bounds.width().max(1.0) * 0.8;
            let bars: Vec<(f64, f64, f64)> = series
                .points
                .iter()
                .map(|&(x, y)| {
                    let (px, py) = area.project(bounds, (x, y));
                    (px - bar_width / 2.0, py.min(zero_y), (py - zero_y).abs())
                })
                .collect();
            rsx! {
                for (x, y, h) in bars {
                    rect { class: "figure__bar", x: "{x:.1}", y: "{y:.1}", width: "{bar_width:.1}", height: "{h:.1}", fill: series.color }
                }
            }
        }
        PlotKind::Pie => rsx! {},
    }
}

fn render_pie(panel: &Panel, area: &PixelBox, title_x: f64, title_y: f64) -> Element {
    let values: Vec<f64> = panel
        .series
        .iter()
        .filter_map(|s| s.points.first().map(|p| p.1))
        .collect();
    let cx = area.x + area.width / 2.0;
    let cy = area.y + area.height / 2.0;
    let r = area.width.min(area.height) / 2.0 * 0.9;
    let wedges: Vec<(String, &'static str)> = pie_angles(&values)
        .into_iter()
        .zip(panel.series.iter())
        .filter(|&((start, end), _)| end > start)
        .map(|((start, end), series)| (wedge_path(cx, cy, r, start, end), series.color))
        .collect();

    rsx! {
        if !panel.title.is_empty() {
            text { class: "figure__title", x: "{title_x}", y: "{title_y}", text_anchor: "middle", "{panel.title}" }
        }
        for (d, color) in wedges {
            path { class: "figure__wedge", d: "{d}", fill: color }
        }
    }
}
