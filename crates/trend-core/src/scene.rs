// File: crates/trend-core/src/scene.rs
// Summary: Declarative scene graph emitted for each progress value; backends only paint it.

use serde::Deserialize;

use crate::geometry::{ChartGeometry, Layout, Point};
use crate::grid::grid_values;
use crate::series::SeriesKind;
use crate::theme::{Rgba, Theme};

pub const TITLE: &str = "Symptom Trends";

/// Stroke, marker and text metrics.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub point_radius: f64,
    pub stroke_width: f64,
    /// Distance of the day labels above the bottom edge.
    pub label_offset: f64,
    pub label_size: f64,
    pub grid_width: f64,
    pub grid_opacity: f64,
    pub grid_dash: [f64; 2],
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            point_radius: 10.0,
            stroke_width: 5.0,
            label_offset: 25.0,
            label_size: 16.0,
            grid_width: 1.5,
            grid_opacity: 0.4,
            grid_dash: [6.0, 6.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    GridLine { from: Point, to: Point, color: Rgba, width: f64, dash: [f64; 2], opacity: f64 },
    Polyline { series: SeriesKind, points: Vec<Point>, color: Rgba, width: f64 },
    Marker { series: SeriesKind, index: usize, center: Point, radius: f64, color: Rgba, opacity: f64 },
    Text { text: String, at: Point, anchor: Anchor, color: Rgba, size: f64, opacity: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    pub kind: SeriesKind,
    pub label: &'static str,
    pub color: Rgba,
    pub opacity: f64,
}

/// Everything a backend needs to paint one frame of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: &'static str,
    pub background: Rgba,
    pub progress: f64,
    /// Paint order: grid, polylines, markers, labels.
    pub nodes: Vec<Node>,
    /// Rendered outside the plot by the host.
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn build(layout: &Layout, geometry: &ChartGeometry, theme: &Theme, style: &SceneStyle) -> Self {
        let frame = layout.frame;
        let mut nodes = Vec::new();

        for v in grid_values(frame.max_value) {
            let y = layout.y.to_px(v);
            nodes.push(Node::GridLine {
                from: Point::new(frame.padding, y),
                to: Point::new(frame.width - frame.padding, y),
                color: theme.grid,
                width: style.grid_width,
                dash: style.grid_dash,
                opacity: style.grid_opacity,
            });
        }

        // Empty prefixes are skipped rather than emitted as empty paths.
        for s in geometry.series.iter().filter(|s| !s.points.is_empty()) {
            nodes.push(Node::Polyline {
                series: s.kind,
                points: s.points.clone(),
                color: theme.series_color(s.kind),
                width: style.stroke_width,
            });
        }

        // Markers grouped per day so later days paint above earlier ones.
        for i in 0..geometry.visible {
            for s in &geometry.series {
                let m = s.markers[i];
                nodes.push(Node::Marker {
                    series: s.kind,
                    index: m.index,
                    center: m.at,
                    radius: style.point_radius,
                    color: theme.series_color(s.kind),
                    opacity: m.opacity,
                });
            }
        }

        let label_y = frame.height - style.label_offset;
        for l in &geometry.labels {
            nodes.push(Node::Text {
                text: l.text.to_string(),
                at: Point::new(l.x, label_y),
                anchor: Anchor::Middle,
                color: theme.axis_label,
                size: style.label_size,
                opacity: geometry.label_opacity,
            });
        }

        let legend = SeriesKind::ALL
            .into_iter()
            .map(|kind| LegendEntry {
                kind,
                label: kind.label(),
                color: theme.series_color(kind),
                opacity: geometry.label_opacity,
            })
            .collect();

        Self {
            width: frame.width,
            height: frame.height,
            title: TITLE,
            background: theme.background,
            progress: geometry.progress,
            nodes,
            legend,
        }
    }

    pub fn polylines(&self) -> impl Iterator<Item = (SeriesKind, &[Point])> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Polyline { series, points, .. } => Some((*series, points.as_slice())),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| matches!(n, Node::Marker { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| matches!(n, Node::Text { .. }))
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| matches!(n, Node::GridLine { .. }))
    }
}
