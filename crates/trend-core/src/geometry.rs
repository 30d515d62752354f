// File: crates/trend-core/src/geometry.rs
// Summary: Pure geometry derivation: progress -> visible polylines, markers and label opacity.
// Notes:
// - Two reveal rules coexist on purpose: the path/point set is cut at the
//   visible prefix `ceil(N * p)`, while each point's opacity steps at `i / (N - 1)`.
// - Everything here is a function of (samples, frame, progress); no hidden state.

use std::fmt::Write as _;

use crate::error::Result;
use crate::scale::{IndexScale, ValueScale};
use crate::series::{Sample, SeriesKind};
use crate::types::ChartFrame;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Number of leading samples drawn at progress `p`: `ceil(n * p)` clamped to `[0, n]`.
pub fn visible_prefix_len(n: usize, p: f64) -> usize {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    ((n as f64 * p).ceil() as usize).min(n)
}

/// Build SVG path data (`M x y L x y ...`) for a polyline; empty for no points.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        // Writing into a String cannot fail.
        let _ = write!(d, "{cmd} {} {}", p.x, p.y);
    }
    d
}

/// Validated placement of `n` samples inside a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub frame: ChartFrame,
    pub x: IndexScale,
    pub y: ValueScale,
}

impl Layout {
    /// Fails fast for an invalid frame or fewer than two samples.
    pub fn new(frame: ChartFrame, n: usize) -> Result<Self> {
        frame.validate()?;
        let x = IndexScale::new(&frame, n)?;
        Ok(Self { frame, x, y: ValueScale::new(&frame) })
    }

    #[inline]
    pub fn len(&self) -> usize { self.x.len }

    #[inline]
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x.to_px(index), self.y.to_px(value))
    }

    /// Progress at which point `index` pops in.
    #[inline]
    pub fn point_threshold(&self, index: usize) -> f64 {
        index as f64 / (self.len() - 1) as f64
    }

    /// Step opacity of point `index` at progress `p`: 1 once `p >= i / (N - 1)`.
    #[inline]
    pub fn point_opacity(&self, index: usize, p: f64) -> f64 {
        if p >= self.point_threshold(index) { 1.0 } else { 0.0 }
    }

    /// Derive the full frame geometry for `samples` at progress `p`.
    /// Spacing and thresholds come from the layout: samples past `self.len()`
    /// are ignored and a shorter slice simply ends the prefix early.
    pub fn derive(&self, samples: &[Sample], p: f64) -> ChartGeometry {
        let samples = &samples[..samples.len().min(self.len())];
        let visible = visible_prefix_len(self.len(), p).min(samples.len());
        let series = SeriesKind::ALL
            .into_iter()
            .map(|kind| {
                let points = samples[..visible]
                    .iter()
                    .enumerate()
                    .map(|(i, s)| self.point(i, s.value(kind)))
                    .collect::<Vec<_>>();
                let markers = points
                    .iter()
                    .enumerate()
                    .map(|(i, &at)| Marker { index: i, at, opacity: self.point_opacity(i, p) })
                    .collect();
                SeriesGeometry { kind, points, markers }
            })
            .collect();
        let labels = samples
            .iter()
            .enumerate()
            .map(|(i, s)| AxisLabel { text: s.label, x: self.x.to_px(i) })
            .collect();
        ChartGeometry { progress: p, visible, series, labels, label_opacity: p }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub at: Point,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub kind: SeriesKind,
    /// Visible prefix, in sample order.
    pub points: Vec<Point>,
    /// One marker per visible point, with its step opacity.
    pub markers: Vec<Marker>,
}

impl SeriesGeometry {
    pub fn path_data(&self) -> String { path_data(&self.points) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: &'static str,
    pub x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub progress: f64,
    /// Visible prefix length shared by all series.
    pub visible: usize,
    pub series: Vec<SeriesGeometry>,
    pub labels: Vec<AxisLabel>,
    /// Uniform opacity of every axis label and legend entry.
    pub label_opacity: f64,
}

impl ChartGeometry {
    pub fn series(&self, kind: SeriesKind) -> &SeriesGeometry {
        &self.series[kind.index()]
    }
}

/// One-shot derivation: validate the layout and derive at `p`.
pub fn derive(samples: &[Sample], frame: &ChartFrame, p: f64) -> Result<ChartGeometry> {
    Ok(Layout::new(*frame, samples.len())?.derive(samples, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_clamps_out_of_range_progress() {
        assert_eq!(visible_prefix_len(7, -0.5), 0);
        assert_eq!(visible_prefix_len(7, 2.0), 7);
        assert_eq!(visible_prefix_len(7, f64::NAN), 0);
        assert_eq!(visible_prefix_len(7, 0.01), 1);
    }

    #[test]
    fn path_data_format() {
        assert_eq!(path_data(&[]), "");
        let d = path_data(&[Point::new(80.0, 284.0), Point::new(203.5, 352.0)]);
        assert_eq!(d, "M 80 284 L 203.5 352");
    }
}
