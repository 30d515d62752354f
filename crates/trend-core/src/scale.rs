// File: crates/trend-core/src/scale.rs
// Summary: Sample-index (X) and value (Y) scale transforms for the chart frame.

use crate::error::{Result, TrendError};
use crate::types::ChartFrame;

/// Horizontal scale placing `n` samples evenly across `[padding, width - padding]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub spacing: f64,
    pub len: usize,
}

impl IndexScale {
    /// Fails for `n < 2`: the spacing divides by `n - 1`.
    pub fn new(frame: &ChartFrame, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(TrendError::TooFewSamples(n));
        }
        let spacing = frame.plot_width() / (n - 1) as f64;
        Ok(Self { left_px: frame.padding, spacing, len: n })
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.spacing
    }
}

/// Vertical scale mapping `[0, max_value]` onto `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub max_value: f64,
}

impl ValueScale {
    pub fn new(frame: &ChartFrame) -> Self {
        Self {
            top_px: frame.padding,
            bottom_px: frame.height - frame.padding,
            max_value: frame.max_value,
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - (v / self.max_value) * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        (self.bottom_px - py) / (self.bottom_px - self.top_px) * self.max_value
    }
}
