// File: crates/trend-core/src/types.rs
// Summary: Shared constants and the chart coordinate frame.

use serde::Deserialize;

use crate::error::{Result, TrendError};

/// Default viewBox width in user units.
pub const WIDTH: f64 = 900.0;
/// Default viewBox height in user units.
pub const HEIGHT: f64 = 500.0;
/// Padding on every side of the plot area.
pub const PADDING: f64 = 80.0;
/// Top of the value axis; symptom scores live in `[0, MAX_VALUE]`.
pub const MAX_VALUE: f64 = 5.0;

/// Reveal animation length in milliseconds.
pub const DURATION_MS: u64 = 3000;
/// Visible fraction at which the chart starts animating.
pub const CHART_THRESHOLD: f64 = 0.3;
/// Visible fraction used by plain section fade-ins.
pub const SECTION_THRESHOLD: f64 = 0.1;

/// Chart coordinate frame.
/// Contract: width and height exceed `2 * padding`, `max_value > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_value: f64,
}

impl ChartFrame {
    pub const fn new(width: f64, height: f64, padding: f64, max_value: f64) -> Self {
        Self { width, height, padding, max_value }
    }

    /// Horizontal extent available to samples (`width - 2 * padding`).
    pub fn plot_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Vertical extent available to values (`height - 2 * padding`).
    pub fn plot_height(&self) -> f64 { self.height - 2.0 * self.padding }

    /// Check the frame contract, rejecting non-finite numbers.
    pub fn validate(&self) -> Result<()> {
        let all = [self.width, self.height, self.padding, self.max_value];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(TrendError::InvalidFrame("non-finite dimension"));
        }
        if self.padding < 0.0 {
            return Err(TrendError::InvalidFrame("padding is negative"));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(TrendError::InvalidFrame("padding leaves no plot area"));
        }
        if self.max_value <= 0.0 {
            return Err(TrendError::InvalidFrame("max_value must be positive"));
        }
        Ok(())
    }
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING, MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_valid() {
        let f = ChartFrame::default();
        assert!(f.validate().is_ok());
        assert_eq!(f.plot_width(), 740.0);
        assert_eq!(f.plot_height(), 340.0);
    }

    #[test]
    fn padding_swallowing_the_plot_is_rejected() {
        let f = ChartFrame::new(100.0, 500.0, 50.0, 5.0);
        assert!(matches!(f.validate(), Err(TrendError::InvalidFrame(_))));
        let f = ChartFrame::new(900.0, 500.0, 80.0, 0.0);
        assert!(matches!(f.validate(), Err(TrendError::InvalidFrame(_))));
        let f = ChartFrame::new(f64::NAN, 500.0, 80.0, 5.0);
        assert!(f.validate().is_err());
    }
}
