// File: crates/trend-core/src/easing.rs
// Summary: Easing curves and the elapsed-time ratio they consume.

use std::time::Duration;

/// Symmetric cubic ease-in-out: `4t^3` below the midpoint, mirrored above it.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear completion ratio `min(elapsed / duration, 1)`, floored at 0.
pub fn raw_ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
