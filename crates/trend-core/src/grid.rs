// File: crates/trend-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Upper bound on horizontal grid lines regardless of `max_value`.
pub const MAX_GRID_LINES: usize = 64;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Horizontal grid values: one per whole score from 0 up to `max_value`.
/// Large ranges are spread over [`MAX_GRID_LINES`] evenly spaced values instead.
pub fn grid_values(max_value: f64) -> Vec<f64> {
    let top = if max_value.is_finite() { max_value.floor().max(0.0) } else { 0.0 };
    if top == 0.0 { return vec![0.0]; }
    if top >= MAX_GRID_LINES as f64 {
        return linspace(0.0, top, MAX_GRID_LINES);
    }
    linspace(0.0, top, top as usize + 1)
}
