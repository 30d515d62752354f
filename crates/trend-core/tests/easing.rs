// File: crates/trend-core/tests/easing.rs
// Purpose: Cubic ease-in-out endpoints, midpoint and monotonicity.

use trend_core::ease_in_out_cubic as eased;

#[test]
fn endpoints_and_midpoint() {
    assert_eq!(eased(0.0), 0.0);
    assert_eq!(eased(1.0), 1.0);
    assert_eq!(eased(0.5), 0.5);
}

#[test]
fn monotonically_non_decreasing() {
    let mut prev = eased(0.0);
    for i in 1..=10_000 {
        let t = i as f64 / 10_000.0;
        let v = eased(t);
        assert!(v >= prev, "eased({t}) = {v} < {prev}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn mirrored_about_midpoint() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let a = eased(t);
        let b = 1.0 - eased(1.0 - t);
        assert!((a - b).abs() < 1e-12, "t={t}: {a} vs {b}");
    }
}

#[test]
fn known_values() {
    assert!((eased(0.25) - 0.0625).abs() < 1e-12);
    assert!((eased(0.75) - 0.9375).abs() < 1e-12);
}
