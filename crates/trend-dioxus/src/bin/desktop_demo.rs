// File: crates/trend-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop SymptomTrendChart demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = trend_dioxus::ui::run_demo_ui() {
        eprintln!("trend-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
