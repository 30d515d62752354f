// File: crates/trend-dioxus/src/lib.rs
// Summary: Dioxus host adapter for the animated symptom trend chart (desktop only).
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Dioxus has no intersection observer hook; a polling loop measures the mounted
//   node each frame and feeds `PollingHost` reports into the core chart.

pub mod host;

pub use host::{visible_fraction, PollingHost};

#[cfg(feature = "desktop")]
pub mod ui {
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    use dioxus::prelude::*;
    use tracing::{error, warn};
    use trend_core::{AnimatedChart, ChartConfig, ChartPhase, IntersectionEntry, RegionHandle};

    use super::host::{visible_fraction, PollingHost};

    static NEXT_REGION: AtomicU64 = AtomicU64::new(1);

    #[derive(Props, Clone, PartialEq)]
    pub struct SymptomTrendChartProps {
        #[props(default)]
        pub config: ChartConfig,
        /// Polling period for visibility checks and animation frames.
        #[props(default = 16)]
        pub frame_ms: u64,
    }

    fn viewport_height() -> f64 {
        let ctx = dioxus_desktop::window();
        let scale = ctx.window.scale_factor();
        ctx.window.inner_size().to_logical::<f64>(scale).height
    }

    /// Chart that starts its reveal once 30% of it has scrolled into view.
    #[component]
    pub fn SymptomTrendChart(props: SymptomTrendChartProps) -> Element {
        let config = props.config.clone();
        let mut chart = use_signal(move || match AnimatedChart::new(PollingHost::new(), &config) {
            Ok(c) => Some(c),
            Err(e) => {
                error!("symptom chart disabled: {e}");
                None
            }
        });
        let region = use_hook(|| RegionHandle(NEXT_REGION.fetch_add(1, Ordering::Relaxed)));
        let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);

        // Detach hook: stop observing and drop any pending frame.
        use_drop(move || {
            if let Ok(mut c) = chart.try_write() {
                if let Some(c) = c.as_mut() { c.unmount(); }
            }
        });

        let frame_ms = props.frame_ms.max(1);
        // Reads go through `peek`; `write` (and so a re-render) only happens
        // when a report fires the latch or a granted frame advances progress.
        use_future(move || async move {
            loop {
                tokio::time::sleep(Duration::from_millis(frame_ms)).await;

                let (observing, has_frame, token) = match chart.peek().as_ref() {
                    Some(c) => (c.host().observed_region().is_some(), c.host().has_frame(), c.cancel_token()),
                    None => break,
                };
                if token.is_cancelled() { break; }

                if observing {
                    if let Some(el) = mounted.peek().clone() {
                        match el.get_client_rect().await {
                            Ok(rect) => {
                                let ratio = visible_fraction(rect.min_y(), rect.max_y(), viewport_height());
                                let region = chart.peek().as_ref().and_then(|c| c.host().qualifying_region(ratio));
                                if let Some(region) = region {
                                    if let Some(c) = chart.write().as_mut() {
                                        c.on_intersection(IntersectionEntry::new(region, ratio));
                                    }
                                }
                            }
                            Err(e) => warn!("symptom chart: measuring region failed: {e:?}"),
                        }
                    }
                } else if has_frame {
                    if let Some(c) = chart.write().as_mut() {
                        if let Some(handle) = c.host_mut().take_frame() { c.on_frame(handle); }
                    }
                }

                if chart.peek().as_ref().map_or(true, |c| c.phase() == ChartPhase::Settled) {
                    break;
                }
            }
        });

        let scene = match chart.read().as_ref() {
            Some(c) => c.scene(),
            None => return rsx! { div { class: "trend-chart trend-chart-error", "Chart unavailable" } },
        };
        let svg = scene.to_svg();
        let legend: Vec<(String, String, String)> = scene
            .legend
            .iter()
            .map(|e| {
                (
                    e.label.to_string(),
                    format!("display:flex; align-items:center; gap:0.75rem; opacity:{}; transition:opacity 0.8s ease-out;", e.opacity),
                    format!("width:1.5rem; height:1.5rem; border-radius:9999px; background:{};", e.color.to_hex()),
                )
            })
            .collect();
        let title = scene.title;

        rsx! {
            div {
                class: "trend-chart",
                style: "position:relative; width:100%; padding:2rem 0;",
                onmounted: move |evt| {
                    mounted.set(Some(evt.data()));
                    if let Some(c) = chart.write().as_mut() { c.mount(region); }
                },
                h3 { style: "font-size:1.875rem; font-weight:700; text-align:center; margin-bottom:2rem;", "{title}" }
                div { class: "trend-chart-plot", style: "width:100%;", dangerous_inner_html: "{svg}" }
                div { class: "trend-chart-legend", style: "display:flex; align-items:center; justify-content:center; gap:2.5rem; margin-top:2.5rem;",
                    for (label, item_style, swatch_style) in legend {
                        div { key: "{label}", style: "{item_style}",
                            div { style: "{swatch_style}" }
                            span { style: "font-size:1.125rem; font-weight:600;", "{label}" }
                        }
                    }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! {
                div { style: "font-family:sans-serif; max-width:960px; margin:0 auto;",
                    div { style: "height:110vh; display:flex; align-items:center; justify-content:center; color:#6b7280;",
                        "Scroll down to reveal the chart"
                    }
                    SymptomTrendChart {}
                }
            }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Symptom Trends"));
        let contexts: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let platform: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, contexts, platform);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("trend-dioxus built without `desktop` feature; enable features to run UI demo")
}
