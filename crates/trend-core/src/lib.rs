// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports the reveal-animation API for the symptom trend chart.

pub mod animator;
pub mod chart;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;
pub mod visibility;
#[cfg(feature = "raster")]
pub mod render;

pub use animator::{CancelToken, Clock, FrameHandle, FrameScheduler, ManualClock, ProgressAnimator, ProgressRun, SystemClock, Tick};
pub use chart::{AnimatedChart, AnimationState, ChartHost, ChartPhase};
pub use config::ChartConfig;
pub use easing::ease_in_out_cubic;
pub use error::{Result, TrendError};
pub use geometry::{derive, visible_prefix_len, ChartGeometry, Layout, Point};
pub use scene::{Node, Scene, SceneStyle};
pub use series::{Sample, SeriesKind, SYMPTOM_WEEK};
pub use theme::Theme;
pub use types::ChartFrame;
pub use visibility::{IntersectionEntry, IntersectionHost, ObserverId, RegionHandle, Threshold, VisibilityTrigger};
