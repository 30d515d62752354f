// File: crates/trend-core/src/chart.rs
// Summary: Animated trend chart: wires the visibility latch, the animator and geometry to a host.
// Notes:
// - Phase machine: NotVisible -> Animating -> Settled. Settled is terminal and
//   re-intersection never restarts the run.
// - The host calls `mount`/`unmount` around the region's lifetime and reports
//   intersections and frames; the chart asks it for frames and observations.

use tracing::{debug, warn};

use crate::animator::{step, CancelToken, Clock, FrameHandle, FrameScheduler, ProgressAnimator, Tick};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::{ChartGeometry, Layout};
use crate::scene::{Scene, SceneStyle};
use crate::series::{Sample, SYMPTOM_WEEK};
use crate::theme::Theme;
use crate::visibility::{IntersectionEntry, IntersectionHost, RegionHandle, VisibilityTrigger};

/// Everything the chart needs from its UI framework.
pub trait ChartHost: IntersectionHost + FrameScheduler + Clock {}

impl<T: IntersectionHost + FrameScheduler + Clock> ChartHost for T {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartPhase {
    NotVisible,
    Animating,
    Settled,
}

/// Snapshot of the reveal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Latched once, never reset.
    pub visible: bool,
    /// Eased progress in `[0, 1]`, non-decreasing within a run.
    pub progress: f64,
}

pub struct AnimatedChart<H: ChartHost> {
    host: H,
    samples: &'static [Sample],
    layout: Layout,
    theme: Theme,
    style: SceneStyle,
    trigger: VisibilityTrigger,
    animator: ProgressAnimator,
    cancel: CancelToken,
    pending: Option<FrameHandle>,
    phase: ChartPhase,
    state: AnimationState,
}

impl<H: ChartHost> AnimatedChart<H> {
    /// Chart over the built-in week of samples.
    pub fn new(host: H, config: &ChartConfig) -> Result<Self> {
        Self::with_samples(host, config, &SYMPTOM_WEEK)
    }

    /// Fails fast when `samples` has fewer than two entries or the config is invalid.
    pub fn with_samples(host: H, config: &ChartConfig, samples: &'static [Sample]) -> Result<Self> {
        config.validate()?;
        let layout = Layout::new(config.frame, samples.len())?;
        Ok(Self {
            host,
            samples,
            layout,
            theme: config.theme(),
            style: config.style,
            trigger: VisibilityTrigger::new(config.threshold()?),
            animator: ProgressAnimator::new(config.duration())?,
            cancel: CancelToken::new(),
            pending: None,
            phase: ChartPhase::NotVisible,
            state: AnimationState { visible: false, progress: 0.0 },
        })
    }

    pub fn host(&self) -> &H { &self.host }
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }
    pub fn phase(&self) -> ChartPhase { self.phase }
    pub fn state(&self) -> AnimationState { self.state }
    pub fn progress(&self) -> f64 { self.state.progress }
    pub fn trigger(&self) -> &VisibilityTrigger { &self.trigger }
    pub fn layout(&self) -> &Layout { &self.layout }
    /// Frame the chart is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> { self.pending }
    /// Token cancelled on unmount; hosts may share it with their own loops.
    pub fn cancel_token(&self) -> CancelToken { self.cancel.clone() }

    /// Attach hook. Idempotent: a second call registers no new observer.
    pub fn mount(&mut self, region: RegionHandle) -> bool {
        if self.cancel.is_cancelled() {
            warn!(?region, "chart: mount after unmount ignored");
            return false;
        }
        self.trigger.attach(&mut self.host, region)
    }

    /// Feed a host intersection report. On the first qualifying report the chart
    /// starts animating and runs its first tick immediately.
    pub fn on_intersection(&mut self, entry: IntersectionEntry) -> bool {
        if !self.trigger.on_intersection(&mut self.host, entry) {
            return false;
        }
        self.state.visible = true;
        self.phase = ChartPhase::Animating;
        self.animator.arm(self.host.now());
        debug!("chart: animating");
        self.advance();
        true
    }

    /// Frame callback. Stale or cancelled handles are ignored and return `None`.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<f64> {
        if self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        self.advance()
    }

    fn advance(&mut self) -> Option<f64> {
        let tick = step(&mut self.animator, &self.host, &self.cancel)?;
        let frame = tick.frame();
        self.state.progress = self.state.progress.max(frame.progress);
        match tick {
            Tick::Continue(_) => {
                self.pending = self.host.request_frame();
                if self.pending.is_none() {
                    warn!(progress = self.state.progress, "chart: host refused a frame; animation stalls");
                }
            }
            Tick::Done(_) => {
                self.phase = ChartPhase::Settled;
                debug!("chart: settled");
            }
        }
        Some(self.state.progress)
    }

    /// Detach hook: stop observing, drop the pending frame and cancel the run.
    pub fn unmount(&mut self) {
        self.trigger.detach(&mut self.host);
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        if !self.cancel.is_cancelled() {
            self.cancel.cancel();
            self.animator.cancel();
            debug!(phase = ?self.phase, progress = self.state.progress, "chart: unmounted");
        }
    }

    /// Geometry for the current progress.
    pub fn geometry(&self) -> ChartGeometry {
        self.layout.derive(self.samples, self.state.progress)
    }

    /// Scene for the current progress.
    pub fn scene(&self) -> Scene {
        Scene::build(&self.layout, &self.geometry(), &self.theme, &self.style)
    }
}

impl<H: ChartHost> Drop for AnimatedChart<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
