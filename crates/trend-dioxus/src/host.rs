// File: crates/trend-dioxus/src/host.rs
// Summary: Polling host: records what the chart asks for so a UI loop can service it.

use trend_core::animator::{Clock, FrameHandle, FrameScheduler, SystemClock};
use trend_core::visibility::{IntersectionHost, ObserverId, RegionHandle, Threshold};

/// Host for frameworks without a native intersection observer: a periodic loop
/// measures the region, reports the visible fraction and fires granted frames.
#[derive(Debug, Default)]
pub struct PollingHost {
    clock: SystemClock,
    next_id: u64,
    observing: Option<(RegionHandle, ObserverId, Threshold)>,
    frame: Option<FrameHandle>,
}

impl PollingHost {
    pub fn new() -> Self { Self::default() }

    /// Region the loop should measure, if any.
    pub fn observed_region(&self) -> Option<RegionHandle> {
        self.observing.map(|(region, _, _)| region)
    }

    pub fn observed_threshold(&self) -> Option<Threshold> {
        self.observing.map(|(_, _, threshold)| threshold)
    }

    /// Region to report for a measured `ratio`, only when the report would
    /// fire the latch. Lets the loop skip writes while the chart waits.
    pub fn qualifying_region(&self, ratio: f64) -> Option<RegionHandle> {
        match self.observing {
            Some((region, _, threshold)) if threshold.is_met_by(ratio) => Some(region),
            _ => None,
        }
    }

    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Hand the granted frame to the loop; at most one is outstanding.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl IntersectionHost for PollingHost {
    fn observe(&mut self, region: RegionHandle, threshold: Threshold) -> ObserverId {
        let id = ObserverId(self.next_id());
        self.observing = Some((region, id, threshold));
        id
    }

    fn unobserve(&mut self, observer: ObserverId) {
        if matches!(self.observing, Some((_, id, _)) if id == observer) {
            self.observing = None;
        }
    }
}

impl FrameScheduler for PollingHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let handle = FrameHandle(self.next_id());
        self.frame = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
    }
}

impl Clock for PollingHost {
    fn now(&self) -> std::time::Duration { self.clock.now() }
}

/// Fraction of a vertical span `[top, bottom]` inside a viewport `[0, viewport_height]`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let shown = bottom.min(viewport_height) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}
