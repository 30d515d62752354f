// File: crates/trend-core/src/visibility.rs
// Summary: One-shot visibility latch driven by host intersection observations.
// Notes:
// - The latch is an explicit state enum; `Triggered` has no outgoing edge.
// - The host owns the real observer (IntersectionObserver, polling loop, ...).
//   The latch only tells it when to start and stop observing.

use tracing::debug;

use crate::error::{Result, TrendError};
use crate::types::{CHART_THRESHOLD, SECTION_THRESHOLD};

/// Visible fraction of a region required to fire, validated to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Threshold used by the trend chart.
    pub const CHART: Threshold = Threshold(CHART_THRESHOLD);
    /// Threshold used by generic section reveals.
    pub const SECTION: Threshold = Threshold(SECTION_THRESHOLD);

    pub fn new(ratio: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(TrendError::InvalidThreshold(ratio))
        }
    }

    #[inline]
    pub fn ratio(self) -> f64 { self.0 }

    #[inline]
    pub fn is_met_by(self, visible_fraction: f64) -> bool { visible_fraction >= self.0 }
}

impl Default for Threshold {
    fn default() -> Self { Threshold::SECTION }
}

/// Opaque handle for a display region, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionHandle(pub u64);

/// Host-issued id of an active observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// A single intersection report from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub region: RegionHandle,
    /// Visible fraction of the region in `[0, 1]`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(region: RegionHandle, ratio: f64) -> Self { Self { region, ratio } }
}

/// Host-side intersection observation.
pub trait IntersectionHost {
    fn observe(&mut self, region: RegionHandle, threshold: Threshold) -> ObserverId;
    fn unobserve(&mut self, observer: ObserverId);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LatchState {
    /// No region attached yet (or detached before firing).
    Unobserved,
    Observing { region: RegionHandle, observer: ObserverId },
    /// Terminal.
    Triggered,
}

/// Fires once, the first time an attached region is visible enough.
#[derive(Clone, Debug)]
pub struct VisibilityTrigger {
    threshold: Threshold,
    state: LatchState,
}

impl VisibilityTrigger {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold, state: LatchState::Unobserved }
    }

    pub fn threshold(&self) -> Threshold { self.threshold }
    pub fn state(&self) -> LatchState { self.state }
    pub fn is_triggered(&self) -> bool { self.state == LatchState::Triggered }
    pub fn is_observing(&self) -> bool { matches!(self.state, LatchState::Observing { .. }) }

    /// Start observing `region`. Returns `false` without touching the host when
    /// already observing or already triggered.
    pub fn attach<H: IntersectionHost + ?Sized>(&mut self, host: &mut H, region: RegionHandle) -> bool {
        match self.state {
            LatchState::Unobserved => {
                let observer = host.observe(region, self.threshold);
                debug!(?region, ?observer, threshold = self.threshold.ratio(), "visibility: observing");
                self.state = LatchState::Observing { region, observer };
                true
            }
            LatchState::Observing { .. } | LatchState::Triggered => false,
        }
    }

    /// Feed one host report. Returns `true` exactly once: on the transition to
    /// `Triggered`. The observation is released at that point.
    pub fn on_intersection<H: IntersectionHost + ?Sized>(&mut self, host: &mut H, entry: IntersectionEntry) -> bool {
        let LatchState::Observing { region, observer } = self.state else { return false };
        if entry.region != region || !self.threshold.is_met_by(entry.ratio) {
            return false;
        }
        host.unobserve(observer);
        self.state = LatchState::Triggered;
        debug!(?region, ratio = entry.ratio, "visibility: triggered");
        true
    }

    /// Stop observing. A latch that already fired stays fired.
    pub fn detach<H: IntersectionHost + ?Sized>(&mut self, host: &mut H) {
        if let LatchState::Observing { region, observer } = self.state {
            host.unobserve(observer);
            self.state = LatchState::Unobserved;
            debug!(?region, "visibility: detached before trigger");
        }
    }
}
