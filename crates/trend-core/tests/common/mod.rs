// File: crates/trend-core/tests/common/mod.rs
// Purpose: Scripted host (observer registry, frame queue, manual clock) shared by integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use trend_core::animator::{Clock, FrameHandle, FrameScheduler, ManualClock};
use trend_core::visibility::{IntersectionHost, ObserverId, RegionHandle, Threshold};

#[derive(Debug, Default)]
pub struct HostLog {
    next_id: u64,
    pub observe_calls: usize,
    pub active_observers: Vec<(RegionHandle, ObserverId, f64)>,
    pub frame_requests: usize,
    pub pending_frames: Vec<FrameHandle>,
    pub cancelled_frames: Vec<FrameHandle>,
    pub refuse_frames: bool,
}

/// Clones share the log and the clock, so a test can keep a handle after
/// moving the host into a chart.
#[derive(Clone, Default)]
pub struct ScriptedHost {
    pub clock: ManualClock,
    pub log: Rc<RefCell<HostLog>>,
}

impl ScriptedHost {
    pub fn new() -> Self { Self::default() }

    pub fn advance_ms(&self, ms: u64) { self.clock.advance_ms(ms); }

    pub fn frame_requests(&self) -> usize { self.log.borrow().frame_requests }
    pub fn observe_calls(&self) -> usize { self.log.borrow().observe_calls }
    pub fn active_observers(&self) -> usize { self.log.borrow().active_observers.len() }
    pub fn pending_frames(&self) -> Vec<FrameHandle> { self.log.borrow().pending_frames.clone() }
    pub fn refuse_frames(&self, refuse: bool) { self.log.borrow_mut().refuse_frames = refuse; }
}

impl IntersectionHost for ScriptedHost {
    fn observe(&mut self, region: RegionHandle, threshold: Threshold) -> ObserverId {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        log.observe_calls += 1;
        let id = ObserverId(log.next_id);
        log.active_observers.push((region, id, threshold.ratio()));
        id
    }

    fn unobserve(&mut self, observer: ObserverId) {
        self.log.borrow_mut().active_observers.retain(|(_, id, _)| *id != observer);
    }
}

impl FrameScheduler for ScriptedHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut log = self.log.borrow_mut();
        if log.refuse_frames {
            return None;
        }
        log.next_id += 1;
        log.frame_requests += 1;
        let handle = FrameHandle(log.next_id);
        log.pending_frames.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut log = self.log.borrow_mut();
        log.pending_frames.retain(|h| *h != handle);
        log.cancelled_frames.push(handle);
    }
}

impl Clock for ScriptedHost {
    fn now(&self) -> Duration { self.clock.now() }
}

/// Take the oldest pending frame, as a browser would when it fires a callback.
pub fn take_frame(host: &ScriptedHost) -> Option<FrameHandle> {
    let mut log = host.log.borrow_mut();
    if log.pending_frames.is_empty() {
        None
    } else {
        Some(log.pending_frames.remove(0))
    }
}
