// File: crates/trend-core/src/animator.rs
// Summary: Timed eased progress animator, clocks, cancellation and frame scheduling seams.
// Notes:
// - Every tick recomputes from absolute elapsed time, so dropped frames never
//   accumulate drift.
// - All state is single-threaded (`Rc<Cell<_>>`); the host event loop is the only writer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::easing::{ease_in_out_cubic, raw_ratio};
use crate::error::{Result, TrendError};
use crate::types::DURATION_MS;

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration { self.origin.elapsed() }
}

/// Hand-driven clock for tests and offline frame rendering. Clones share time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    pub fn new() -> Self { Self::default() }
    pub fn set(&self, t: Duration) { self.0.set(t); }
    pub fn advance(&self, dt: Duration) { self.0.set(self.0.get() + dt); }
    pub fn advance_ms(&self, ms: u64) { self.advance(Duration::from_millis(ms)); }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration { self.0.get() }
}

/// Shared cancellation flag. Clones observe the same flag; cancelling is permanent.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self { Self::default() }
    pub fn cancel(&self) { self.0.set(true); }
    pub fn is_cancelled(&self) -> bool { self.0.get() }
}

/// Host-issued id of a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host frame scheduling (`requestAnimationFrame` in a browser).
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` means the host refused;
    /// the animation then simply stalls where it is.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Progress published by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Linear completion in `[0, 1]`.
    pub raw: f64,
    /// Eased completion in `[0, 1]`.
    pub progress: f64,
}

impl Frame {
    fn at(raw: f64) -> Self { Self { raw, progress: ease_in_out_cubic(raw) } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// More ticks are wanted.
    Continue(Frame),
    /// Final tick (raw reached 1). Nothing further should be scheduled.
    Done(Frame),
}

impl Tick {
    pub fn frame(&self) -> Frame {
        match *self { Tick::Continue(f) | Tick::Done(f) => f }
    }
    pub fn is_done(&self) -> bool { matches!(self, Tick::Done(_)) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatorState {
    /// Not armed; ticks produce nothing.
    Idle,
    Running { start: Duration, last_raw: f64 },
    Finished,
    Cancelled,
}

/// Drives progress from 0 to 1 over a fixed duration once armed.
#[derive(Clone, Debug)]
pub struct ProgressAnimator {
    duration: Duration,
    state: AnimatorState,
}

impl ProgressAnimator {
    pub fn new(duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(TrendError::InvalidDuration);
        }
        Ok(Self { duration, state: AnimatorState::Idle })
    }

    pub fn duration(&self) -> Duration { self.duration }
    pub fn state(&self) -> AnimatorState { self.state }
    pub fn is_running(&self) -> bool { matches!(self.state, AnimatorState::Running { .. }) }

    /// Start the run at `now`. Only an idle animator can be armed.
    pub fn arm(&mut self, now: Duration) -> bool {
        if self.state != AnimatorState::Idle {
            return false;
        }
        debug!(duration_ms = self.duration.as_millis() as u64, "animator: armed");
        self.state = AnimatorState::Running { start: now, last_raw: 0.0 };
        true
    }

    /// Compute the frame for `now`. Yields `None` unless running.
    pub fn tick(&mut self, now: Duration) -> Option<Tick> {
        let AnimatorState::Running { start, last_raw } = self.state else { return None };
        // A clock stepping backwards must not pull progress back.
        let raw = raw_ratio(now.saturating_sub(start), self.duration).max(last_raw);
        let frame = Frame::at(raw);
        trace!(raw, progress = frame.progress, "animator: tick");
        if raw >= 1.0 {
            self.state = AnimatorState::Finished;
            debug!("animator: finished");
            Some(Tick::Done(frame))
        } else {
            self.state = AnimatorState::Running { start, last_raw: raw };
            Some(Tick::Continue(frame))
        }
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!("animator: cancelled mid-run");
        }
        if self.state != AnimatorState::Finished {
            self.state = AnimatorState::Cancelled;
        }
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self { duration: Duration::from_millis(DURATION_MS), state: AnimatorState::Idle }
    }
}

/// One scheduling step: honour the token, then tick against the clock.
pub fn step<C: Clock + ?Sized>(animator: &mut ProgressAnimator, clock: &C, token: &CancelToken) -> Option<Tick> {
    if token.is_cancelled() {
        animator.cancel();
        return None;
    }
    animator.tick(clock.now())
}

/// Iterator over the progress values of one run. Each `next` is one tick;
/// it ends after the tick where raw reaches 1 or once the token is cancelled.
pub struct ProgressRun<'a, C: Clock + ?Sized> {
    animator: &'a mut ProgressAnimator,
    clock: &'a C,
    token: CancelToken,
}

impl<'a, C: Clock + ?Sized> ProgressRun<'a, C> {
    pub fn new(animator: &'a mut ProgressAnimator, clock: &'a C, token: CancelToken) -> Self {
        Self { animator, clock, token }
    }
}

impl<C: Clock + ?Sized> Iterator for ProgressRun<'_, C> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        step(&mut *self.animator, self.clock, &self.token).map(|t| t.frame())
    }
}
