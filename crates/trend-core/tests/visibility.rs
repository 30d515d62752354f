// File: crates/trend-core/tests/visibility.rs
// Purpose: One-shot latch semantics and observer registration hygiene.

mod common;

use common::ScriptedHost;
use trend_core::visibility::{IntersectionEntry, LatchState, RegionHandle, Threshold, VisibilityTrigger};

const REGION: RegionHandle = RegionHandle(42);

#[test]
fn fires_once_then_ignores_everything() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::CHART);
    assert!(latch.attach(&mut host, REGION));

    assert!(latch.on_intersection(&mut host, IntersectionEntry::new(REGION, 0.5)));
    assert!(latch.is_triggered());

    // Leave, re-enter, fully visible: no further transitions.
    for ratio in [0.0, 0.31, 1.0, 0.0, 0.9] {
        assert!(!latch.on_intersection(&mut host, IntersectionEntry::new(REGION, ratio)));
        assert_eq!(latch.state(), LatchState::Triggered);
    }
    assert_eq!(host.active_observers(), 0, "observation released on trigger");
}

#[test]
fn double_attach_registers_one_observer() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::CHART);
    assert!(latch.attach(&mut host, REGION));
    assert!(!latch.attach(&mut host, REGION));
    assert!(!latch.attach(&mut host, RegionHandle(7)));
    assert_eq!(host.observe_calls(), 1);
    assert_eq!(host.active_observers(), 1);
}

#[test]
fn attach_after_trigger_is_a_no_op() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::SECTION);
    latch.attach(&mut host, REGION);
    latch.on_intersection(&mut host, IntersectionEntry::new(REGION, 0.1));
    assert!(!latch.attach(&mut host, REGION));
    assert_eq!(host.observe_calls(), 1);
}

#[test]
fn never_attached_never_fires() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::CHART);
    assert!(!latch.on_intersection(&mut host, IntersectionEntry::new(REGION, 1.0)));
    assert_eq!(latch.state(), LatchState::Unobserved);
    assert_eq!(host.observe_calls(), 0);
}

#[test]
fn detach_cancels_observation() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::CHART);
    latch.attach(&mut host, REGION);
    latch.detach(&mut host);
    assert_eq!(host.active_observers(), 0);
    assert!(!latch.on_intersection(&mut host, IntersectionEntry::new(REGION, 1.0)));
    assert!(!latch.is_triggered());
}

#[test]
fn threshold_reaches_the_host() {
    let mut host = ScriptedHost::new();
    let mut latch = VisibilityTrigger::new(Threshold::new(0.75).unwrap());
    latch.attach(&mut host, REGION);
    let (region, _, ratio) = host.log.borrow().active_observers[0];
    assert_eq!(region, REGION);
    assert_eq!(ratio, 0.75);
}
