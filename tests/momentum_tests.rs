//! Momentum panning: friction decay, elastic edge bounce, and cancellation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

mod common;

use common::{order, Recording};
use ordergrid::editor::EditField;
use ordergrid::interaction::TouchPoint;
use ordergrid::layout::{ContentTransform, Momentum};
use ordergrid::GridState;

fn scrollable_state() -> GridState {
    let mut state = GridState::new();
    state.transform.resize_viewport(800.0, 600.0);
    state.transform.resize_content(2000.0, 4000.0);
    state
}

/// Drive a fast upward swipe: press, several quick moves, release.
fn swipe_up(state: &mut GridState) {
    state.touch_start(&[TouchPoint { x: 200.0, y: 500.0 }], 0.0);
    for i in 1..=5 {
        let t = f64::from(i) * 16.0;
        let y = 500.0 - f64::from(i) * 40.0;
        state.touch_move(&[TouchPoint { x: 200.0, y }], t);
    }
    state.touch_end(0);
}

#[test]
fn slow_release_starts_no_momentum() {
    assert!(Momentum::from_release(0.2, 0.2).is_none());
    assert!(Momentum::from_release(0.0, 0.0).is_none());
}

#[test]
fn fast_release_decays_with_friction() {
    let mut t = ContentTransform::new();
    t.resize_content(2000.0, 4000.0);
    t.set_pan(-100.0, -500.0);

    let mut momentum = Momentum::from_release(0.0, -20.0).expect("fast enough");
    let before = t.pan_y;
    assert!(momentum.step(&mut t));
    let first_delta = before - t.pan_y;
    assert!(first_delta > 0.0, "pan should keep moving up");

    let before = t.pan_y;
    assert!(momentum.step(&mut t));
    let second_delta = before - t.pan_y;
    assert!(
        second_delta < first_delta,
        "decay: {second_delta} < {first_delta}"
    );
}

#[test]
fn momentum_stops_and_leaves_pan_in_bounds() {
    let mut t = ContentTransform::new();
    t.resize_content(2000.0, 4000.0);

    let mut momentum = Momentum::from_release(35.0, -35.0).expect("fast enough");
    let mut steps = 0;
    while momentum.step(&mut t) {
        steps += 1;
        assert!(steps < 10_000, "momentum never stopped");
    }
    let (min_x, min_y) = t.pan_bounds();
    assert!(t.pan_x <= 0.0 && t.pan_x >= min_x);
    assert!(t.pan_y <= 0.0 && t.pan_y >= min_y);
}

#[test]
fn overshoot_is_elastic_not_hard_clamped() {
    let mut t = ContentTransform::new();
    t.resize_content(2000.0, 4000.0);
    // Heading out of bounds past the top-left edge.
    let mut momentum = Momentum::from_release(40.0, 0.0).expect("fast enough");
    momentum.step(&mut t);
    assert!(t.pan_x > 0.0, "overshoot should be visible: {}", t.pan_x);
    assert!(t.pan_x < 40.0, "but scaled down: {}", t.pan_x);
}

#[test]
fn swipe_release_produces_momentum_frames() {
    let mut state = scrollable_state();
    swipe_up(&mut state);

    let pan_after_release = state.transform.pan_y;
    assert!(state.tick(96.0), "momentum should request more frames");
    assert!(
        state.transform.pan_y < pan_after_release,
        "momentum keeps panning up"
    );
}

#[test]
fn new_touch_cancels_momentum() {
    let mut state = scrollable_state();
    swipe_up(&mut state);
    assert!(state.tick(96.0));

    state.touch_start(&[TouchPoint { x: 100.0, y: 100.0 }], 120.0);
    let pan = state.transform.pan_y;
    state.tick(136.0);
    assert_eq!(state.transform.pan_y, pan, "touch must stop the animation");
}

#[test]
fn entering_edit_mode_cancels_momentum() {
    let mut state = scrollable_state();
    state.set_rows(vec![order("a")], 0.0);
    swipe_up(&mut state);
    assert!(state.tick(96.0));

    let sink = Recording::new();
    state.begin_edit("a", EditField::Comment, &sink);
    let pan = state.transform.pan_y;
    state.tick(200.0);
    assert_eq!(state.transform.pan_y, pan);
}
