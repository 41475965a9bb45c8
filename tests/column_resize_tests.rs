//! Column resize: width invariants and exclusivity with pan gestures.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

mod common;

use common::Recording;
use ordergrid::interaction::{InteractionMode, TouchPoint};
use ordergrid::layout::{ColumnKey, MAX_COLUMN_WIDTH_PCT};
use ordergrid::GridState;

const CONTAINER_WIDTH: f64 = 1000.0;

const ALL_COLUMNS: [ColumnKey; 7] = [
    ColumnKey::Code,
    ColumnKey::Client,
    ColumnKey::Phone,
    ColumnKey::Price,
    ColumnKey::Status,
    ColumnKey::Comment,
    ColumnKey::Commission,
];

#[test]
fn widths_stay_within_min_and_max_after_any_drag() {
    let mut state = GridState::new();

    // Drag far right, then far left.
    assert!(state.begin_column_resize(ColumnKey::Client, 200.0));
    state.column_resize_move(5000.0, CONTAINER_WIDTH);
    state.end_column_resize();
    assert_eq!(state.columns.width_pct(ColumnKey::Client), MAX_COLUMN_WIDTH_PCT);

    assert!(state.begin_column_resize(ColumnKey::Client, 200.0));
    state.column_resize_move(-5000.0, CONTAINER_WIDTH);
    state.end_column_resize();
    assert_eq!(
        state.columns.width_pct(ColumnKey::Client),
        ColumnKey::Client.min_width_pct()
    );

    for column in ALL_COLUMNS {
        let width = state.columns.width_pct(column);
        assert!(
            width >= column.min_width_pct() && width <= MAX_COLUMN_WIDTH_PCT,
            "{column:?} out of range: {width}"
        );
    }
}

#[test]
fn resize_delta_is_relative_to_drag_start() {
    let mut state = GridState::new();
    let initial = state.columns.width_pct(ColumnKey::Phone);

    assert!(state.begin_column_resize(ColumnKey::Phone, 400.0));
    // Jitter back and forth; only the distance from the start matters.
    state.column_resize_move(500.0, CONTAINER_WIDTH);
    state.column_resize_move(300.0, CONTAINER_WIDTH);
    state.column_resize_move(450.0, CONTAINER_WIDTH);
    state.end_column_resize();

    let width = state.columns.width_pct(ColumnKey::Phone);
    assert!((width - (initial + 5.0)).abs() < 1e-9, "width: {width}");
}

#[test]
fn active_resize_suppresses_touch_pan() {
    let mut state = GridState::new();
    state.transform.resize_content(2000.0, 4000.0);

    assert!(state.begin_column_resize(ColumnKey::Code, 100.0));
    assert_eq!(state.mode(), InteractionMode::ColumnResize);

    state.touch_start(&[TouchPoint { x: 400.0, y: 300.0 }], 0.0);
    state.touch_move(&[TouchPoint { x: 300.0, y: 200.0 }], 16.0);
    assert_eq!(state.transform.pan_x, 0.0);
    assert_eq!(state.transform.pan_y, 0.0);

    state.end_column_resize();
    assert_eq!(state.mode(), InteractionMode::Idle);
}

#[test]
fn stray_blur_does_not_unlock_pan_mid_resize() {
    let mut state = GridState::new();
    state.transform.resize_content(2000.0, 4000.0);
    let sink = Recording::new();

    assert!(state.begin_column_resize(ColumnKey::Code, 100.0));

    // Focus churn with no edit buffer open must leave the resize alone.
    state.edit_blur(&sink);
    assert_eq!(state.mode(), InteractionMode::ColumnResize);

    state.touch_start(&[TouchPoint { x: 400.0, y: 300.0 }], 0.0);
    state.touch_move(&[TouchPoint { x: 300.0, y: 200.0 }], 16.0);
    assert_eq!((state.transform.pan_x, state.transform.pan_y), (0.0, 0.0));
    assert!(sink.take().is_empty());
}

#[test]
fn pan_in_progress_yields_to_resize() {
    let mut state = GridState::new();
    state.transform.resize_content(2000.0, 4000.0);
    state.touch_start(&[TouchPoint { x: 400.0, y: 300.0 }], 0.0);
    assert_eq!(state.mode(), InteractionMode::Pan);

    assert!(state.begin_column_resize(ColumnKey::Code, 100.0));
    assert_eq!(state.mode(), InteractionMode::ColumnResize);

    // The abandoned pan no longer moves the content.
    state.touch_move(&[TouchPoint { x: 200.0, y: 100.0 }], 16.0);
    assert_eq!(state.transform.pan_x, 0.0);
}
