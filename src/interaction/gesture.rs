//! Touch gesture recognition: pinch zoom and single-finger pan with
//! velocity tracking.
//!
//! Pinch zoom is recomputed every move event against the *initial* pinch
//! distance and zoom, never incrementally, so repeated move events cannot
//! drift. A pinch that degenerates to one finger discards its state and
//! re-arms fresh on the next qualifying touch count.

use crate::layout::ContentTransform;

/// Damping applied to the raw pinch scale to avoid jumpy zooming.
const PINCH_DAMPING: f64 = 0.8;
/// Zoom deltas below this are ignored (sub-pixel pinch noise).
const MIN_ZOOM_STEP: f64 = 0.005;
/// Exponential smoothing factor for pan velocity.
const VELOCITY_SMOOTHING: f64 = 0.7;
/// Nominal frame duration used to convert px/ms velocity to px/frame.
const FRAME_MS: f64 = 16.0;

/// One active touch point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Result of feeding a touch-move into the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    None,
    /// Absolute pan target (already offset by the gesture's grab point).
    Pan { x: f64, y: f64 },
    /// Zoom delta anchored at the pinch focus point.
    Zoom { delta: f64, focus: (f64, f64) },
}

#[derive(Debug, Clone, Copy)]
struct PinchState {
    initial_distance: f64,
    initial_zoom: f64,
    focus: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
struct PanState {
    /// Touch position minus pan offset at gesture start.
    grab_x: f64,
    grab_y: f64,
    last_x: f64,
    last_y: f64,
    last_time_ms: f64,
    /// Smoothed velocity in px/ms.
    vx: f64,
    vy: f64,
}

/// Tracks the in-flight touch gesture, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    pinch: Option<PinchState>,
    pan: Option<PanState>,
}

fn distance(a: TouchPoint, b: TouchPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

impl GestureTracker {
    /// Begin tracking from a touch-start event.
    pub fn touch_start(
        &mut self,
        touches: &[TouchPoint],
        transform: &ContentTransform,
        now_ms: f64,
    ) {
        match touches {
            [a, b, ..] => {
                self.pan = None;
                self.pinch = Some(PinchState {
                    initial_distance: distance(*a, *b),
                    initial_zoom: transform.zoom,
                    focus: ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
                });
            }
            [touch] => {
                self.pinch = None;
                self.pan = Some(PanState {
                    grab_x: touch.x - transform.pan_x,
                    grab_y: touch.y - transform.pan_y,
                    last_x: touch.x,
                    last_y: touch.y,
                    last_time_ms: now_ms,
                    vx: 0.0,
                    vy: 0.0,
                });
            }
            [] => {
                self.pinch = None;
                self.pan = None;
            }
        }
    }

    /// Feed a touch-move event, producing the resulting pan/zoom update.
    pub fn touch_move(
        &mut self,
        touches: &[TouchPoint],
        transform: &ContentTransform,
        now_ms: f64,
    ) -> GestureUpdate {
        match touches {
            [a, b, ..] => {
                let Some(pinch) = self.pinch else {
                    // Second finger landed without a fresh touch-start; arm now.
                    self.touch_start(touches, transform, now_ms);
                    return GestureUpdate::None;
                };
                if pinch.initial_distance <= 0.0 {
                    return GestureUpdate::None;
                }
                let scale = distance(*a, *b) / pinch.initial_distance;
                let damped = 1.0 + (scale - 1.0) * PINCH_DAMPING;
                let new_zoom = (pinch.initial_zoom * damped)
                    .clamp(crate::layout::ZOOM_MIN, crate::layout::ZOOM_MAX);
                let delta = new_zoom - transform.zoom;
                if delta.abs() > MIN_ZOOM_STEP {
                    GestureUpdate::Zoom {
                        delta,
                        focus: pinch.focus,
                    }
                } else {
                    GestureUpdate::None
                }
            }
            [touch] => {
                let Some(pan) = self.pan.as_mut() else {
                    // Pinch collapsed to one finger; re-arm as a pan.
                    self.touch_start(touches, transform, now_ms);
                    return GestureUpdate::None;
                };
                let dt = now_ms - pan.last_time_ms;
                if dt > 0.0 {
                    let raw_vx = (touch.x - pan.last_x) / dt;
                    let raw_vy = (touch.y - pan.last_y) / dt;
                    pan.vx = raw_vx * VELOCITY_SMOOTHING + pan.vx * (1.0 - VELOCITY_SMOOTHING);
                    pan.vy = raw_vy * VELOCITY_SMOOTHING + pan.vy * (1.0 - VELOCITY_SMOOTHING);
                    pan.last_time_ms = now_ms;
                    pan.last_x = touch.x;
                    pan.last_y = touch.y;
                }
                GestureUpdate::Pan {
                    x: touch.x - pan.grab_x,
                    y: touch.y - pan.grab_y,
                }
            }
            [] => GestureUpdate::None,
        }
    }

    /// Finish the gesture as fingers lift. Returns the release velocity in
    /// px/frame once the last finger is up, for hand-off to momentum.
    pub fn touch_end(&mut self, remaining_touches: usize) -> Option<(f64, f64)> {
        if remaining_touches < 2 {
            self.pinch = None;
        }
        if remaining_touches == 0 {
            let released = self.pan.take()?;
            return Some((released.vx * FRAME_MS, released.vy * FRAME_MS));
        }
        None
    }

    /// Drop any in-flight gesture state (mode takeover, row removal).
    pub fn reset(&mut self) {
        self.pinch = None;
        self.pan = None;
    }

    /// Whether a pinch is currently tracked.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Whether a single-finger pan is currently tracked.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }
}
