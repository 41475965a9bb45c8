//! Momentum panning after a touch release.
//!
//! Velocity decays by a friction constant every animation frame. When the
//! pan would exceed content bounds, the overshoot is scaled elastically and
//! velocity takes extra damping, producing a bounce-back instead of a hard
//! stop at the edge.

use super::ContentTransform;

/// Per-frame velocity multiplier.
const FRICTION: f64 = 0.95;
/// Below this speed (px/frame) the animation stops.
const STOP_SPEED: f64 = 0.1;
/// Release speed (px/frame) required to start momentum at all.
const START_SPEED: f64 = 0.5;
/// Velocity scale applied at release for a natural hand-off.
const RELEASE_SCALE: f64 = 0.8;
/// Fraction of out-of-bounds overshoot that is kept visible.
const ELASTIC: f64 = 0.15;
/// Extra velocity damping while out of bounds.
const OVERSHOOT_DAMPING: f64 = 0.92;

/// Active momentum animation state.
#[derive(Debug, Clone, Copy)]
pub struct Momentum {
    vx: f64,
    vy: f64,
}

impl Momentum {
    /// Start momentum from a release velocity, or `None` when the release
    /// was too slow to warrant an animation.
    #[must_use]
    pub fn from_release(vx: f64, vy: f64) -> Option<Self> {
        let speed = (vx * vx + vy * vy).sqrt();
        if speed > START_SPEED {
            Some(Self {
                vx: vx * RELEASE_SCALE,
                vy: vy * RELEASE_SCALE,
            })
        } else {
            None
        }
    }

    /// Advance one animation frame. Returns `false` once velocity has
    /// decayed below the stop threshold; the caller then drops the momentum
    /// and the transform snaps back inside its bounds.
    pub fn step(&mut self, transform: &mut ContentTransform) -> bool {
        if self.vx.abs() < STOP_SPEED && self.vy.abs() < STOP_SPEED {
            transform.clamp_pan();
            return false;
        }

        let (min_x, min_y) = transform.pan_bounds();
        let new_x = transform.pan_x + self.vx;
        let new_y = transform.pan_y + self.vy;

        transform.pan_x = if new_x > 0.0 {
            self.vx *= OVERSHOOT_DAMPING;
            new_x * ELASTIC
        } else if new_x < min_x {
            self.vx *= OVERSHOOT_DAMPING;
            min_x + (new_x - min_x) * ELASTIC
        } else {
            new_x
        };

        transform.pan_y = if new_y > 0.0 {
            self.vy *= OVERSHOOT_DAMPING;
            new_y * ELASTIC
        } else if new_y < min_y {
            self.vy *= OVERSHOOT_DAMPING;
            min_y + (new_y - min_y) * ELASTIC
        } else {
            new_y
        };

        self.vx *= FRICTION;
        self.vy *= FRICTION;
        true
    }
}
