//! The per-frame clock.
//!
//! Everything time-based in the grid (momentum decay, long-press arming,
//! recent-scan expiry) advances through [`GridState::tick`] with an explicit
//! timestamp. On the web target a `requestAnimationFrame` loop feeds it.

use crate::interaction::{DragEvent, InteractionMode};

use super::GridState;

impl GridState {
    /// Advance all time-based behavior to `now_ms`. Returns `true` while
    /// anything is still animating or waiting on a timer, so the driver
    /// knows another frame is worth scheduling.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(momentum) = self.momentum.as_mut() {
            if !momentum.step(&mut self.transform) {
                self.momentum = None;
            }
        }

        if let DragEvent::Lifted { .. } = self.drag.tick(now_ms) {
            if self.mode.allows(InteractionMode::RowDrag) {
                self.mode = InteractionMode::RowDrag;
            } else {
                self.drag.reset();
            }
        }

        self.copy.tick(now_ms);
        self.scan.tick(now_ms);

        self.momentum.is_some()
            || self.drag.is_armed()
            || self.copy.has_pending_press()
            || self.scan.has_pending_expiry()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::start_frame_driver;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::super::GridState;

    /// Start a `requestAnimationFrame` loop that keeps ticking the state.
    /// The loop runs for the lifetime of the page; ticking an idle state
    /// is a handful of branch checks.
    pub(crate) fn start_frame_driver(state: &Rc<RefCell<GridState>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let state = Rc::clone(state);
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let handle_inner = Rc::clone(&handle);

        let closure = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            {
                let mut s = state.borrow_mut();
                let was_dragging = s.mode() == crate::interaction::InteractionMode::RowDrag;
                s.tick(now_ms);
                if !was_dragging && s.mode() == crate::interaction::InteractionMode::RowDrag {
                    crate::viewer::clipboard::vibrate(50);
                }
            }
            if let Some(window) = web_sys::window() {
                if let Some(closure) = handle_inner.borrow().as_ref() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        });

        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        *handle.borrow_mut() = Some(closure);
        Ok(())
    }
}
