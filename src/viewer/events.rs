//! Event handling for the grid.
//!
//! The pure handlers on [`GridState`] arbitrate between the competing
//! interaction modes; the wasm layer below them only translates DOM events
//! into these calls.

use crate::callbacks::{dispatch_edit, GridCallbacks};
use crate::editor::EditField;
use crate::interaction::{
    move_row_by, reorder_rows, CopyIndicator, DragEvent, GestureUpdate, InteractionMode,
    TouchPoint,
};
use crate::layout::{ColumnKey, Momentum};
use crate::status_menu::MenuOutcome;
use crate::types::Status;

use super::GridState;

/// Zoom step for ctrl/cmd keyboard and wheel zooming.
const ZOOM_STEP: f64 = 0.1;

/// A keyboard event as seen by the grid.
#[derive(Debug, Clone, Copy)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub ctrl_or_cmd: bool,
    pub shift: bool,
}

impl GridState {
    // --- pan/zoom gestures ---

    /// Touch landed on the content layer.
    pub fn touch_start(&mut self, touches: &[TouchPoint], now_ms: f64) {
        if self.mode.blocks_pan_zoom() {
            return;
        }
        // A fresh touch always interrupts a running momentum animation.
        self.momentum = None;
        self.gesture.touch_start(touches, &self.transform, now_ms);
        self.mode = match touches.len() {
            0 => InteractionMode::Idle,
            1 => InteractionMode::Pan,
            _ => InteractionMode::Pinch,
        };
    }

    /// Touch moved on the content layer.
    pub fn touch_move(&mut self, touches: &[TouchPoint], now_ms: f64) {
        if self.mode.blocks_pan_zoom() {
            return;
        }
        match self.gesture.touch_move(touches, &self.transform, now_ms) {
            GestureUpdate::Pan { x, y } => {
                self.copy.moved();
                self.transform.set_pan(x, y);
            }
            GestureUpdate::Zoom { delta, focus } => {
                self.copy.moved();
                self.transform.zoom_at_point(delta, Some(focus));
            }
            GestureUpdate::None => {}
        }
    }

    /// Fingers lifted from the content layer.
    pub fn touch_end(&mut self, remaining_touches: usize) {
        if self.mode.blocks_pan_zoom() {
            if remaining_touches == 0 {
                self.gesture.reset();
            }
            return;
        }
        if let Some((vx, vy)) = self.gesture.touch_end(remaining_touches) {
            self.momentum = Momentum::from_release(vx, vy);
        }
        self.mode = match remaining_touches {
            0 => InteractionMode::Idle,
            1 => InteractionMode::Pan,
            _ => InteractionMode::Pinch,
        };
    }

    /// Ctrl/cmd wheel zooms at the pointer; plain wheel is left to the
    /// host's scroll handling. Returns whether the event was consumed.
    pub fn wheel(&mut self, delta_y: f64, ctrl_or_cmd: bool, x: f64, y: f64) -> bool {
        if !ctrl_or_cmd || self.mode.blocks_pan_zoom() {
            return false;
        }
        let delta = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        self.transform.zoom_at_point(delta, Some((x, y)));
        true
    }

    /// Global keyboard shortcuts. Returns whether the event was consumed.
    pub fn key(&mut self, input: KeyInput<'_>, callbacks: &dyn GridCallbacks) -> bool {
        if self.editor.is_editing() {
            // Keys inside the edit buffer route through `edit_key`.
            return false;
        }
        if input.ctrl_or_cmd {
            match input.key {
                "+" | "=" => {
                    self.transform.zoom_at_point(ZOOM_STEP, None);
                    return true;
                }
                "-" => {
                    self.transform.zoom_at_point(-ZOOM_STEP, None);
                    return true;
                }
                "0" => {
                    self.transform.reset_view();
                    return true;
                }
                _ => {}
            }
        }
        match input.key {
            "ArrowUp" => self.move_enabled_row(-1, callbacks),
            "ArrowDown" => self.move_enabled_row(1, callbacks),
            _ => false,
        }
    }

    /// Keyboard reorder of the drag-enabled row, same array-move semantics
    /// as a drop.
    fn move_enabled_row(&mut self, delta: isize, callbacks: &dyn GridCallbacks) -> bool {
        let Some(row_id) = self.drag.enabled_row().map(str::to_owned) else {
            return false;
        };
        if let Some(reordered) = move_row_by(&self.rows, &row_id, delta) {
            callbacks.reorder(&reordered);
            self.rows = reordered;
        }
        true
    }

    // --- column resize ---

    /// Begin a header-handle resize. Suppresses pan/zoom for its duration.
    pub fn begin_column_resize(&mut self, column: ColumnKey, pointer_x: f64) -> bool {
        if !self.mode.allows(InteractionMode::ColumnResize) {
            return false;
        }
        if !self.columns.begin_resize(column, pointer_x) {
            return false;
        }
        self.momentum = None;
        self.gesture.reset();
        self.mode = InteractionMode::ColumnResize;
        true
    }

    pub fn column_resize_move(&mut self, pointer_x: f64, container_width: f64) {
        self.columns.update_resize(pointer_x, container_width);
    }

    pub fn end_column_resize(&mut self) {
        if self.columns.is_resizing() {
            self.columns.end_resize();
            self.mode = InteractionMode::Idle;
        }
    }

    // --- status menu / row drag ---

    /// Open the status menu; this is also the gesture that arms dragging
    /// for the row.
    pub fn open_status_menu(&mut self, row_id: &str) {
        if self.find_row(row_id).is_none() {
            return;
        }
        self.menu.open(row_id);
        self.drag.set_drag_enabled(Some(row_id));
    }

    /// Pick a status from the open menu.
    pub fn select_status(&mut self, status: Status, callbacks: &dyn GridCallbacks) {
        let Some(row_id) = self.menu.open_row().map(str::to_owned) else {
            return;
        };
        let code = self
            .find_row(&row_id)
            .map(|o| o.code.clone())
            .unwrap_or_default();
        match self.menu.select(status, &code) {
            MenuOutcome::Applied { row_id, status } => {
                callbacks.update_status(&row_id, status);
                self.disarm_drag();
            }
            MenuOutcome::NeedsConfirmation { .. } | MenuOutcome::None => {}
        }
    }

    /// Confirm the pending delivered status.
    pub fn confirm_delivery(&mut self, callbacks: &dyn GridCallbacks) {
        if let MenuOutcome::Applied { row_id, status } = self.menu.confirm() {
            callbacks.update_status(&row_id, status);
            self.disarm_drag();
        }
    }

    /// Disable row dragging and leave `RowDrag` mode if it was active.
    /// Other modes (an open edit buffer, a resize drag) keep the pointer
    /// stream; stomping them here would unlock gestures they suppress.
    fn disarm_drag(&mut self) {
        self.drag.set_drag_enabled(None);
        if self.mode == InteractionMode::RowDrag {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Dismiss the menu or confirmation dialog without applying.
    pub fn cancel_status_menu(&mut self) {
        self.menu.cancel();
        self.disarm_drag();
    }

    /// Pointer pressed on a row (drag arming).
    pub fn row_pointer_down(&mut self, row_id: &str, x: f64, y: f64, now_ms: f64) {
        if self.mode.blocks_pan_zoom() {
            return;
        }
        self.drag.pointer_down(row_id, x, y, now_ms);
    }

    /// Pointer moved while a row press is armed or lifted.
    pub fn row_pointer_move(&mut self, x: f64, y: f64) -> DragEvent {
        let event = self.drag.pointer_move(x, y);
        if event == DragEvent::Cancelled && self.mode == InteractionMode::RowDrag {
            self.mode = InteractionMode::Idle;
        }
        event
    }

    /// Pointer released; a lifted row over a target triggers the reorder.
    /// Returns whether a reorder was reported.
    pub fn row_pointer_up(&mut self, target_id: Option<&str>, callbacks: &dyn GridCallbacks) -> bool {
        let event = self.drag.pointer_up(target_id);
        if self.mode == InteractionMode::RowDrag {
            self.mode = InteractionMode::Idle;
        }
        if let DragEvent::Dropped {
            source_id,
            target_id: Some(target_id),
        } = event
        {
            if let Some(reordered) = reorder_rows(&self.rows, &source_id, &target_id) {
                callbacks.reorder(&reordered);
                self.rows = reordered;
                return true;
            }
        }
        false
    }

    // --- cell editing ---

    /// Open an edit buffer on a cell, seeded from the row's current value.
    pub fn begin_edit(&mut self, row_id: &str, field: EditField, callbacks: &dyn GridCallbacks) {
        let Some(order) = self.find_row(row_id) else {
            return;
        };
        let initial = match field {
            EditField::Phone => order.phone.clone(),
            EditField::Comment => order.comment.clone(),
            EditField::Price => crate::numfmt::format_price(order.price),
            EditField::Commission => {
                let commission =
                    crate::numfmt::effective_commission(order, self.default_commission);
                crate::numfmt::format_price(commission)
            }
        };
        // Entering edit mode trumps every gesture in flight.
        self.momentum = None;
        self.gesture.reset();
        self.drag.reset();
        self.copy.dismiss();
        if let Some(command) = self.editor.open(row_id, field, &initial) {
            dispatch_edit(callbacks, &command);
        }
        self.mode = InteractionMode::CellEdit;
    }

    /// Text typed into the open edit buffer.
    pub fn edit_input(&mut self, text: &str, callbacks: &dyn GridCallbacks) {
        if let Some(command) = self.editor.input(text) {
            dispatch_edit(callbacks, &command);
        }
    }

    /// Key pressed inside the open edit buffer.
    pub fn edit_key(&mut self, key: &str, shift: bool, callbacks: &dyn GridCallbacks) {
        if let Some(command) = self.editor.key(key, shift) {
            dispatch_edit(callbacks, &command);
        }
        if self.mode == InteractionMode::CellEdit && !self.editor.is_editing() {
            self.mode = InteractionMode::Idle;
        }
    }

    /// The edit buffer lost focus. A blur with no buffer open (the host
    /// relays focus churn freely) must not touch whatever mode is active.
    pub fn edit_blur(&mut self, callbacks: &dyn GridCallbacks) {
        if let Some(command) = self.editor.commit() {
            dispatch_edit(callbacks, &command);
        }
        if self.mode == InteractionMode::CellEdit {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Toggle a priority token on the open comment edit.
    pub fn apply_priority(&mut self, priority: u8, callbacks: &dyn GridCallbacks) {
        if let Some(command) = self.editor.apply_priority(priority) {
            dispatch_edit(callbacks, &command);
        }
    }

    // --- long-press copy ---

    /// Press started on a text cell.
    pub fn cell_press(&mut self, text: &str, x: f64, y: f64, now_ms: f64) {
        if self.mode.blocks_pan_zoom() {
            return;
        }
        self.copy.press(text, x, y, now_ms);
    }

    /// Press on a text cell released before the hold elapsed.
    pub fn cell_release(&mut self) {
        self.copy.release();
    }

    /// Visible copy indicator, if the hold has elapsed.
    #[must_use]
    pub fn copy_indicator(&self) -> Option<&CopyIndicator> {
        self.copy.indicator()
    }

    /// The copy indicator was tapped: returns the text to put on the
    /// clipboard and dismisses the indicator.
    pub fn copy_tap(&mut self) -> Option<String> {
        self.copy.take_copy()
    }

    /// Tap landed outside the indicator.
    pub fn dismiss_copy(&mut self) {
        self.copy.dismiss();
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::register_listeners;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, HtmlElement, KeyboardEvent, TouchEvent, WheelEvent};

    use super::super::{now_ms, GridState, OrderGrid};
    use super::KeyInput;
    use crate::callbacks::JsCallbacks;
    use crate::editor::EditField;
    use crate::interaction::TouchPoint;
    use crate::viewer::clipboard;

    fn touch_points(event: &TouchEvent, container: &HtmlElement) -> Vec<TouchPoint> {
        let rect = container.get_bounding_client_rect();
        let touches = event.touches();
        let mut points = Vec::with_capacity(usize::try_from(touches.length()).unwrap_or(0));
        for i in 0..touches.length() {
            if let Some(touch) = touches.item(i) {
                points.push(TouchPoint {
                    x: f64::from(touch.client_x()) - rect.left(),
                    y: f64::from(touch.client_y()) - rect.top(),
                });
            }
        }
        points
    }

    /// Wire touch, wheel, and keyboard listeners on the container.
    pub(crate) fn register_listeners(
        state: &Rc<RefCell<GridState>>,
        callbacks: &Rc<RefCell<JsCallbacks>>,
        container: &HtmlElement,
    ) -> Result<(), JsValue> {
        let passive_off = AddEventListenerOptions::new();
        passive_off.set_passive(false);

        {
            let state = Rc::clone(state);
            let container = container.clone();
            let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
                let points = touch_points(&event, &container);
                state.borrow_mut().touch_start(&points, now_ms());
            });
            container.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &passive_off,
            )?;
            closure.forget();
        }

        {
            let state = Rc::clone(state);
            let container = container.clone();
            let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
                let points = touch_points(&event, &container);
                let mut s = state.borrow_mut();
                if !s.mode().blocks_pan_zoom() {
                    event.prevent_default();
                }
                s.touch_move(&points, now_ms());
            });
            container.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &passive_off,
            )?;
            closure.forget();
        }

        {
            let state = Rc::clone(state);
            let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
                let remaining = usize::try_from(event.touches().length()).unwrap_or(0);
                state.borrow_mut().touch_end(remaining);
            });
            container
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let state = Rc::clone(state);
            let container_for_rect = container.clone();
            let closure = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
                let rect = container_for_rect.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let y = f64::from(event.client_y()) - rect.top();
                let ctrl = event.ctrl_key() || event.meta_key();
                if state.borrow_mut().wheel(event.delta_y(), ctrl, x, y) {
                    event.prevent_default();
                }
            });
            container.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &passive_off,
            )?;
            closure.forget();
        }

        if let Some(window) = web_sys::window() {
            let state = Rc::clone(state);
            let callbacks = Rc::clone(callbacks);
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let input = KeyInput {
                    key: &key,
                    ctrl_or_cmd: event.ctrl_key() || event.meta_key(),
                    shift: event.shift_key(),
                };
                let sink = callbacks.borrow().clone();
                if state.borrow_mut().key(input, &sink) {
                    event.prevent_default();
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    #[wasm_bindgen]
    impl OrderGrid {
        /// Pointer pressed on a row, for drag arming.
        #[wasm_bindgen(js_name = rowPointerDown)]
        pub fn row_pointer_down(&self, row_id: &str, x: f64, y: f64) {
            self.state
                .borrow_mut()
                .row_pointer_down(row_id, x, y, now_ms());
        }

        #[wasm_bindgen(js_name = rowPointerMove)]
        pub fn row_pointer_move(&self, x: f64, y: f64) {
            let _ = self.state.borrow_mut().row_pointer_move(x, y);
        }

        #[wasm_bindgen(js_name = rowPointerUp)]
        pub fn row_pointer_up(&self, target_id: Option<String>) {
            let callbacks = self.callbacks.borrow().clone();
            let reordered = self
                .state
                .borrow_mut()
                .row_pointer_up(target_id.as_deref(), &callbacks);
            if reordered {
                clipboard::vibrate(100);
            }
        }

        /// Open an edit buffer on a cell. `field` is one of
        /// `phone|price|comment|commission`.
        #[wasm_bindgen(js_name = beginEdit)]
        pub fn begin_edit(&self, row_id: &str, field: &str) -> Result<(), JsValue> {
            let field = parse_field(field)?;
            let callbacks = self.callbacks.borrow().clone();
            self.state.borrow_mut().begin_edit(row_id, field, &callbacks);
            Ok(())
        }

        #[wasm_bindgen(js_name = editInput)]
        pub fn edit_input(&self, text: &str) {
            let callbacks = self.callbacks.borrow().clone();
            self.state.borrow_mut().edit_input(text, &callbacks);
        }

        #[wasm_bindgen(js_name = editKey)]
        pub fn edit_key(&self, key: &str, shift: bool) {
            let callbacks = self.callbacks.borrow().clone();
            self.state.borrow_mut().edit_key(key, shift, &callbacks);
        }

        #[wasm_bindgen(js_name = editBlur)]
        pub fn edit_blur(&self) {
            let callbacks = self.callbacks.borrow().clone();
            self.state.borrow_mut().edit_blur(&callbacks);
        }

        #[wasm_bindgen(js_name = applyPriority)]
        pub fn apply_priority(&self, priority: u8) {
            let callbacks = self.callbacks.borrow().clone();
            self.state.borrow_mut().apply_priority(priority, &callbacks);
        }

        /// Press started on a copyable text cell.
        #[wasm_bindgen(js_name = cellPress)]
        pub fn cell_press(&self, text: &str, x: f64, y: f64) {
            self.state.borrow_mut().cell_press(text, x, y, now_ms());
        }

        #[wasm_bindgen(js_name = cellRelease)]
        pub fn cell_release(&self) {
            self.state.borrow_mut().cell_release();
        }

        /// Tap on the copy indicator: writes the text to the clipboard.
        #[wasm_bindgen(js_name = copyTap)]
        pub fn copy_tap(&self) {
            if let Some(text) = self.state.borrow_mut().copy_tap() {
                clipboard::copy_with_feedback(&text);
            }
        }

        #[wasm_bindgen(js_name = dismissCopy)]
        pub fn dismiss_copy(&self) {
            self.state.borrow_mut().dismiss_copy();
        }
    }

    fn parse_field(field: &str) -> Result<EditField, JsValue> {
        match field {
            "phone" => Ok(EditField::Phone),
            "price" => Ok(EditField::Price),
            "comment" => Ok(EditField::Comment),
            "commission" => Ok(EditField::Commission),
            other => Err(crate::error::GridError::Payload(format!(
                "unknown edit field: {other}"
            ))
            .into()),
        }
    }
}
