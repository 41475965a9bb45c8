//! Main OrderGrid struct - the primary entry point for the grid.
//!
//! The interaction core lives in [`GridState`], which is plain Rust driven
//! by explicit events and an explicit clock so the whole behavior is
//! testable off-target. The WASM-exported `OrderGrid` wraps a shared
//! `GridState`, wires DOM listeners, and forwards mutations to the
//! JavaScript callbacks.

mod events;
mod frame;

#[cfg(target_arch = "wasm32")]
mod clipboard;

pub use events::KeyInput;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::callbacks::JsCallbacks;
use crate::editor::{CellEditor, EditField};
use crate::interaction::{CopyPopover, GestureTracker, InteractionMode, RowDragController};
use crate::layout::{ColumnLayout, ContentTransform, Momentum};
use crate::numfmt;
use crate::scan::{RowHighlight, ScanTracker};
use crate::status_menu::StatusMenu;
use crate::types::{GridSettings, Order, Status};

/// Commission shown when a row carries none of its own.
const DEFAULT_COMMISSION: f64 = 0.0;

/// Per-row render snapshot handed to the embedder each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RowVisual {
    pub id: String,
    pub code: String,
    pub client: String,
    pub phone: String,
    pub price_text: String,
    pub commission_text: String,
    pub comment: String,
    pub status: Status,
    pub highlight: RowHighlight,
    /// The scanned code cell keeps an accent even after the row highlight
    /// fades, so pickers can spot processed rows per-cell.
    pub code_cell_scanned: bool,
    pub drag_enabled: bool,
    pub editing_field: Option<EditField>,
}

/// The grid's full interaction state.
///
/// All mutating entry points take the clock (`now_ms`) and, where they can
/// report mutations, a [`GridCallbacks`] sink. Nothing here touches the DOM.
#[derive(Default)]
pub struct GridState {
    rows: Vec<Order>,
    settings: GridSettings,
    default_commission: f64,
    pub transform: ContentTransform,
    pub columns: ColumnLayout,
    pub(crate) momentum: Option<Momentum>,
    pub(crate) gesture: GestureTracker,
    pub(crate) mode: InteractionMode,
    pub(crate) drag: RowDragController,
    pub(crate) copy: CopyPopover,
    pub(crate) editor: CellEditor,
    pub(crate) scan: ScanTracker,
    pub(crate) menu: StatusMenu,
}

impl GridState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_commission: DEFAULT_COMMISSION,
            ..Self::default()
        }
    }

    /// Replace the row snapshot. Scan highlights are reconciled and any
    /// interaction pinned to a vanished row is dropped.
    pub fn set_rows(&mut self, rows: Vec<Order>, now_ms: f64) {
        self.scan.sync(&rows, now_ms);

        let missing = |id: &str| !rows.iter().any(|o| o.id == id);
        if let Some(open) = self.menu.open_row().map(str::to_owned) {
            if missing(&open) {
                self.menu.cancel();
            }
        }
        if let Some(enabled) = self.drag.enabled_row().map(str::to_owned) {
            if missing(&enabled) {
                self.drag.set_drag_enabled(None);
            }
        }
        if let Some(edit_row) = self.editor.active().map(|e| e.row_id.clone()) {
            if missing(&edit_row) {
                self.editor.row_removed(&edit_row);
                if self.mode == InteractionMode::CellEdit {
                    self.mode = InteractionMode::Idle;
                }
            }
        }
        self.rows = rows;
    }

    #[must_use]
    pub fn rows(&self) -> &[Order] {
        &self.rows
    }

    pub fn set_settings(&mut self, settings: GridSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Commission applied to rows that carry none of their own.
    pub fn set_default_commission(&mut self, commission: f64) {
        self.default_commission = commission;
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn find_row(&self, row_id: &str) -> Option<&Order> {
        self.rows.iter().find(|o| o.id == row_id)
    }

    /// Render snapshot for the row at `index` in display order.
    #[must_use]
    pub fn row_visual(&self, index: usize) -> Option<RowVisual> {
        let order = self.rows.get(index)?;
        let commission = numfmt::effective_commission(order, self.default_commission);
        Some(RowVisual {
            id: order.id.clone(),
            code: order.code.clone(),
            client: order.client.clone(),
            phone: order.phone.clone(),
            price_text: numfmt::format_price(order.price),
            commission_text: numfmt::format_price(commission),
            comment: order.comment.clone(),
            status: order.status,
            highlight: self.scan.highlight(order, index),
            code_cell_scanned: self.scan.is_scanned(&order.id),
            drag_enabled: self.drag.enabled_row() == Some(order.id.as_str()),
            editing_field: self
                .editor
                .active()
                .filter(|e| e.row_id == order.id)
                .map(|e| e.field),
        })
    }
}

/// The WASM-exported grid controller.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct OrderGrid {
    state: Rc<RefCell<GridState>>,
    callbacks: Rc<RefCell<JsCallbacks>>,
    container: Option<web_sys::HtmlElement>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl OrderGrid {
    /// Create a detached grid. Call [`OrderGrid::attach`] to wire DOM events.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            state: Rc::new(RefCell::new(GridState::new())),
            callbacks: Rc::new(RefCell::new(JsCallbacks::default())),
            container: None,
        }
    }

    /// Attach to a container element: registers touch/wheel/key listeners
    /// and starts the frame driver.
    pub fn attach(&mut self, container: web_sys::HtmlElement) -> Result<(), JsValue> {
        let rect = container.get_bounding_client_rect();
        {
            let mut s = self.state.borrow_mut();
            s.transform.resize_viewport(rect.width(), rect.height());
        }
        events::register_listeners(&self.state, &self.callbacks, &container)?;
        frame::start_frame_driver(&self.state)?;
        self.container = Some(container);
        Ok(())
    }

    /// Replace the displayed rows from a JS array of order objects.
    #[wasm_bindgen(js_name = setOrders)]
    pub fn set_orders(&self, orders: JsValue) -> Result<(), JsValue> {
        let rows: Vec<Order> = serde_wasm_bindgen::from_value(orders)
            .map_err(|e| crate::error::GridError::Payload(e.to_string()))?;
        self.state.borrow_mut().set_rows(rows, now_ms());
        Ok(())
    }

    /// Replace display settings from a JS settings object.
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&self, settings: JsValue) -> Result<(), JsValue> {
        let settings: GridSettings = serde_wasm_bindgen::from_value(settings)
            .map_err(|e| crate::error::GridError::Payload(e.to_string()))?;
        self.state.borrow_mut().set_settings(settings);
        Ok(())
    }

    #[wasm_bindgen(js_name = setDefaultCommission)]
    pub fn set_default_commission(&self, commission: f64) {
        self.state.borrow_mut().set_default_commission(commission);
    }

    #[wasm_bindgen(js_name = setUpdateCommentCallback)]
    pub fn set_update_comment_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().update_comment = callback;
    }

    #[wasm_bindgen(js_name = setUpdatePhoneCallback)]
    pub fn set_update_phone_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().update_phone = callback;
    }

    #[wasm_bindgen(js_name = setUpdatePriceCallback)]
    pub fn set_update_price_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().update_price = callback;
    }

    #[wasm_bindgen(js_name = setUpdateCommissionCallback)]
    pub fn set_update_commission_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().update_commission = callback;
    }

    #[wasm_bindgen(js_name = setUpdateStatusCallback)]
    pub fn set_update_status_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().update_status = callback;
    }

    #[wasm_bindgen(js_name = setReorderCallback)]
    pub fn set_reorder_callback(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().reorder = callback;
    }

    /// Current zoom level, for the host's zoom indicator.
    pub fn zoom(&self) -> f64 {
        self.state.borrow().transform.zoom
    }

    /// Open the status menu for a row (host renders the menu itself).
    #[wasm_bindgen(js_name = openStatusMenu)]
    pub fn open_status_menu(&self, row_id: &str) {
        self.state.borrow_mut().open_status_menu(row_id);
    }

    /// Pick a status from the open menu by its wire label.
    #[wasm_bindgen(js_name = selectStatus)]
    pub fn select_status(&self, label: &str) -> Result<(), JsValue> {
        let status: Status = serde_json::from_value(serde_json::Value::String(label.to_owned()))
            .map_err(|_| crate::error::GridError::Payload(format!("unknown status: {label}")))?;
        let callbacks = self.callbacks.borrow().clone();
        self.state.borrow_mut().select_status(status, &callbacks);
        Ok(())
    }

    /// Confirm the pending delivered status.
    #[wasm_bindgen(js_name = confirmDelivery)]
    pub fn confirm_delivery(&self) {
        let callbacks = self.callbacks.borrow().clone();
        self.state.borrow_mut().confirm_delivery(&callbacks);
    }

    /// Dismiss the status menu or confirmation dialog.
    #[wasm_bindgen(js_name = cancelStatusMenu)]
    pub fn cancel_status_menu(&self) {
        self.state.borrow_mut().cancel_status_menu();
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for OrderGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic clock in milliseconds.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}
