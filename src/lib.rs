//! ordergrid - interactive order grid for the web
//!
//! Drives a touch-first order sheet in the browser via WebAssembly:
//! - Pinch/wheel zoom with focus-point preservation, momentum panning with
//!   elastic edge bounce
//! - Drag-to-reorder rows with a long-press lift, plus keyboard reordering
//! - Inline cell editing (phone, price, comment, commission) with silent
//!   live-save for comments and a 1-5 priority shortcut
//! - Scan highlighting that flashes fresh barcode matches and keeps a
//!   steady tint afterwards
//! - Per-row status menu with a confirmation gate on the delivered status
//! - Long-press copy for cell text
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { OrderGrid } from 'ordergrid';
//! await init();
//! const grid = new OrderGrid();
//! grid.attach(container);
//! grid.setOrders(orders);
//! grid.setReorderCallback(rows => save(rows));
//! ```
//!
//! All interaction logic lives in plain-Rust state machines driven by an
//! explicit clock; the wasm layer only translates DOM events.

pub mod callbacks;
pub mod editor;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod numfmt;
pub mod phone;
pub mod scan;
pub mod status_menu;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use viewer::{GridState, RowVisual};

#[cfg(target_arch = "wasm32")]
pub use viewer::OrderGrid;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
