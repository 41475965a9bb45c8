//! Outbound notifications to the embedding application.
//!
//! The grid never persists anything itself: every edit, status change, and
//! reorder is reported through [`GridCallbacks`]. On the web target the
//! callbacks are JavaScript functions; tests plug in a recording stub.

use crate::editor::EditCommand;
use crate::types::{Order, Status};

/// Sink for every mutation the grid reports. `notify` distinguishes silent
/// persistence (comment live-save) from a user-visible save.
pub trait GridCallbacks {
    fn update_comment(&self, row_id: &str, text: &str, notify: bool);
    fn update_phone(&self, row_id: &str, phone: &str, notify: bool);
    fn update_price(&self, row_id: &str, price: f64, notify: bool);
    fn update_commission(&self, row_id: &str, commission: f64);
    fn update_status(&self, row_id: &str, status: Status);
    fn reorder(&self, rows: &[Order]);
}

/// Forward a committed edit to the matching callback.
pub fn dispatch_edit(callbacks: &dyn GridCallbacks, command: &EditCommand) {
    match command {
        EditCommand::Comment {
            row_id,
            text,
            notify,
        } => callbacks.update_comment(row_id, text, *notify),
        EditCommand::Phone {
            row_id,
            text,
            notify,
        } => callbacks.update_phone(row_id, text, *notify),
        EditCommand::Price {
            row_id,
            value,
            notify,
        } => callbacks.update_price(row_id, *value, *notify),
        EditCommand::Commission { row_id, value } => {
            callbacks.update_commission(row_id, *value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod js {
    use js_sys::Function;
    use wasm_bindgen::JsValue;

    use super::GridCallbacks;
    use crate::types::{Order, Status};

    /// JavaScript-backed callback sink. Unset functions are no-ops; a
    /// throwing callback is logged and otherwise ignored so one bad handler
    /// cannot wedge the grid.
    #[derive(Default, Clone)]
    pub struct JsCallbacks {
        pub update_comment: Option<Function>,
        pub update_phone: Option<Function>,
        pub update_price: Option<Function>,
        pub update_commission: Option<Function>,
        pub update_status: Option<Function>,
        pub reorder: Option<Function>,
    }

    fn report(result: Result<JsValue, JsValue>) {
        if let Err(err) = result {
            web_sys::console::error_2(&"ordergrid callback failed:".into(), &err);
        }
    }

    impl GridCallbacks for JsCallbacks {
        fn update_comment(&self, row_id: &str, text: &str, notify: bool) {
            if let Some(f) = &self.update_comment {
                report(f.call3(
                    &JsValue::NULL,
                    &row_id.into(),
                    &text.into(),
                    &notify.into(),
                ));
            }
        }

        fn update_phone(&self, row_id: &str, phone: &str, notify: bool) {
            if let Some(f) = &self.update_phone {
                report(f.call3(
                    &JsValue::NULL,
                    &row_id.into(),
                    &phone.into(),
                    &notify.into(),
                ));
            }
        }

        fn update_price(&self, row_id: &str, price: f64, notify: bool) {
            if let Some(f) = &self.update_price {
                report(f.call3(
                    &JsValue::NULL,
                    &row_id.into(),
                    &price.into(),
                    &notify.into(),
                ));
            }
        }

        fn update_commission(&self, row_id: &str, commission: f64) {
            if let Some(f) = &self.update_commission {
                report(f.call2(&JsValue::NULL, &row_id.into(), &commission.into()));
            }
        }

        fn update_status(&self, row_id: &str, status: Status) {
            if let Some(f) = &self.update_status {
                report(f.call2(&JsValue::NULL, &row_id.into(), &status.label().into()));
            }
        }

        fn reorder(&self, rows: &[Order]) {
            if let Some(f) = &self.reorder {
                match serde_wasm_bindgen::to_value(rows) {
                    Ok(value) => report(f.call1(&JsValue::NULL, &value)),
                    Err(err) => {
                        web_sys::console::error_2(
                            &"ordergrid reorder payload failed:".into(),
                            &err.into(),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::JsCallbacks;
