//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;

use ordergrid::callbacks::GridCallbacks;
use ordergrid::types::{Order, Status};

/// Build a minimal order row.
pub fn order(id: &str) -> Order {
    Order {
        id: id.to_owned(),
        code: format!("CMD-{id}"),
        client: format!("Client {id}"),
        phone: "0612345678".to_owned(),
        price: 100.0,
        commission: None,
        comment: String::new(),
        status: Status::Confirmed,
        is_scanned: false,
    }
}

/// Build an order row with scan flag and status.
pub fn order_with(id: &str, scanned: bool, status: Status) -> Order {
    Order {
        is_scanned: scanned,
        status,
        ..order(id)
    }
}

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Comment(String, String, bool),
    Phone(String, String, bool),
    Price(String, f64, bool),
    Commission(String, f64),
    Status(String, Status),
    Reorder(Vec<String>),
}

/// Callback sink that records every invocation for assertions.
#[derive(Debug, Default)]
pub struct Recording {
    pub calls: RefCell<Vec<Recorded>>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Recorded> {
        self.calls.take()
    }

    pub fn status_calls(&self) -> Vec<Recorded> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Recorded::Status(..)))
            .cloned()
            .collect()
    }
}

impl GridCallbacks for Recording {
    fn update_comment(&self, row_id: &str, text: &str, notify: bool) {
        self.calls.borrow_mut().push(Recorded::Comment(
            row_id.to_owned(),
            text.to_owned(),
            notify,
        ));
    }

    fn update_phone(&self, row_id: &str, phone: &str, notify: bool) {
        self.calls.borrow_mut().push(Recorded::Phone(
            row_id.to_owned(),
            phone.to_owned(),
            notify,
        ));
    }

    fn update_price(&self, row_id: &str, price: f64, notify: bool) {
        self.calls
            .borrow_mut()
            .push(Recorded::Price(row_id.to_owned(), price, notify));
    }

    fn update_commission(&self, row_id: &str, commission: f64) {
        self.calls
            .borrow_mut()
            .push(Recorded::Commission(row_id.to_owned(), commission));
    }

    fn update_status(&self, row_id: &str, status: Status) {
        self.calls
            .borrow_mut()
            .push(Recorded::Status(row_id.to_owned(), status));
    }

    fn reorder(&self, rows: &[Order]) {
        self.calls
            .borrow_mut()
            .push(Recorded::Reorder(rows.iter().map(|o| o.id.clone()).collect()));
    }
}

/// Ids of the grid's rows in display order.
pub fn row_ids(state: &ordergrid::GridState) -> Vec<String> {
    state.rows().iter().map(|o| o.id.clone()).collect()
}
