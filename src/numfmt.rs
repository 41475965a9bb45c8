//! Number formatting shared by the price and commission columns.

use crate::types::Order;

/// Format a price for display: integral values show no decimal places,
/// everything else exactly two.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// Commission shown for a row: the row's own commission when present and
/// positive, otherwise the caller-supplied default.
#[must_use]
pub fn effective_commission(order: &Order, default_commission: f64) -> f64 {
    match order.commission {
        Some(c) if c > 0.0 => c,
        _ => default_commission,
    }
}
