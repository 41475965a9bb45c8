//! Order rows and their status enumeration.

use serde::{Deserialize, Serialize};

/// One order record displayed as a grid line.
///
/// Rows are caller-owned: the grid reads them, renders them, and reports
/// edits back through callbacks, but never mutates a row in place. The `id`
/// is the sole reorder/drag key and must stay stable for the row's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub code: String,
    /// Counterparty (client/vendor) display name.
    pub client: String,
    pub phone: String,
    /// Non-negative price. Rendered through [`crate::numfmt::format_price`].
    pub price: f64,
    /// Falls back to the caller-supplied default when absent or zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
    /// Free text; may carry a leading `"<1-5>. "` priority token.
    #[serde(default)]
    pub comment: String,
    pub status: Status,
    #[serde(default)]
    pub is_scanned: bool,
}

/// Fixed status enumeration for an order.
///
/// Wire names are the original French labels used by the hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Confirmé")]
    Confirmed,
    #[serde(rename = "Livré")]
    Delivered,
    #[serde(rename = "Reporté")]
    Postponed,
    #[serde(rename = "Annulé")]
    Cancelled,
    #[serde(rename = "Refusé")]
    Refused,
    #[serde(rename = "Numéro erroné")]
    WrongNumber,
    #[serde(rename = "Hors zone")]
    OutOfZone,
    #[serde(rename = "Programmé")]
    Scheduled,
    #[serde(rename = "Pas de réponse")]
    NoAnswer,
    #[serde(rename = "Nouveau")]
    New,
    #[serde(rename = "En cours")]
    InProgress,
}

/// Statuses offered in the per-row status menu, in display order.
///
/// `New` and `InProgress` are assigned by the backend and never selected
/// by hand, so they are absent here.
pub const SELECTABLE_STATUSES: [Status; 9] = [
    Status::Confirmed,
    Status::Delivered,
    Status::Postponed,
    Status::Cancelled,
    Status::Refused,
    Status::WrongNumber,
    Status::OutOfZone,
    Status::Scheduled,
    Status::NoAnswer,
];

impl Status {
    /// Whether this status falls in the rejected/cancelled category.
    /// Rejected rows get the distinct scan-highlight color.
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(
            self,
            Status::Cancelled | Status::Refused | Status::OutOfZone | Status::NoAnswer
        )
    }

    /// The terminal status archives the row once applied, so selecting it
    /// is gated behind an explicit confirmation step.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Delivered)
    }

    /// Badge background color for rendering.
    #[must_use]
    pub fn badge_color(self) -> &'static str {
        match self {
            Status::Confirmed => "#22c55e",
            Status::Delivered => "#10b981",
            Status::Postponed => "#06b6d4",
            Status::Cancelled => "#ef4444",
            Status::Refused => "#dc2626",
            Status::WrongNumber => "#f97316",
            Status::OutOfZone => "#6b7280",
            Status::Scheduled | Status::New => "#3b82f6",
            Status::NoAnswer | Status::InProgress => "#eab308",
        }
    }

    /// Display label (the wire name).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Confirmed => "Confirmé",
            Status::Delivered => "Livré",
            Status::Postponed => "Reporté",
            Status::Cancelled => "Annulé",
            Status::Refused => "Refusé",
            Status::WrongNumber => "Numéro erroné",
            Status::OutOfZone => "Hors zone",
            Status::Scheduled => "Programmé",
            Status::NoAnswer => "Pas de réponse",
            Status::New => "Nouveau",
            Status::InProgress => "En cours",
        }
    }
}
