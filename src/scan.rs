//! Scan-highlight tracking.
//!
//! Rows arrive flagged `is_scanned` when a warehouse barcode scan matched
//! them. A newly scanned row gets a loud "recent" highlight that fades to a
//! permanent tint after three seconds; unscanning (or row removal) clears
//! both. Expiry runs off the explicit frame clock, not real timers.

use std::collections::{HashMap, HashSet};

use crate::types::Order;

/// How long the loud recent-scan highlight lasts.
const RECENT_HIGHLIGHT_MS: f64 = 3000.0;

/// Visual treatment of one row, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// Scanned within the last three seconds. Rejected rows flash a
    /// different color so a bad scan is caught immediately.
    RecentScanned { rejected: bool },
    /// Scanned earlier; keeps a steady tint.
    PermanentScanned,
    /// Not scanned; plain zebra striping by row index.
    Zebra { even: bool },
}

/// Tracks which rows are scanned and which scans are still "recent".
#[derive(Debug, Clone, Default)]
pub struct ScanTracker {
    permanent: HashSet<String>,
    recent: HashSet<String>,
    deadlines: HashMap<String, f64>,
}

impl ScanTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile against a fresh row snapshot. Newly scanned rows enter
    /// both the permanent and recent sets; rows that are gone or no longer
    /// scanned are evicted from both and their pending expiry cancelled.
    pub fn sync(&mut self, rows: &[Order], now_ms: f64) {
        let scanned_ids: HashSet<&str> = rows
            .iter()
            .filter(|o| o.is_scanned)
            .map(|o| o.id.as_str())
            .collect();

        self.permanent.retain(|id| scanned_ids.contains(id.as_str()));
        self.recent.retain(|id| scanned_ids.contains(id.as_str()));
        self.deadlines
            .retain(|id, _| scanned_ids.contains(id.as_str()));

        for id in scanned_ids {
            if self.permanent.insert(id.to_owned()) {
                self.recent.insert(id.to_owned());
                self.deadlines
                    .insert(id.to_owned(), now_ms + RECENT_HIGHLIGHT_MS);
            }
        }
    }

    /// Expire recent highlights whose deadline has passed.
    pub fn tick(&mut self, now_ms: f64) {
        self.deadlines.retain(|id, deadline| {
            if now_ms >= *deadline {
                self.recent.remove(id);
                false
            } else {
                true
            }
        });
    }

    /// Whether the row still carries the loud recent highlight.
    #[must_use]
    pub fn is_recent(&self, row_id: &str) -> bool {
        self.recent.contains(row_id)
    }

    /// Whether the row is scanned at all.
    #[must_use]
    pub fn is_scanned(&self, row_id: &str) -> bool {
        self.permanent.contains(row_id)
    }

    /// Highlight for one row at its current display index.
    #[must_use]
    pub fn highlight(&self, order: &Order, index: usize) -> RowHighlight {
        if self.recent.contains(&order.id) {
            RowHighlight::RecentScanned {
                rejected: order.status.is_rejected(),
            }
        } else if self.permanent.contains(&order.id) {
            RowHighlight::PermanentScanned
        } else {
            RowHighlight::Zebra {
                even: index % 2 == 0,
            }
        }
    }

    /// Whether any recent highlight is still pending expiry. Lets the frame
    /// driver idle when nothing is animating.
    #[must_use]
    pub fn has_pending_expiry(&self) -> bool {
        !self.deadlines.is_empty()
    }
}

/// Background tint used by renderers for a given highlight, matching the
/// scanned/rejected palette of the order sheet.
#[must_use]
pub fn highlight_color(highlight: RowHighlight) -> &'static str {
    match highlight {
        RowHighlight::RecentScanned { rejected: true } => "#fecaca",
        RowHighlight::RecentScanned { rejected: false } => "#bbf7d0",
        RowHighlight::PermanentScanned => "#dcfce7",
        RowHighlight::Zebra { even: true } => "#ffffff",
        RowHighlight::Zebra { even: false } => "#f9fafb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn order(id: &str, scanned: bool, status: Status) -> Order {
        Order {
            id: id.to_owned(),
            code: format!("CMD-{id}"),
            client: String::new(),
            phone: String::new(),
            price: 0.0,
            commission: None,
            comment: String::new(),
            status,
            is_scanned: scanned,
        }
    }

    #[test]
    fn new_scan_is_recent_then_permanent() {
        let mut tracker = ScanTracker::new();
        let rows = vec![order("a", true, Status::Confirmed)];
        tracker.sync(&rows, 1000.0);
        assert!(tracker.is_recent("a"));

        tracker.tick(3999.0);
        assert!(tracker.is_recent("a"));
        tracker.tick(4000.0);
        assert!(!tracker.is_recent("a"));
        assert!(tracker.is_scanned("a"));
    }

    #[test]
    fn resync_does_not_rearm_existing_scan() {
        let mut tracker = ScanTracker::new();
        let rows = vec![order("a", true, Status::Confirmed)];
        tracker.sync(&rows, 1000.0);
        tracker.tick(4000.0);
        tracker.sync(&rows, 5000.0);
        assert!(!tracker.is_recent("a"));
        assert!(tracker.is_scanned("a"));
    }

    #[test]
    fn unscanning_clears_everything() {
        let mut tracker = ScanTracker::new();
        tracker.sync(&[order("a", true, Status::Confirmed)], 1000.0);
        tracker.sync(&[order("a", false, Status::Confirmed)], 1500.0);
        assert!(!tracker.is_recent("a"));
        assert!(!tracker.is_scanned("a"));
        assert!(!tracker.has_pending_expiry());
    }

    #[test]
    fn removed_row_is_evicted() {
        let mut tracker = ScanTracker::new();
        tracker.sync(&[order("a", true, Status::Confirmed)], 1000.0);
        tracker.sync(&[], 1500.0);
        assert!(!tracker.is_scanned("a"));
    }

    #[test]
    fn rejected_scan_flashes_differently() {
        let mut tracker = ScanTracker::new();
        let rejected = order("a", true, Status::Cancelled);
        tracker.sync(std::slice::from_ref(&rejected), 1000.0);
        assert_eq!(
            tracker.highlight(&rejected, 0),
            RowHighlight::RecentScanned { rejected: true }
        );
    }

    #[test]
    fn palette_separates_recent_from_permanent() {
        let recent = highlight_color(RowHighlight::RecentScanned { rejected: false });
        let warning = highlight_color(RowHighlight::RecentScanned { rejected: true });
        let settled = highlight_color(RowHighlight::PermanentScanned);
        assert_ne!(recent, warning);
        assert_ne!(recent, settled);
    }

    #[test]
    fn unscanned_rows_zebra_stripe() {
        let tracker = ScanTracker::new();
        let row = order("a", false, Status::Confirmed);
        assert_eq!(tracker.highlight(&row, 0), RowHighlight::Zebra { even: true });
        assert_eq!(tracker.highlight(&row, 3), RowHighlight::Zebra { even: false });
    }
}
