//! Long-press row lifting and list reordering.
//!
//! A row becomes draggable only after its status menu was opened, and the
//! actual lift requires a 150 ms hold with less than 10 px of movement.
//! Movement past that threshold while armed cancels the hold so the touch
//! falls through to scrolling.

use crate::types::Order;

/// Hold duration before an armed press lifts the row.
const LONG_PRESS_MS: f64 = 150.0;
/// Pointer travel that cancels an armed press.
const MOVE_CANCEL_PX: f64 = 10.0;

/// Events emitted by the drag controller for the embedder to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    None,
    /// The hold elapsed; the row is lifted and follows the pointer.
    Lifted { row_id: String },
    /// The lifted row tracked a pointer move.
    Moved { x: f64, y: f64 },
    /// The press was released before or after lifting.
    Dropped {
        source_id: String,
        target_id: Option<String>,
    },
    /// The armed press was cancelled (movement or external takeover).
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
enum DragPhase {
    Idle,
    /// Press seen on a drag-enabled row, waiting out the hold timer.
    Armed {
        row_id: String,
        start_x: f64,
        start_y: f64,
        deadline_ms: f64,
    },
    Dragging {
        row_id: String,
    },
}

/// Row-reorder drag state machine driven by raw pointer events and an
/// explicit clock.
#[derive(Debug, Clone)]
pub struct RowDragController {
    enabled_row: Option<String>,
    phase: DragPhase,
}

impl Default for RowDragController {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDragController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled_row: None,
            phase: DragPhase::Idle,
        }
    }

    /// Mark a single row as draggable, or clear with `None`. Clearing while
    /// that row is armed or dragging aborts the gesture.
    pub fn set_drag_enabled(&mut self, row_id: Option<&str>) {
        if let Some(active) = self.active_row() {
            if row_id != Some(active) {
                self.phase = DragPhase::Idle;
            }
        }
        self.enabled_row = row_id.map(str::to_owned);
    }

    /// Row whose drag is enabled, if any.
    #[must_use]
    pub fn enabled_row(&self) -> Option<&str> {
        self.enabled_row.as_deref()
    }

    fn active_row(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Armed { row_id, .. } | DragPhase::Dragging { row_id } => Some(row_id),
        }
    }

    /// Whether a row is currently lifted.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Whether a press is armed and waiting out the hold timer.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, DragPhase::Armed { .. })
    }

    /// Pointer pressed on `row_id`. Arms the hold timer when the row is the
    /// drag-enabled one; otherwise ignored.
    pub fn pointer_down(&mut self, row_id: &str, x: f64, y: f64, now_ms: f64) {
        if self.enabled_row.as_deref() != Some(row_id) {
            return;
        }
        if self.phase != DragPhase::Idle {
            return;
        }
        self.phase = DragPhase::Armed {
            row_id: row_id.to_owned(),
            start_x: x,
            start_y: y,
            deadline_ms: now_ms + LONG_PRESS_MS,
        };
    }

    /// Pointer moved. Cancels an armed press past the movement threshold
    /// (the touch then falls through to scrolling); tracks a lifted row.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> DragEvent {
        match &self.phase {
            DragPhase::Armed {
                start_x, start_y, ..
            } => {
                let dx = x - start_x;
                let dy = y - start_y;
                if (dx * dx + dy * dy).sqrt() > MOVE_CANCEL_PX {
                    self.phase = DragPhase::Idle;
                    DragEvent::Cancelled
                } else {
                    DragEvent::None
                }
            }
            DragPhase::Dragging { .. } => DragEvent::Moved { x, y },
            DragPhase::Idle => DragEvent::None,
        }
    }

    /// Advance the clock. Fires the lift once an armed press outlives its
    /// hold deadline.
    pub fn tick(&mut self, now_ms: f64) -> DragEvent {
        if let DragPhase::Armed {
            row_id,
            deadline_ms,
            ..
        } = &self.phase
        {
            if now_ms >= *deadline_ms {
                let row_id = row_id.clone();
                self.phase = DragPhase::Dragging {
                    row_id: row_id.clone(),
                };
                return DragEvent::Lifted { row_id };
            }
        }
        DragEvent::None
    }

    /// Pointer released over `target_id` (the row under the pointer, if
    /// any). A lifted row produces a drop; an armed press just disarms.
    pub fn pointer_up(&mut self, target_id: Option<&str>) -> DragEvent {
        match std::mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Dragging { row_id } => DragEvent::Dropped {
                source_id: row_id,
                target_id: target_id.map(str::to_owned),
            },
            DragPhase::Armed { .. } => DragEvent::Cancelled,
            DragPhase::Idle => DragEvent::None,
        }
    }

    /// Abort any in-flight press or drag.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

/// Move the element at `from` to position `to`, shifting the rest.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Reorder by dropping `source_id` onto `target_id`. Returns `None` when
/// either row is missing or they are the same row (no reorder to report).
#[must_use]
pub fn reorder_rows(rows: &[Order], source_id: &str, target_id: &str) -> Option<Vec<Order>> {
    if source_id == target_id {
        return None;
    }
    let from = rows.iter().position(|o| o.id == source_id)?;
    let to = rows.iter().position(|o| o.id == target_id)?;
    Some(array_move(rows, from, to))
}

/// Move a row up or down by `delta` positions (keyboard reorder), clamped
/// to the list ends. Returns `None` when the row is missing or the clamped
/// move is a no-op.
#[must_use]
pub fn move_row_by(rows: &[Order], row_id: &str, delta: isize) -> Option<Vec<Order>> {
    let from = rows.iter().position(|o| o.id == row_id)?;
    let to = from
        .saturating_add_signed(delta)
        .min(rows.len().saturating_sub(1));
    if to == from {
        return None;
    }
    Some(array_move(rows, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_owned(),
            code: format!("CMD-{id}"),
            client: String::new(),
            phone: String::new(),
            price: 0.0,
            commission: None,
            comment: String::new(),
            status: crate::types::Status::Confirmed,
            is_scanned: false,
        }
    }

    #[test]
    fn press_on_disabled_row_is_ignored() {
        let mut drag = RowDragController::new();
        drag.pointer_down("a", 0.0, 0.0, 1000.0);
        assert!(!drag.is_armed());
    }

    #[test]
    fn hold_lifts_after_deadline() {
        let mut drag = RowDragController::new();
        drag.set_drag_enabled(Some("a"));
        drag.pointer_down("a", 0.0, 0.0, 1000.0);
        assert_eq!(drag.tick(1100.0), DragEvent::None);
        assert_eq!(
            drag.tick(1150.0),
            DragEvent::Lifted {
                row_id: "a".to_owned()
            }
        );
        assert!(drag.is_dragging());
    }

    #[test]
    fn movement_cancels_armed_press() {
        let mut drag = RowDragController::new();
        drag.set_drag_enabled(Some("a"));
        drag.pointer_down("a", 0.0, 0.0, 1000.0);
        assert_eq!(drag.pointer_move(5.0, 5.0), DragEvent::None);
        assert_eq!(drag.pointer_move(12.0, 0.0), DragEvent::Cancelled);
        assert_eq!(drag.tick(2000.0), DragEvent::None);
    }

    #[test]
    fn drop_reports_source_and_target() {
        let mut drag = RowDragController::new();
        drag.set_drag_enabled(Some("a"));
        drag.pointer_down("a", 0.0, 0.0, 1000.0);
        drag.tick(1200.0);
        assert_eq!(
            drag.pointer_up(Some("c")),
            DragEvent::Dropped {
                source_id: "a".to_owned(),
                target_id: Some("c".to_owned()),
            }
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn disabling_mid_drag_aborts() {
        let mut drag = RowDragController::new();
        drag.set_drag_enabled(Some("a"));
        drag.pointer_down("a", 0.0, 0.0, 1000.0);
        drag.tick(1200.0);
        drag.set_drag_enabled(None);
        assert_eq!(drag.pointer_up(Some("b")), DragEvent::None);
    }

    #[test]
    fn reorder_moves_source_to_target_slot() {
        let rows = vec![order("a"), order("b"), order("c")];
        let out = reorder_rows(&rows, "a", "c").map(|rows| {
            rows.iter().map(|o| o.id.clone()).collect::<Vec<_>>()
        });
        assert_eq!(out, Some(vec!["b".to_owned(), "c".to_owned(), "a".to_owned()]));
    }

    #[test]
    fn reorder_onto_self_is_none() {
        let rows = vec![order("a"), order("b")];
        assert!(reorder_rows(&rows, "a", "a").is_none());
        assert!(reorder_rows(&rows, "a", "missing").is_none());
    }

    #[test]
    fn keyboard_move_clamps_at_ends() {
        let rows = vec![order("a"), order("b"), order("c")];
        assert!(move_row_by(&rows, "a", -1).is_none());
        let down = move_row_by(&rows, "a", 1)
            .map(|rows| rows.iter().map(|o| o.id.clone()).collect::<Vec<_>>());
        assert_eq!(down, Some(vec!["b".to_owned(), "a".to_owned(), "c".to_owned()]));
        assert!(move_row_by(&rows, "c", 5).is_none());
    }
}
