//! Long-press-to-copy on cell text.
//!
//! Holding a cell for 500 ms raises a copy indicator just above the press
//! point. Tapping the indicator copies the cell's text; any movement or an
//! early release cancels the pending press.

/// Hold duration before the copy indicator appears.
const COPY_PRESS_MS: f64 = 500.0;
/// Vertical offset of the indicator above the press point.
const INDICATOR_OFFSET_Y: f64 = 50.0;

/// The visible copy indicator, positioned above the pressed cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyIndicator {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
struct PendingPress {
    text: String,
    x: f64,
    y: f64,
    deadline_ms: f64,
}

/// Copy popover state machine driven by press events and an explicit clock.
#[derive(Debug, Clone, Default)]
pub struct CopyPopover {
    pending: Option<PendingPress>,
    indicator: Option<CopyIndicator>,
}

impl CopyPopover {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A press started on a cell holding `text`. Empty or whitespace-only
    /// text never raises the indicator.
    pub fn press(&mut self, text: &str, x: f64, y: f64, now_ms: f64) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.pending = Some(PendingPress {
            text: trimmed.to_owned(),
            x,
            y,
            deadline_ms: now_ms + COPY_PRESS_MS,
        });
    }

    /// The press ended before the hold elapsed.
    pub fn release(&mut self) {
        self.pending = None;
    }

    /// The pointer moved during the hold; treat as a scroll, not a press.
    pub fn moved(&mut self) {
        self.pending = None;
    }

    /// Advance the clock, raising the indicator once the hold elapses.
    pub fn tick(&mut self, now_ms: f64) {
        let Some(pending) = &self.pending else {
            return;
        };
        if now_ms >= pending.deadline_ms {
            self.indicator = Some(CopyIndicator {
                text: pending.text.clone(),
                x: pending.x,
                y: pending.y - INDICATOR_OFFSET_Y,
            });
            self.pending = None;
        }
    }

    /// Whether a press is still waiting out its hold timer.
    #[must_use]
    pub fn has_pending_press(&self) -> bool {
        self.pending.is_some()
    }

    /// Currently visible indicator, if any.
    #[must_use]
    pub fn indicator(&self) -> Option<&CopyIndicator> {
        self.indicator.as_ref()
    }

    /// The indicator was tapped: returns the text to copy and dismisses it.
    pub fn take_copy(&mut self) -> Option<String> {
        self.indicator.take().map(|i| i.text)
    }

    /// Dismiss the indicator without copying (tap elsewhere).
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.indicator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_raises_indicator_above_press_point() {
        let mut popover = CopyPopover::new();
        popover.press("CMD-123", 40.0, 200.0, 1000.0);
        popover.tick(1400.0);
        assert!(popover.indicator().is_none());
        popover.tick(1500.0);
        let indicator = popover.indicator().cloned();
        assert_eq!(
            indicator,
            Some(CopyIndicator {
                text: "CMD-123".to_owned(),
                x: 40.0,
                y: 150.0,
            })
        );
    }

    #[test]
    fn early_release_cancels() {
        let mut popover = CopyPopover::new();
        popover.press("CMD-123", 0.0, 0.0, 1000.0);
        popover.release();
        popover.tick(2000.0);
        assert!(popover.indicator().is_none());
    }

    #[test]
    fn movement_cancels() {
        let mut popover = CopyPopover::new();
        popover.press("CMD-123", 0.0, 0.0, 1000.0);
        popover.moved();
        popover.tick(2000.0);
        assert!(popover.indicator().is_none());
    }

    #[test]
    fn blank_text_never_arms() {
        let mut popover = CopyPopover::new();
        popover.press("   ", 0.0, 0.0, 1000.0);
        popover.tick(2000.0);
        assert!(popover.indicator().is_none());
    }

    #[test]
    fn take_copy_returns_text_once() {
        let mut popover = CopyPopover::new();
        popover.press(" 0612345678 ", 10.0, 80.0, 0.0);
        popover.tick(500.0);
        assert_eq!(popover.take_copy(), Some("0612345678".to_owned()));
        assert_eq!(popover.take_copy(), None);
        assert!(popover.indicator().is_none());
    }
}
