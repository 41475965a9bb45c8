//! Per-row status menu and the delivered-confirmation gate.
//!
//! Opening the menu doubles as the gesture that arms row dragging for that
//! row. Selecting the terminal status does not apply immediately: it opens
//! a confirmation step quoting the order code, and only an explicit confirm
//! emits the status update.

use crate::types::{Status, SELECTABLE_STATUSES};

/// Outcome of a menu action, for the embedder to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    None,
    /// Apply the new status to the row now.
    Applied { row_id: String, status: Status },
    /// Awaiting confirmation before applying the terminal status.
    NeedsConfirmation { row_id: String, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuState {
    Closed,
    Open { row_id: String },
    Confirming { row_id: String, code: String },
}

/// Status-menu state machine. One menu at most is open at a time.
#[derive(Debug, Clone)]
pub struct StatusMenu {
    state: MenuState,
}

impl Default for StatusMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusMenu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
        }
    }

    /// Open the menu for a row. Replaces any menu already open elsewhere.
    pub fn open(&mut self, row_id: &str) {
        self.state = MenuState::Open {
            row_id: row_id.to_owned(),
        };
    }

    /// Row whose menu is open (also the row whose drag is armed).
    #[must_use]
    pub fn open_row(&self) -> Option<&str> {
        match &self.state {
            MenuState::Open { row_id } | MenuState::Confirming { row_id, .. } => Some(row_id),
            MenuState::Closed => None,
        }
    }

    /// Whether the delivered-confirmation dialog is showing.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        matches!(self.state, MenuState::Confirming { .. })
    }

    /// Order code quoted by the confirmation dialog, if showing.
    #[must_use]
    pub fn confirming_code(&self) -> Option<&str> {
        match &self.state {
            MenuState::Confirming { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Menu entries for a row currently in `current` status. The current
    /// status is omitted; picking it again would be a no-op.
    #[must_use]
    pub fn options(current: Status) -> Vec<Status> {
        SELECTABLE_STATUSES
            .into_iter()
            .filter(|s| *s != current)
            .collect()
    }

    /// An entry was picked. Terminal statuses detour through confirmation;
    /// everything else applies at once and closes the menu.
    pub fn select(&mut self, status: Status, order_code: &str) -> MenuOutcome {
        let MenuState::Open { row_id } = &self.state else {
            return MenuOutcome::None;
        };
        let row_id = row_id.clone();
        if status.is_terminal() {
            self.state = MenuState::Confirming {
                row_id: row_id.clone(),
                code: order_code.to_owned(),
            };
            MenuOutcome::NeedsConfirmation {
                row_id,
                code: order_code.to_owned(),
            }
        } else {
            self.state = MenuState::Closed;
            MenuOutcome::Applied { row_id, status }
        }
    }

    /// Confirm the pending terminal status. Emits exactly one application.
    pub fn confirm(&mut self) -> MenuOutcome {
        match std::mem::replace(&mut self.state, MenuState::Closed) {
            MenuState::Confirming { row_id, .. } => MenuOutcome::Applied {
                row_id,
                status: Status::Delivered,
            },
            other => {
                self.state = other;
                MenuOutcome::None
            }
        }
    }

    /// Dismiss the menu or the confirmation dialog without applying.
    pub fn cancel(&mut self) {
        self.state = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_omit_current_status() {
        let options = StatusMenu::options(Status::Confirmed);
        assert_eq!(options.len(), SELECTABLE_STATUSES.len() - 1);
        assert!(!options.contains(&Status::Confirmed));
        assert!(options.contains(&Status::Delivered));
    }

    #[test]
    fn non_terminal_select_applies_and_closes() {
        let mut menu = StatusMenu::new();
        menu.open("a");
        let outcome = menu.select(Status::Postponed, "CMD-1");
        assert_eq!(
            outcome,
            MenuOutcome::Applied {
                row_id: "a".to_owned(),
                status: Status::Postponed,
            }
        );
        assert_eq!(menu.open_row(), None);
    }

    #[test]
    fn delivered_requires_confirmation() {
        let mut menu = StatusMenu::new();
        menu.open("a");
        let outcome = menu.select(Status::Delivered, "CMD-1");
        assert_eq!(
            outcome,
            MenuOutcome::NeedsConfirmation {
                row_id: "a".to_owned(),
                code: "CMD-1".to_owned(),
            }
        );
        assert!(menu.is_confirming());
        assert_eq!(menu.confirming_code(), Some("CMD-1"));

        let applied = menu.confirm();
        assert_eq!(
            applied,
            MenuOutcome::Applied {
                row_id: "a".to_owned(),
                status: Status::Delivered,
            }
        );
        // A second confirm must not emit another application.
        assert_eq!(menu.confirm(), MenuOutcome::None);
    }

    #[test]
    fn cancel_applies_nothing() {
        let mut menu = StatusMenu::new();
        menu.open("a");
        menu.select(Status::Delivered, "CMD-1");
        menu.cancel();
        assert_eq!(menu.confirm(), MenuOutcome::None);
        assert_eq!(menu.open_row(), None);
    }

    #[test]
    fn reopening_moves_the_menu() {
        let mut menu = StatusMenu::new();
        menu.open("a");
        menu.open("b");
        assert_eq!(menu.open_row(), Some("b"));
    }
}
