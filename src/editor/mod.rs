//! Inline cell editing.
//!
//! One cell at most is editable at a time. Comment edits live-save on every
//! keystroke without notifying the backend listeners; committing (Enter or
//! blur) saves with notification. Numeric fields parse on commit and fall
//! back to zero for unparseable input, matching the host form behavior.

mod priority;

pub use priority::{parse_priority, strip_priority, toggle_priority, PRIORITY_MAX, PRIORITY_MIN};

/// Which cell of a row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Phone,
    Price,
    Comment,
    Commission,
}

/// A field update to forward through the grid callbacks. `notify` mirrors
/// the original save API: silent persistence vs. user-visible save.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    Comment {
        row_id: String,
        text: String,
        notify: bool,
    },
    Phone {
        row_id: String,
        text: String,
        notify: bool,
    },
    Price {
        row_id: String,
        value: f64,
        notify: bool,
    },
    Commission {
        row_id: String,
        value: f64,
    },
}

/// The open edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    pub row_id: String,
    pub field: EditField,
    pub buffer: String,
}

/// Single-cell edit controller.
#[derive(Debug, Clone, Default)]
pub struct CellEditor {
    active: Option<ActiveEdit>,
}

fn parse_amount(buffer: &str) -> f64 {
    buffer.trim().parse().unwrap_or(0.0)
}

impl CellEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open edit, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveEdit> {
        self.active.as_ref()
    }

    /// Whether an edit buffer is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    /// Open an edit on a cell, seeding the buffer with the current value.
    /// Any other open edit is committed first (focus change is a blur).
    pub fn open(
        &mut self,
        row_id: &str,
        field: EditField,
        initial: &str,
    ) -> Option<EditCommand> {
        let committed = self.commit();
        self.active = Some(ActiveEdit {
            row_id: row_id.to_owned(),
            field,
            buffer: initial.to_owned(),
        });
        committed
    }

    /// Replace the buffer from an input event. Comment keystrokes live-save
    /// silently; other fields wait for the commit.
    pub fn input(&mut self, text: &str) -> Option<EditCommand> {
        let edit = self.active.as_mut()?;
        edit.buffer = text.to_owned();
        if edit.field == EditField::Comment {
            Some(EditCommand::Comment {
                row_id: edit.row_id.clone(),
                text: edit.buffer.clone(),
                notify: false,
            })
        } else {
            None
        }
    }

    /// Commit the open edit (Enter or blur) and close the buffer.
    pub fn commit(&mut self) -> Option<EditCommand> {
        let edit = self.active.take()?;
        let command = match edit.field {
            EditField::Comment => EditCommand::Comment {
                row_id: edit.row_id,
                text: edit.buffer,
                notify: true,
            },
            EditField::Phone => EditCommand::Phone {
                row_id: edit.row_id,
                text: edit.buffer,
                notify: true,
            },
            EditField::Price => EditCommand::Price {
                row_id: edit.row_id,
                value: parse_amount(&edit.buffer),
                notify: true,
            },
            EditField::Commission => EditCommand::Commission {
                row_id: edit.row_id,
                value: parse_amount(&edit.buffer),
            },
        };
        Some(command)
    }

    /// Close the buffer without a final notified save. Comment keystrokes
    /// already live-saved stay saved.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Route a key press in the edit buffer. Enter (without Shift, so
    /// multi-line comments stay possible) commits; Escape cancels.
    pub fn key(&mut self, key: &str, shift: bool) -> Option<EditCommand> {
        match key {
            "Enter" if !shift => self.commit(),
            "Escape" => {
                self.cancel();
                None
            }
            _ => None,
        }
    }

    /// Toggle a priority token on the open comment edit. Saves with
    /// notification and keeps the buffer open for further typing.
    pub fn apply_priority(&mut self, priority: u8) -> Option<EditCommand> {
        let edit = self.active.as_mut()?;
        if edit.field != EditField::Comment {
            return None;
        }
        edit.buffer = toggle_priority(&edit.buffer, priority);
        Some(EditCommand::Comment {
            row_id: edit.row_id.clone(),
            text: edit.buffer.clone(),
            notify: true,
        })
    }

    /// Drop the edit if its row disappeared from the snapshot.
    pub fn row_removed(&mut self, row_id: &str) {
        if self.active.as_ref().is_some_and(|e| e.row_id == row_id) {
            self.active = None;
        }
    }
}
