//! The single interaction-mode discriminator.
//!
//! Many competing interaction modes share one pointer stream. Every handler
//! checks the current mode before acting, and entering a higher-priority
//! mode suppresses lower-priority handling until that mode ends:
//! edit > resize > drag > pan/zoom.

/// What the grid is currently doing with the pointer stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Single-finger pan of the content layer.
    Pan,
    /// Two-finger pinch zoom.
    Pinch,
    /// A row lifted for reordering.
    RowDrag,
    /// A column resize drag.
    ColumnResize,
    /// A cell edit buffer is open; all gesture handling is suppressed.
    CellEdit,
}

impl InteractionMode {
    fn priority(self) -> u8 {
        match self {
            InteractionMode::Idle => 0,
            InteractionMode::Pan | InteractionMode::Pinch => 1,
            InteractionMode::RowDrag => 2,
            InteractionMode::ColumnResize => 3,
            InteractionMode::CellEdit => 4,
        }
    }

    /// Whether pan/zoom gesture handling is suppressed in this mode.
    #[must_use]
    pub fn blocks_pan_zoom(self) -> bool {
        self.priority() >= InteractionMode::RowDrag.priority()
    }

    /// Whether `next` may take over from the current mode. Equal- or
    /// higher-priority modes win the pointer stream; lower ones wait.
    #[must_use]
    pub fn allows(self, next: InteractionMode) -> bool {
        next.priority() >= self.priority()
    }
}
