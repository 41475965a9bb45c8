//! Interaction state machines: mode arbitration, touch gesture recognition,
//! row drag/reorder, and the long-press copy affordance.

mod gesture;
mod long_press;
mod mode;
mod row_drag;

pub use gesture::{GestureTracker, GestureUpdate, TouchPoint};
pub use long_press::{CopyIndicator, CopyPopover};
pub use mode::InteractionMode;
pub use row_drag::{array_move, move_row_by, reorder_rows, DragEvent, RowDragController};
