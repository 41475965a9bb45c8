//! Core data types shared across the grid.

mod order;
mod settings;

pub use order::{Order, Status, SELECTABLE_STATUSES};
pub use settings::{ColumnVisibility, FontWeight, GridSettings, TextAlign, TextAlignment};
