//! Layout state: content transform (zoom/pan), momentum, and column widths.

mod columns;
mod momentum;
mod transform;

pub use columns::{ColumnKey, ColumnLayout, MAX_COLUMN_WIDTH_PCT};
pub use momentum::Momentum;
pub use transform::{ContentTransform, ZOOM_MAX, ZOOM_MIN};
