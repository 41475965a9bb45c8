//! Per-column width management and the drag-resize interaction.
//!
//! Widths are percentages of the container width. Sums are not required to
//! equal 100: the comment column is flexible and absorbs whatever space the
//! fixed columns leave over. The commission column has a fixed pixel width
//! and does not participate in resizing.

use std::collections::HashMap;

/// Hard upper bound for any column, in percent of container width.
pub const MAX_COLUMN_WIDTH_PCT: f64 = 50.0;

/// Columns of the order grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Code,
    Client,
    Phone,
    Price,
    Status,
    Comment,
    Commission,
}

impl ColumnKey {
    /// Minimum width in percent. Narrow columns stay usable but can be
    /// squeezed to near-zero for operator flexibility; the comment column
    /// keeps a slightly larger floor. The commission column is fixed-width
    /// and sits outside the percentage table, so it carries no minimum.
    #[must_use]
    pub fn min_width_pct(self) -> f64 {
        match self {
            ColumnKey::Code | ColumnKey::Client | ColumnKey::Phone | ColumnKey::Price => 0.5,
            ColumnKey::Comment => 1.0,
            ColumnKey::Status => 2.0,
            ColumnKey::Commission => 0.0,
        }
    }

    /// Whether the column carries a resize handle.
    #[must_use]
    pub fn resizable(self) -> bool {
        !matches!(self, ColumnKey::Commission)
    }

    fn default_width_pct(self) -> f64 {
        match self {
            ColumnKey::Code | ColumnKey::Status => 12.0,
            ColumnKey::Client => 20.0,
            ColumnKey::Phone => 16.0,
            ColumnKey::Price => 10.0,
            ColumnKey::Comment => 30.0,
            ColumnKey::Commission => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ResizeDrag {
    column: ColumnKey,
    start_x: f64,
    initial_width: f64,
}

/// Width table plus the single in-flight resize drag.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    widths: HashMap<ColumnKey, f64>,
    drag: Option<ResizeDrag>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    /// Create a layout with the default width distribution.
    #[must_use]
    pub fn new() -> Self {
        let widths = [
            ColumnKey::Code,
            ColumnKey::Client,
            ColumnKey::Phone,
            ColumnKey::Price,
            ColumnKey::Status,
            ColumnKey::Comment,
        ]
        .into_iter()
        .map(|col| (col, col.default_width_pct()))
        .collect();
        Self { widths, drag: None }
    }

    /// Current width of a column in percent.
    #[must_use]
    pub fn width_pct(&self, column: ColumnKey) -> f64 {
        self.widths
            .get(&column)
            .copied()
            .unwrap_or_else(|| column.default_width_pct())
    }

    /// Column currently being resized, if any.
    #[must_use]
    pub fn resizing_column(&self) -> Option<ColumnKey> {
        self.drag.map(|d| d.column)
    }

    /// Whether a resize drag is in progress.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a resize drag. Returns `false` if the column is not resizable
    /// or another column's resize is still in progress.
    pub fn begin_resize(&mut self, column: ColumnKey, pointer_x: f64) -> bool {
        if self.drag.is_some() || !column.resizable() {
            return false;
        }
        self.drag = Some(ResizeDrag {
            column,
            start_x: pointer_x,
            initial_width: self.width_pct(column),
        });
        true
    }

    /// Update the in-flight resize from the current pointer position.
    /// The delta is always computed against the drag's starting position,
    /// not incrementally, so jittery move events cannot accumulate error.
    pub fn update_resize(&mut self, pointer_x: f64, container_width: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        if container_width <= 0.0 {
            return;
        }
        let delta_pct = (pointer_x - drag.start_x) / container_width * 100.0;
        let new_width = (drag.initial_width + delta_pct)
            .clamp(drag.column.min_width_pct(), MAX_COLUMN_WIDTH_PCT);
        self.widths.insert(drag.column, new_width);
    }

    /// Finish the resize drag.
    pub fn end_resize(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_resize_at_a_time() {
        let mut layout = ColumnLayout::new();
        assert!(layout.begin_resize(ColumnKey::Code, 100.0));
        assert!(!layout.begin_resize(ColumnKey::Phone, 200.0));
        assert_eq!(layout.resizing_column(), Some(ColumnKey::Code));
        layout.end_resize();
        assert!(layout.begin_resize(ColumnKey::Phone, 200.0));
    }

    #[test]
    fn commission_column_is_fixed() {
        let mut layout = ColumnLayout::new();
        assert!(!layout.begin_resize(ColumnKey::Commission, 0.0));
        // Fixed-width column: no percentage minimum to honor.
        assert!(ColumnKey::Commission.min_width_pct() <= layout.width_pct(ColumnKey::Commission));
    }
}
