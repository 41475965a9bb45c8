//! Zoom/pan state of the grid's content layer.
//!
//! The transform maps content coordinates to screen coordinates as
//! `screen = content * zoom + pan`. Pan is clamped so the content never
//! detaches from the top-left edge: `pan ∈ [min(0, viewport − content·zoom), 0]`
//! per axis. Momentum may temporarily push pan outside these bounds
//! (elastic overshoot); every other path clamps.

/// Minimum zoom level.
pub const ZOOM_MIN: f64 = 0.3;
/// Maximum zoom level.
pub const ZOOM_MAX: f64 = 3.0;

/// Transform state of the visible content layer.
#[derive(Debug, Clone)]
pub struct ContentTransform {
    /// Scale factor (1.0 = 100%), always within [`ZOOM_MIN`, `ZOOM_MAX`].
    pub zoom: f64,
    /// Horizontal translation in screen pixels (non-positive when clamped).
    pub pan_x: f64,
    /// Vertical translation in screen pixels (non-positive when clamped).
    pub pan_y: f64,
    /// Viewport width in pixels.
    pub viewport_width: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Unscaled content width in pixels.
    pub content_width: f64,
    /// Unscaled content height in pixels.
    pub content_height: f64,
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTransform {
    /// Create a transform with default viewport/content extents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            content_width: 800.0,
            content_height: 600.0,
        }
    }

    /// Update viewport dimensions (container resize).
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_pan();
    }

    /// Update content dimensions (row count or layout change).
    pub fn resize_content(&mut self, width: f64, height: f64) {
        self.content_width = width;
        self.content_height = height;
        self.clamp_pan();
    }

    /// Lower pan bound per axis. Upper bound is always 0.
    #[must_use]
    pub fn pan_bounds(&self) -> (f64, f64) {
        (
            (self.viewport_width - self.content_width * self.zoom).min(0.0),
            (self.viewport_height - self.content_height * self.zoom).min(0.0),
        )
    }

    /// Clamp pan back into bounds.
    pub fn clamp_pan(&mut self) {
        let (min_x, min_y) = self.pan_bounds();
        self.pan_x = self.pan_x.clamp(min_x, 0.0);
        self.pan_y = self.pan_y.clamp(min_y, 0.0);
    }

    /// Convert a screen point to content coordinates.
    #[must_use]
    pub fn to_content(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Convert a content point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, content_x: f64, content_y: f64) -> (f64, f64) {
        (
            content_x * self.zoom + self.pan_x,
            content_y * self.zoom + self.pan_y,
        )
    }

    /// Zoom by `delta`, keeping the content point under `focus` at the same
    /// screen position. `None` focuses the viewport center.
    pub fn zoom_at_point(&mut self, delta: f64, focus: Option<(f64, f64)>) {
        let (focus_x, focus_y) = focus.unwrap_or((
            self.viewport_width / 2.0,
            self.viewport_height / 2.0,
        ));

        let new_zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);

        // Content point currently under the focus
        let content_x = (focus_x - self.pan_x) / self.zoom;
        let content_y = (focus_y - self.pan_y) / self.zoom;

        self.zoom = new_zoom;
        self.pan_x = focus_x - content_x * new_zoom;
        self.pan_y = focus_y - content_y * new_zoom;
        self.clamp_pan();
    }

    /// Set absolute pan, clamped.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
        self.clamp_pan();
    }

    /// Pan by delta amounts, clamped.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.set_pan(self.pan_x + dx, self.pan_y + dy);
    }

    /// Reset to 100% zoom at the origin.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}
