//! Window size tracking
//!
//! The controller owns the current viewport and keeps the drawing surface the
//! same size. Regeneration on resize is driven by [`crate::Sky`].

use glam::DVec2;

use crate::renderer::Canvas;

/// Drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the viewport; constellations orbit this point
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies in `[0, width) x [0, height)`
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}

/// Tracks the window size and mirrors it onto the drawing surface
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    viewport: Viewport,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record new window dimensions and resize the surface to match
    pub fn resize<C: Canvas + ?Sized>(&mut self, canvas: &mut C, width: f64, height: f64) -> Viewport {
        // Browsers can report fractional or transiently negative sizes while zooming
        self.viewport = Viewport::new(width.max(0.0).floor(), height.max(0.0).floor());
        canvas.set_size(self.viewport.width, self.viewport.height);
        log::info!(
            "Viewport resized to {}x{}",
            self.viewport.width,
            self.viewport.height
        );
        self.viewport
    }
}
