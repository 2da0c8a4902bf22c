//! Immediate-mode 2D rendering
//!
//! Entities are drawn through the [`Canvas`] capability. The browser backend
//! wraps a `CanvasRenderingContext2d`; [`RecordingCanvas`] captures commands
//! for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use recording::{DrawCommand, RecordingCanvas};

use glam::DVec2;

use crate::sim::{Constellation, Field, Star};
use crate::viewport::Viewport;

/// Colors for field elements (CSS color strings)
pub mod colors {
    pub const STAR_FILL: &str = "white";
    pub const STAR_GLOW: &str = "#88ffff";
    pub const CONSTELLATION_LINE: &str = "rgba(136, 255, 255, 0.6)";
}

/// Star glow blur radius
pub const STAR_GLOW_BLUR: f64 = 8.0;
/// Constellation line width
pub const CONSTELLATION_LINE_WIDTH: f64 = 1.0;

/// A 2D drawing surface
pub trait Canvas {
    /// Resize the backing surface
    fn set_size(&mut self, width: f64, height: f64);

    /// Clear the rectangle from the origin to (width, height)
    fn clear(&mut self, width: f64, height: f64);

    /// Fill a circle with a blurred glow around it
    fn fill_glow_circle(&mut self, center: DVec2, radius: f64, fill: &str, glow: &str, blur: f64);

    /// Stroke a single path made of disjoint line segments
    fn stroke_segments(&mut self, segments: &[(DVec2, DVec2)], color: &str, line_width: f64);

    fn save(&mut self);
    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, angle: f64);
    fn restore(&mut self);
}

/// Draw a star at its current position
pub fn draw_star<C: Canvas + ?Sized>(canvas: &mut C, star: &Star) {
    canvas.fill_glow_circle(
        star.pos,
        star.radius,
        colors::STAR_FILL,
        colors::STAR_GLOW,
        STAR_GLOW_BLUR,
    );
}

/// Draw a constellation: the ring lines rotated about the viewport center,
/// then the member stars untransformed
pub fn draw_constellation<C: Canvas + ?Sized>(
    canvas: &mut C,
    constellation: &Constellation,
    viewport: Viewport,
) {
    let center = viewport.center();

    canvas.save();
    canvas.translate(center);
    canvas.rotate(constellation.rotation);
    canvas.stroke_segments(
        &constellation.segments(center),
        colors::CONSTELLATION_LINE,
        CONSTELLATION_LINE_WIDTH,
    );
    canvas.restore();

    for star in &constellation.stars {
        draw_star(canvas, star);
    }
}

/// Draw one frame: clear, free stars, then constellations
pub fn draw_field<C: Canvas + ?Sized>(canvas: &mut C, field: &Field, viewport: Viewport) {
    canvas.clear(viewport.width, viewport.height);

    for star in &field.stars {
        draw_star(canvas, star);
    }
    for constellation in &field.constellations {
        draw_constellation(canvas, constellation, viewport);
    }
}
