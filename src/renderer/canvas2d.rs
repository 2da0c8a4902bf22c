//! Browser backend over `CanvasRenderingContext2d`

use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Canvas;
use crate::error::{Result, StartupError};

/// A `<canvas>` element and its 2D context
pub struct Canvas2d {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Acquire the 2D context of a canvas element
    pub fn new(element: HtmlCanvasElement) -> Result<Self> {
        let ctx = element
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(StartupError::ContextUnavailable)?;
        Ok(Self { element, ctx })
    }
}

impl Canvas for Canvas2d {
    fn set_size(&mut self, width: f64, height: f64) {
        self.element.set_width(width as u32);
        self.element.set_height(height as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_glow_circle(&mut self, center: DVec2, radius: f64, fill: &str, glow: &str, blur: f64) {
        // Shadow state is left set; later strokes pick up the glow too
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_shadow_color(glow);
        self.ctx.set_shadow_blur(blur);
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_segments(&mut self, segments: &[(DVec2, DVec2)], color: &str, line_width: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        for (a, b) in segments {
            self.ctx.move_to(a.x, a.y);
            self.ctx.line_to(b.x, b.y);
        }
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, offset: DVec2) {
        let _ = self.ctx.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
