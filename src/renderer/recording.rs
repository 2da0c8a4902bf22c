//! A canvas that records draw commands instead of painting
//!
//! Coordinates are stored after the current save/translate/rotate transform,
//! so recorded geometry is what would land on screen.

use glam::{DAffine2, DVec2};
use serde::Serialize;

use super::Canvas;

/// One recorded drawing operation, in surface coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Resize {
        width: f64,
        height: f64,
    },
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        fill: String,
        glow: String,
        blur: f64,
    },
    Path {
        segments: Vec<(DVec2, DVec2)>,
        color: String,
        line_width: f64,
    },
}

/// Records commands with the transform stack applied
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    transform: DAffine2,
    stack: Vec<DAffine2>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current save/restore nesting depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Centers of every recorded circle
    pub fn circles(&self) -> Vec<DVec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Segment lists of every recorded path
    pub fn paths(&self) -> Vec<&[(DVec2, DVec2)]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Path { segments, .. } => Some(segments.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Commands recorded since the most recent clear (the last frame)
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Drop recorded commands, keeping the transform state
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn set_size(&mut self, width: f64, height: f64) {
        // Resizing a real canvas resets its context state
        self.transform = DAffine2::IDENTITY;
        self.stack.clear();
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_glow_circle(&mut self, center: DVec2, radius: f64, fill: &str, glow: &str, blur: f64) {
        self.commands.push(DrawCommand::Circle {
            center: self.transform.transform_point2(center),
            radius,
            fill: fill.to_string(),
            glow: glow.to_string(),
            blur,
        });
    }

    fn stroke_segments(&mut self, segments: &[(DVec2, DVec2)], color: &str, line_width: f64) {
        let segments = segments
            .iter()
            .map(|(a, b)| {
                (
                    self.transform.transform_point2(*a),
                    self.transform.transform_point2(*b),
                )
            })
            .collect();
        self.commands.push(DrawCommand::Path {
            segments,
            color: color.to_string(),
            line_width,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn translate(&mut self, offset: DVec2) {
        self.transform = self.transform * DAffine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * DAffine2::from_angle(angle);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, as on a real 2D context
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }
}
