//! A single star drifting on a small circle around its base point

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::consts::*;
use crate::polar_to_cartesian;

/// A star entity
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Center of the drift orbit
    pub base: DVec2,
    /// Current position (equals `base` until the first update)
    pub pos: DVec2,
    pub radius: f64,
    /// Angular speed in radians per frame (may be negative)
    pub speed: f64,
    /// Current orbit angle, unbounded
    pub angle: f64,
}

impl Star {
    pub fn new(base: DVec2, radius: f64, speed: f64, angle: f64) -> Self {
        Self {
            base,
            pos: base,
            radius,
            speed,
            angle,
        }
    }

    /// A free star somewhere inside a `width` x `height` viewport
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        // Scale a unit sample so a zero-sized viewport stays valid
        let base = DVec2::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
        let radius = rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
        let speed = rng.random_range(-STAR_SPEED_MAX..STAR_SPEED_MAX);
        let angle = rng.random::<f64>() * TAU;
        Self::new(base, radius, speed, angle)
    }

    /// Advance one frame along the orbit
    pub fn update(&mut self) {
        self.angle += self.speed;
        self.pos = self.base + polar_to_cartesian(ORBIT_RADIUS, self.angle);
    }

    /// Distance from the base point
    #[inline]
    pub fn offset(&self) -> f64 {
        self.pos.distance(self.base)
    }
}
