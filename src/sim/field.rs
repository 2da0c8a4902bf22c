//! The star field: free stars plus constellations
//!
//! Both collections are replaced wholesale on regeneration; nothing is reused
//! across shuffles.

use rand::Rng;

use super::constellation::Constellation;
use super::star::Star;
use crate::settings::Settings;
use crate::viewport::Viewport;

/// All animated entities on screen
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Free stars drifting independently
    pub stars: Vec<Star>,
    pub constellations: Vec<Constellation>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free stars with `count` random stars inside the viewport
    pub fn create_stars<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, count: usize) {
        self.stars = (0..count)
            .map(|_| Star::random(rng, viewport.width, viewport.height))
            .collect();
    }

    /// Replace the constellations with fresh rings around the viewport center
    pub fn create_constellations<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        settings: &Settings,
    ) {
        let center = viewport.center();
        self.constellations = (0..settings.constellation_count)
            .map(|_| {
                Constellation::ring(
                    rng,
                    center,
                    settings.stars_per_constellation,
                    settings.constellation_radius,
                    settings.constellation_jitter,
                )
            })
            .collect();
    }

    /// Regenerate every entity
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, settings: &Settings) {
        self.create_stars(rng, viewport, settings.star_count);
        self.create_constellations(rng, viewport, settings);
    }

    /// Advance every entity by one frame: free stars first, then constellations
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.update();
        }
        for constellation in &mut self.constellations {
            constellation.update();
        }
    }
}
