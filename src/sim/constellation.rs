//! Constellations: small star rings that rotate around the viewport center

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use super::star::Star;
use crate::consts::*;
use crate::polar_to_cartesian;

/// A closed ring of stars rotating as a rigid group
#[derive(Debug, Clone)]
pub struct Constellation {
    /// Member stars, in ring order
    pub stars: Vec<Star>,
    /// Accumulated rotation (radians, unbounded)
    pub rotation: f64,
    /// Rotation per frame, fixed at creation
    pub rotation_speed: f64,
}

impl Constellation {
    pub fn new<R: Rng + ?Sized>(stars: Vec<Star>, rng: &mut R) -> Self {
        Self {
            stars,
            rotation: 0.0,
            rotation_speed: rng.random_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX),
        }
    }

    /// Lay `count` stars evenly around `center` at `radius`, each nudged by up
    /// to `jitter` per axis
    pub fn ring<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        count: usize,
        radius: f64,
        jitter: f64,
    ) -> Self {
        let stars = (0..count)
            .map(|j| {
                let theta = j as f64 / count as f64 * TAU;
                let nudge = DVec2::new(
                    (rng.random::<f64>() - 0.5) * 2.0 * jitter,
                    (rng.random::<f64>() - 0.5) * 2.0 * jitter,
                );
                let base = center + polar_to_cartesian(radius, theta) + nudge;
                Star::new(base, CONSTELLATION_STAR_RADIUS, 0.0, 0.0)
            })
            .collect();
        Self::new(stars, rng)
    }

    /// Advance the rotation by one frame. Member stars stay put.
    pub fn update(&mut self) {
        self.rotation += self.rotation_speed;
    }

    /// Line segments joining each star to its successor, closing the ring,
    /// with endpoints relative to `center`
    pub fn segments(&self, center: DVec2) -> Vec<(DVec2, DVec2)> {
        let n = self.stars.len();
        (0..n)
            .map(|i| {
                let a = self.stars[i].pos - center;
                let b = self.stars[(i + 1) % n].pos - center;
                (a, b)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_ring_layout() {
        let mut rng = Pcg32::seed_from_u64(42);
        let center = DVec2::new(400.0, 300.0);
        let c = Constellation::ring(&mut rng, center, 5, 100.0, 10.0);

        assert_eq!(c.stars.len(), 5);
        assert_eq!(c.rotation, 0.0);
        for (j, star) in c.stars.iter().enumerate() {
            let ideal = center + polar_to_cartesian(100.0, j as f64 / 5.0 * TAU);
            let d = star.base - ideal;
            assert!(d.x.abs() <= 10.0 && d.y.abs() <= 10.0);
            assert_eq!(star.speed, 0.0);
            assert_eq!(star.angle, 0.0);
            assert_eq!(star.radius, CONSTELLATION_STAR_RADIUS);
        }
    }

    #[test]
    fn test_rotation_speed_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let c = Constellation::new(Vec::new(), &mut rng);
            assert!(c.rotation_speed >= ROTATION_SPEED_MIN);
            assert!(c.rotation_speed < ROTATION_SPEED_MAX);
        }
    }

    #[test]
    fn test_update_accumulates_rotation_only() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut c = Constellation::ring(&mut rng, DVec2::ZERO, 5, 100.0, 10.0);
        let before: Vec<DVec2> = c.stars.iter().map(|s| s.pos).collect();

        for _ in 0..10 {
            c.update();
        }

        assert!((c.rotation - c.rotation_speed * 10.0).abs() < 1e-12);
        let after: Vec<DVec2> = c.stars.iter().map(|s| s.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_segments_close_the_ring() {
        let mut rng = Pcg32::seed_from_u64(1);
        let stars = vec![
            Star::new(DVec2::new(10.0, 0.0), 2.0, 0.0, 0.0),
            Star::new(DVec2::new(0.0, 10.0), 2.0, 0.0, 0.0),
            Star::new(DVec2::new(-10.0, 0.0), 2.0, 0.0, 0.0),
        ];
        let c = Constellation::new(stars, &mut rng);
        let center = DVec2::new(5.0, 5.0);
        let segs = c.segments(center);

        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], (DVec2::new(5.0, -5.0), DVec2::new(-5.0, 5.0)));
        // Last star links back to the first
        assert_eq!(segs[2].1, DVec2::new(5.0, -5.0));
    }
}
