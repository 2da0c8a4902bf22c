//! The animated sky: viewport, field and quote behind one driver
//!
//! A `Sky` only exists once it has been started, so there is no
//! half-initialized state. The platform calls [`Sky::tick`] once per
//! animation frame and forwards resize and shuffle events.

use rand::Rng;

use crate::quotes::{self, QUOTES, Quote, QuoteDisplay};
use crate::renderer::{self, Canvas};
use crate::settings::Settings;
use crate::sim::Field;
use crate::viewport::{Viewport, ViewportController};

/// Starfield plus the current quote
pub struct Sky<R: Rng> {
    settings: Settings,
    viewport: ViewportController,
    field: Field,
    quote_index: usize,
    rng: R,
    frames: u64,
}

impl<R: Rng> Sky<R> {
    /// Size the surface, populate the field and show the first quote
    pub fn start<C, D>(
        settings: Settings,
        rng: R,
        canvas: &mut C,
        display: &mut D,
        width: f64,
        height: f64,
    ) -> Self
    where
        C: Canvas + ?Sized,
        D: QuoteDisplay + ?Sized,
    {
        let mut sky = Self {
            settings,
            viewport: ViewportController::new(),
            field: Field::new(),
            quote_index: 0,
            rng,
            frames: 0,
        };
        sky.viewport.resize(canvas, width, height);
        sky.shuffle_stars(display);
        sky
    }

    /// Regenerate every star and constellation and pick a new quote
    pub fn shuffle_stars<D: QuoteDisplay + ?Sized>(&mut self, display: &mut D) {
        let viewport = self.viewport.viewport();
        self.field.regenerate(&mut self.rng, viewport, &self.settings);
        self.display_random_quote(display);
        log::debug!(
            "Shuffled {} stars, {} constellations",
            self.field.stars.len(),
            self.field.constellations.len()
        );
    }

    /// Pick a quote uniformly at random and write it to the display
    pub fn display_random_quote<D: QuoteDisplay + ?Sized>(&mut self, display: &mut D) -> &'static Quote {
        self.quote_index = quotes::random_index(&mut self.rng);
        let quote = &QUOTES[self.quote_index];
        quotes::display(quote, display);
        log::debug!("Showing quote {}", self.quote_index);
        quote
    }

    /// Window resized: resize the surface and regenerate everything
    pub fn resize<C, D>(&mut self, canvas: &mut C, display: &mut D, width: f64, height: f64)
    where
        C: Canvas + ?Sized,
        D: QuoteDisplay + ?Sized,
    {
        self.viewport.resize(canvas, width, height);
        self.shuffle_stars(display);
    }

    /// One animation frame: clear, advance, draw
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.field.update();
        renderer::draw_field(canvas, &self.field, self.viewport.viewport());
        self.frames += 1;
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn quote(&self) -> &'static Quote {
        &QUOTES[self.quote_index]
    }

    /// Frames drawn since start
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::quotes::QuoteSlots;
    use crate::renderer::{DrawCommand, RecordingCanvas};
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn start(seed: u64, w: f64, h: f64) -> (Sky<Pcg32>, RecordingCanvas, QuoteSlots) {
        let mut canvas = RecordingCanvas::new();
        let mut slots = QuoteSlots::default();
        let sky = Sky::start(
            Settings::default(),
            Pcg32::seed_from_u64(seed),
            &mut canvas,
            &mut slots,
            w,
            h,
        );
        (sky, canvas, slots)
    }

    fn shown_quote_is_known(slots: &QuoteSlots) -> bool {
        QUOTES
            .iter()
            .any(|q| q.display_text() == slots.text && q.display_author() == slots.author)
    }

    #[test]
    fn test_start_800x600() {
        let (sky, canvas, slots) = start(12345, 800.0, 600.0);

        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Resize {
                width: 800.0,
                height: 600.0
            }]
        );
        assert_eq!(sky.field().stars.len(), STAR_COUNT);
        for star in &sky.field().stars {
            assert!(sky.viewport().contains(star.base));
        }

        let center = DVec2::new(400.0, 300.0);
        let max_jitter = CONSTELLATION_JITTER * std::f64::consts::SQRT_2;
        assert_eq!(sky.field().constellations.len(), CONSTELLATION_COUNT);
        for c in &sky.field().constellations {
            assert_eq!(c.stars.len(), STARS_PER_CONSTELLATION);
            for star in &c.stars {
                let d = star.base.distance(center);
                assert!((d - CONSTELLATION_RADIUS).abs() <= max_jitter);
            }
        }

        assert!(shown_quote_is_known(&slots));
        assert_eq!(slots.text, sky.quote().display_text());
    }

    #[test]
    fn test_shuffle_keeps_shape() {
        let (mut sky, _canvas, mut slots) = start(1, 800.0, 600.0);
        for _ in 0..20 {
            let before = sky.field().stars[0].clone();
            sky.shuffle_stars(&mut slots);
            assert_eq!(sky.field().stars.len(), STAR_COUNT);
            assert_eq!(sky.field().constellations.len(), CONSTELLATION_COUNT);
            assert_ne!(before, sky.field().stars[0]);
            assert!(shown_quote_is_known(&slots));
        }
    }

    #[test]
    fn test_resize_regenerates_inside_new_bounds() {
        let (mut sky, mut canvas, mut slots) = start(2024, 800.0, 600.0);
        sky.resize(&mut canvas, &mut slots, 1024.0, 768.0);

        assert_eq!(sky.viewport(), Viewport::new(1024.0, 768.0));
        assert_eq!(
            canvas.commands.last(),
            Some(&DrawCommand::Resize {
                width: 1024.0,
                height: 768.0
            })
        );
        for star in &sky.field().stars {
            assert!(sky.viewport().contains(star.base));
        }
        let center = DVec2::new(512.0, 384.0);
        for star in sky.field().constellations.iter().flat_map(|c| &c.stars) {
            assert!(star.base.distance(center) <= CONSTELLATION_RADIUS + 15.0);
        }
    }

    #[test]
    fn test_shrinking_resize_leaves_no_star_outside() {
        let (mut sky, mut canvas, mut slots) = start(77, 1024.0, 768.0);
        sky.resize(&mut canvas, &mut slots, 320.0, 240.0);
        for star in &sky.field().stars {
            assert!(star.base.x < 320.0 && star.base.y < 240.0);
        }
    }

    #[test]
    fn test_tick_draws_full_frame() {
        let (mut sky, mut canvas, _slots) = start(5, 800.0, 600.0);
        canvas.clear_commands();

        sky.tick(&mut canvas);
        sky.tick(&mut canvas);

        assert_eq!(sky.frames(), 2);
        let frame = canvas.last_frame();
        let per_frame = 1 + STAR_COUNT + CONSTELLATION_COUNT * (1 + STARS_PER_CONSTELLATION);
        assert_eq!(frame.len(), per_frame);
        assert_eq!(canvas.commands.len(), per_frame * 2);
        assert_eq!(canvas.depth(), 0);

        for star in &sky.field().stars {
            assert!((star.offset() - ORBIT_RADIUS).abs() < 1e-9);
        }
        for c in &sky.field().constellations {
            assert!((c.rotation - 2.0 * c.rotation_speed).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let (a, _, slots_a) = start(31337, 800.0, 600.0);
        let (b, _, slots_b) = start(31337, 800.0, 600.0);
        assert_eq!(a.field().stars, b.field().stars);
        assert_eq!(slots_a, slots_b);
    }
}
