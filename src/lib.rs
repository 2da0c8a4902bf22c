//! Cosmic Quotes - an animated starfield with a philosophy quote
//!
//! Core modules:
//! - `sim`: Star, constellation and field geometry (no rendering or platform dependencies)
//! - `renderer`: Drawing-surface abstraction with 2D canvas and recording backends
//! - `quotes`: Fixed quote bank and random selection
//! - `viewport`: Window size tracking
//! - `settings`: Field composition, optionally overridden from JSON
//! - `page`: Fail-fast lookup of the page elements before startup
//! - `sky`: Ties everything together behind init/resize/shuffle/tick

pub mod error;
pub mod page;
pub mod quotes;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sky;
pub mod viewport;

pub use error::{Result, StartupError};
pub use quotes::{QUOTES, Quote, QuoteDisplay};
pub use settings::Settings;
pub use sky::Sky;
pub use viewport::{Viewport, ViewportController};

use glam::DVec2;

/// Field configuration constants
pub mod consts {
    /// Radius of the circle each star drifts along around its base point
    pub const ORBIT_RADIUS: f64 = 10.0;

    /// Free star defaults
    pub const STAR_COUNT: usize = 100;
    pub const STAR_RADIUS_MIN: f64 = 0.5;
    pub const STAR_RADIUS_MAX: f64 = 2.0;
    /// Angular speed is drawn from [-STAR_SPEED_MAX, STAR_SPEED_MAX) radians/frame
    pub const STAR_SPEED_MAX: f64 = 0.01;

    /// Constellation defaults
    pub const CONSTELLATION_COUNT: usize = 3;
    pub const STARS_PER_CONSTELLATION: usize = 5;
    pub const CONSTELLATION_RADIUS: f64 = 100.0;
    /// Per-axis offset range applied to each constellation star
    pub const CONSTELLATION_JITTER: f64 = 10.0;
    pub const CONSTELLATION_STAR_RADIUS: f64 = 2.0;
    /// Rotation speed range in radians/frame
    pub const ROTATION_SPEED_MIN: f64 = 0.001;
    pub const ROTATION_SPEED_MAX: f64 = 0.003;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
