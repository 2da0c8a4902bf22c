//! Starfield simulation
//!
//! Geometry and per-frame motion only:
//! - Randomness comes in through a caller-supplied `Rng`
//! - One `update` per animation frame, no time deltas
//! - No rendering or platform dependencies

pub mod constellation;
pub mod field;
pub mod star;

pub use constellation::Constellation;
pub use field::Field;
pub use star::Star;
