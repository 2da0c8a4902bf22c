//! Field composition settings
//!
//! Defaults reproduce the stock page. The page may override any field with a
//! JSON `data-settings` attribute on the canvas element.

use serde::Deserialize;

use crate::consts::*;
use crate::error::Result;

/// How many entities to generate and how constellations are laid out
///
/// The defaults give exactly 100 free stars and 3 constellations of 5 stars.
/// Overriding the counts through `data-settings` gives up that fixed shape;
/// every shuffle then follows the overridden counts instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Free stars per shuffle
    pub star_count: usize,
    pub constellation_count: usize,
    pub stars_per_constellation: usize,
    /// Distance of constellation stars from the viewport center
    pub constellation_radius: f64,
    /// Maximum per-axis offset applied to each constellation star
    pub constellation_jitter: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            constellation_count: CONSTELLATION_COUNT,
            stars_per_constellation: STARS_PER_CONSTELLATION,
            constellation_radius: CONSTELLATION_RADIUS,
            constellation_jitter: CONSTELLATION_JITTER,
        }
    }
}

impl Settings {
    /// Attribute on the canvas element carrying JSON overrides
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Settings from an optional attribute value (absent means defaults)
    pub fn from_attribute(value: Option<&str>) -> Result<Self> {
        match value {
            Some(json) if !json.trim().is_empty() => {
                let settings = Self::from_json(json)?;
                log::info!("Loaded settings from {}", Self::ATTRIBUTE);
                Ok(settings)
            }
            _ => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
