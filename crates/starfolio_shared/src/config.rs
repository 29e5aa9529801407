//! # Site Configuration
//!
//! The page content and effect tuning are one TOML document, embedded in the
//! binary and parsed once at startup.
//!
//! Every effect field has a default, so a document that only carries
//! `[profile]`, `[[sections]]` and `[[links]]` gets the stock starfield and
//! wave.

use serde::{Deserialize, Serialize};

use crate::constants::{
    STARFIELD_BACKGROUND, STAR_COUNT, STAR_OPACITY_RANGE, STAR_SIZE_RANGE, STAR_SPEED_RANGE,
    WAVE_AMPLITUDE_DEG, WAVE_CYCLES, WAVE_DURATION_MS,
};
use crate::content::{Profile, Section, SocialLink};
use crate::error::{StarfolioError, StarfolioResult};

/// The document shipped with the site.
const EMBEDDED: &str = include_str!("../content/portfolio.toml");

/// Starfield tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars.
    pub count: usize,
    /// Radius range `[min, max)`.
    pub size: (f64, f64),
    /// Vertical velocity range `[min, max)`.
    pub speed: (f64, f64),
    /// Initial opacity range `[min, max)`.
    pub opacity: (f64, f64),
    /// Background fill as `[r, g, b]`.
    pub background: [u8; 3],
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            size: STAR_SIZE_RANGE,
            speed: STAR_SPEED_RANGE,
            opacity: STAR_OPACITY_RANGE,
            background: STARFIELD_BACKGROUND,
        }
    }
}

impl StarfieldConfig {
    fn validate(&self) -> StarfolioResult<()> {
        if self.count == 0 {
            return Err(StarfolioError::InvalidConfig(
                "starfield.count must be at least 1".to_owned(),
            ));
        }
        for (name, (min, max)) in [
            ("size", self.size),
            ("speed", self.speed),
            ("opacity", self.opacity),
        ] {
            if !(min < max) {
                return Err(StarfolioError::InvalidConfig(format!(
                    "starfield.{name} range is empty: [{min}, {max})"
                )));
            }
        }
        let (lo, hi) = self.opacity;
        if lo < 0.0 || hi > 1.0 {
            return Err(StarfolioError::InvalidConfig(format!(
                "starfield.opacity must lie in [0, 1], got [{lo}, {hi})"
            )));
        }
        Ok(())
    }
}

/// Greeting wave tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Gesture length in milliseconds.
    pub duration_ms: f64,
    /// Peak rotation in degrees.
    pub amplitude_deg: f64,
    /// Oscillation factor (`sin(t * PI * cycles)`).
    pub cycles: f64,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            duration_ms: WAVE_DURATION_MS,
            amplitude_deg: WAVE_AMPLITUDE_DEG,
            cycles: WAVE_CYCLES,
        }
    }
}

impl GreetingConfig {
    fn validate(&self) -> StarfolioResult<()> {
        if !(self.duration_ms > 0.0) {
            return Err(StarfolioError::InvalidConfig(format!(
                "greeting.duration_ms must be positive, got {}",
                self.duration_ms
            )));
        }
        Ok(())
    }
}

/// Everything the page needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Greeting and biography.
    pub profile: Profile,
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Footer links in display order.
    #[serde(default)]
    pub links: Vec<SocialLink>,
    /// Starfield tuning.
    #[serde(default)]
    pub starfield: StarfieldConfig,
    /// Wave tuning.
    #[serde(default)]
    pub greeting: GreetingConfig,
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`StarfolioError::Config`] on malformed TOML,
    /// [`StarfolioError::InvalidConfig`] on out-of-range tuning.
    pub fn from_toml_str(source: &str) -> StarfolioResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.starfield.validate()?;
        config.greeting.validate()?;
        Ok(config)
    }

    /// Loads the document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_toml_str`].
    pub fn embedded() -> StarfolioResult<Self> {
        Self::from_toml_str(EMBEDDED)
    }
}
