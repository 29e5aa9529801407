//! # Effect & Content Constants
//!
//! Defaults for the starfield, the greeting wave and the resume link.
//!
//! These are the values the embedded configuration falls back to when a
//! table or field is omitted.

// =============================================================================
// STARFIELD
// =============================================================================

/// Number of stars in the field.
pub const STAR_COUNT: usize = 300;

/// Star radius range `[min, max)`.
pub const STAR_SIZE_RANGE: (f64, f64) = (0.1, 1.6);

/// Star vertical velocity range `[min, max)`, in pixels per frame.
pub const STAR_SPEED_RANGE: (f64, f64) = (0.005, 0.02);

/// Initial star opacity range `[min, max)`.
pub const STAR_OPACITY_RANGE: (f64, f64) = (0.2, 1.0);

/// Twinkle frequency factor applied to `now_ms * speed`.
pub const TWINKLE_FREQUENCY: f64 = 0.2;

/// Twinkle amplitude around [`TWINKLE_BASE`].
pub const TWINKLE_AMPLITUDE: f64 = 0.3;

/// Twinkle midpoint opacity.
pub const TWINKLE_BASE: f64 = 0.5;

/// Background fill, `rgb(17, 24, 39)`.
pub const STARFIELD_BACKGROUND: [u8; 3] = [17, 24, 39];

// =============================================================================
// GREETING WAVE
// =============================================================================

/// Duration of the wave gesture, in milliseconds.
pub const WAVE_DURATION_MS: f64 = 3000.0;

/// Peak rotation of the wave, in degrees.
pub const WAVE_AMPLITUDE_DEG: f64 = 15.0;

/// Number of half-turn oscillations over the gesture (`sin(t * PI * 4)`).
pub const WAVE_CYCLES: f64 = 4.0;

/// The glyph that waves.
pub const WAVE_GLYPH: &str = "\u{1F44B}";

// =============================================================================
// LINKS
// =============================================================================

/// Local path of the resume document.
pub const RESUME_PATH: &str = "/Resume.pdf";

/// Target used for every link that opens a new viewing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// `rel` attribute for outbound links.
pub const OUTBOUND_REL: &str = "noopener noreferrer";
