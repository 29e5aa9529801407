//! Styling for the night-sky aesthetic.
//!
//! Dark gray-blue backdrop, white stars, blue accents. Page chrome is styled
//! through utility class lists; the canvas is painted with [`Color`].

use std::fmt;

/// RGBA color, 8-bit channels with a floating alpha (the CSS model).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0-1).
    pub a: f64,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 1.0);
    /// Night sky, `rgb(17, 24, 39)` (matches the page's gray-900).
    pub const NIGHT: Self = Self::rgb(17, 24, 39);

    /// Creates a color from 8-bit channels and an alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from an `[r, g, b]` triple.
    #[must_use]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// CSS color string, usable as a canvas fill style.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f64::EPSILON {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Utility class lists for the page chrome.
pub mod classes {
    /// Page root.
    pub const PAGE: &str = "relative min-h-screen bg-gradient-to-b from-gray-900 to-gray-800 \
        text-gray-100 font-sans p-4 sm:p-8 flex items-center justify-center overflow-hidden";
    /// Starfield canvas, pinned behind everything.
    pub const STARFIELD: &str = "fixed inset-0 z-0";
    /// Column above the canvas.
    pub const CONTENT: &str = "relative z-10 max-w-2xl w-full";
    /// Frosted card.
    pub const CARD: &str = "bg-gray-800 bg-opacity-80 p-6 sm:p-10 rounded-xl shadow-2xl \
        backdrop-filter backdrop-blur-sm border border-gray-700";
    /// Greeting heading.
    pub const GREETING: &str = "text-4xl font-bold mb-6 text-center text-gray-100";
    /// Biography paragraph.
    pub const BIO: &str = "text-xl mb-8 text-center text-gray-300";
    /// Section block (slides right on hover).
    pub const SECTION: &str = "mb-8 transition-all duration-500 ease-in-out transform hover:translate-x-2";
    /// Section heading.
    pub const SECTION_HEADING: &str = "text-2xl font-semibold mb-4 flex items-center";
    /// Section heading icon.
    pub const SECTION_ICON: &str = "text-blue-400 mr-2";
    /// Section heading text.
    pub const SECTION_TITLE: &str = "text-gray-100";
    /// Prose section body.
    pub const PROSE: &str = "text-lg text-gray-300";
    /// Project list.
    pub const PROJECT_LIST: &str = "space-y-4";
    /// Project card.
    pub const PROJECT: &str = "flex items-start space-x-2 bg-gray-700 bg-opacity-50 p-4 rounded-lg \
        transition-all duration-300 ease-in-out hover:bg-opacity-70 hover:shadow-lg";
    /// Project bullet.
    pub const PROJECT_BULLET: &str = "text-blue-400 mt-1 flex-shrink-0";
    /// Project name.
    pub const PROJECT_NAME: &str = "text-lg font-semibold text-gray-100";
    /// Project description.
    pub const PROJECT_DESC: &str = "text-gray-400";
    /// Social link row.
    pub const LINKS: &str = "mt-8 flex justify-center space-x-6";
    /// Social link.
    pub const LINK: &str = "text-gray-400 transition-all duration-300 ease-in-out hover:text-blue-400 \
        transform hover:scale-110";
    /// Inline style of the waving glyph.
    pub const WAVE_STYLE: &str = "display: inline-block; transform-origin: bottom center; transform: rotate(0deg);";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_output() {
        assert_eq!(Color::NIGHT.to_css(), "rgb(17, 24, 39)");
        assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Color::from_array([17, 24, 39]), Color::NIGHT);
    }
}
