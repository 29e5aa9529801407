//! Screen geometry.

/// Size of the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a new viewport.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a float, for simulation math.
    #[must_use]
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float, for simulation math.
    #[must_use]
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// The whole surface as a rectangle at the origin.
    #[must_use]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f64,
    /// Y position (top edge).
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Returns true if the point is inside the rectangle (right/bottom edges excluded).
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_bounds() {
        let bounds = Viewport::new(800, 600).bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(800.0, 10.0));
    }
}
