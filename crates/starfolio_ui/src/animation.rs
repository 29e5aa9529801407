//! Easing and time-bounded tweens.
//!
//! Everything here is a pure function of elapsed time; there are no
//! internal counters to drift.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Cubic ease-in-out: `4t³` below one half, `1 + (t-1)(2t-2)²` above.
    CubicInOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = 2.0 * t - 2.0;
                    (t - 1.0) * k * k + 1.0
                }
            }
        }
    }
}

/// A fixed-duration tween over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Duration in milliseconds.
    duration_ms: f64,
    /// Easing applied to linear progress.
    easing: Easing,
}

impl Tween {
    /// Creates a tween. A non-positive duration completes immediately.
    #[must_use]
    pub const fn new(duration_ms: f64, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Eased progress after `elapsed_ms`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed_ms / self.duration_ms).min(1.0))
    }

    /// Returns true once `elapsed_ms` has covered the whole duration.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_in_out_endpoints() {
        let easing = Easing::CubicInOut;

        assert!(easing.apply(0.0).abs() < 1e-12);
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cubic_in_out_is_monotonic() {
        let easing = Easing::CubicInOut;
        let mut last = 0.0;
        for i in 1..=100 {
            let value = easing.apply(f64::from(i) / 100.0);
            assert!(value >= last, "not monotonic at {i}: {value} < {last}");
            last = value;
        }
    }

    #[test]
    fn test_tween_progress_clamps() {
        let tween = Tween::new(3000.0, Easing::Linear);

        assert!((tween.progress(1500.0) - 0.5).abs() < 1e-12);
        assert!((tween.progress(9000.0) - 1.0).abs() < 1e-12);
        assert!(!tween.is_complete(2999.0));
        assert!(tween.is_complete(3000.0));
    }

    #[test]
    fn test_zero_duration_completes() {
        let tween = Tween::new(0.0, Easing::CubicInOut);
        assert!((tween.progress(0.0) - 1.0).abs() < 1e-12);
        assert!(tween.is_complete(0.0));
    }
}
