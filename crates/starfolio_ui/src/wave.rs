//! One-shot waving-hand gesture.
//!
//! The glyph rotates back and forth with a decaying amplitude and settles at
//! exactly 0° once the duration has elapsed:
//!
//! ```text
//! progress  = min(elapsed / duration, 1)
//! wave(t)   = sin(t * PI * cycles) * CubicInOut(1 - t)
//! rotation  = wave(progress) * amplitude
//! ```
//!
//! `Idle → Running{start} → Done`; `Done` is absorbing.

use std::f64::consts::PI;

use starfolio_shared::GreetingConfig;

use crate::animation::{Easing, Tween};
use crate::frame::{Animator, FrameControl, FrameTime};

/// Oscillation at normalized time `t`, in `[-1, 1]`.
#[must_use]
pub fn wave(t: f64, cycles: f64) -> f64 {
    (t * PI * cycles).sin() * Easing::CubicInOut.apply(1.0 - t)
}

/// Rotation in degrees after `elapsed_ms`. Exactly 0 once the gesture is over.
#[must_use]
pub fn rotation_at(elapsed_ms: f64, config: &GreetingConfig) -> f64 {
    let tween = Tween::new(config.duration_ms, Easing::Linear);
    if tween.is_complete(elapsed_ms) {
        return 0.0;
    }
    let progress = tween.progress(elapsed_ms.max(0.0));
    wave(progress, config.cycles) * config.amplitude_deg
}

/// Lifecycle of the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WavePhase {
    /// Mounted, no frame seen yet.
    Idle,
    /// Running since the host timestamp `start_ms`.
    Running {
        /// Timestamp of the first frame.
        start_ms: f64,
    },
    /// Finished; rotation is 0 for good.
    Done,
}

/// The greeting's rotation state.
#[derive(Debug, Clone)]
pub struct WaveGreeting {
    config: GreetingConfig,
    phase: WavePhase,
    rotation: f64,
}

impl WaveGreeting {
    /// Creates an idle greeting at 0°.
    #[must_use]
    pub fn new(config: GreetingConfig) -> Self {
        Self {
            config,
            phase: WavePhase::Idle,
            rotation: 0.0,
        }
    }

    /// Current rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Returns true once the gesture has settled.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == WavePhase::Done
    }

    /// CSS `transform` value for the glyph.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("rotate({}deg)", self.rotation)
    }

    /// Advances to host timestamp `timestamp_ms`.
    pub fn advance(&mut self, timestamp_ms: f64) -> FrameControl {
        let start_ms = match self.phase {
            WavePhase::Done => return FrameControl::Finish,
            WavePhase::Idle => {
                self.phase = WavePhase::Running { start_ms: timestamp_ms };
                timestamp_ms
            }
            WavePhase::Running { start_ms } => start_ms,
        };

        let elapsed = timestamp_ms - start_ms;
        if elapsed >= self.config.duration_ms {
            self.rotation = 0.0;
            self.phase = WavePhase::Done;
            return FrameControl::Finish;
        }

        self.rotation = rotation_at(elapsed, &self.config);
        FrameControl::Continue
    }
}

impl Default for WaveGreeting {
    fn default() -> Self {
        Self::new(GreetingConfig::default())
    }
}

impl Animator for WaveGreeting {
    fn frame(&mut self, time: FrameTime) -> FrameControl {
        self.advance(time.timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_zero_at_start() {
        let config = GreetingConfig::default();
        assert!(rotation_at(0.0, &config).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_exactly_zero_at_end() {
        let config = GreetingConfig::default();
        assert_eq!(rotation_at(3000.0, &config).to_bits(), 0.0_f64.to_bits());
        assert_eq!(rotation_at(10_000.0, &config).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_rotation_bounded_by_amplitude() {
        let config = GreetingConfig::default();
        let mut peak: f64 = 0.0;
        for ms in 1..3000 {
            let rotation = rotation_at(f64::from(ms), &config);
            assert!((-15.0..=15.0).contains(&rotation), "{ms}ms: {rotation}");
            peak = peak.max(rotation.abs());
        }
        assert!(peak > 5.0, "the wave should be visible, peak was {peak}");
    }

    #[test]
    fn test_first_frame_starts_the_clock() {
        let mut greeting = WaveGreeting::default();

        assert_eq!(greeting.advance(500.0), FrameControl::Continue);
        assert_eq!(greeting.phase(), WavePhase::Running { start_ms: 500.0 });
        assert!(greeting.rotation().abs() < 1e-12);

        greeting.advance(500.0 + 187.5);
        assert!((greeting.rotation() - rotation_at(187.5, &GreetingConfig::default())).abs() < 1e-12);
    }

    #[test]
    fn test_done_is_absorbing() {
        let mut greeting = WaveGreeting::default();
        greeting.advance(0.0);
        greeting.advance(1000.0);

        assert_eq!(greeting.advance(3000.0), FrameControl::Finish);
        assert!(greeting.is_done());
        assert_eq!(greeting.rotation().to_bits(), 0.0_f64.to_bits());

        assert_eq!(greeting.advance(3100.0), FrameControl::Finish);
        assert_eq!(greeting.rotation().to_bits(), 0.0_f64.to_bits());
        assert_eq!(greeting.transform_css(), "rotate(0deg)");
    }
}
