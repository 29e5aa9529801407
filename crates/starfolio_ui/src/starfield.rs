//! Drifting, twinkling starfield.
//!
//! Per frame:
//! 1. Fill the surface with the background color
//! 2. Draw every star as a circle of radius `size`, alpha `opacity`
//! 3. Move every star down by `speed`; stars past the bottom edge restart at
//!    the top with a fresh `x`
//! 4. Recompute opacity from wall-clock time ([`twinkle`])
//!
//! The surface size is read at draw time, so a resize takes effect on the
//! next frame. Star positions are never rescaled; stars left outside a
//! shrunken surface drift until they wrap.

use rand::Rng;
use starfolio_shared::constants::{TWINKLE_AMPLITUDE, TWINKLE_BASE, TWINKLE_FREQUENCY};
use starfolio_shared::StarfieldConfig;

use crate::frame::{Animator, FrameControl, FrameTime};
use crate::layout::Viewport;
use crate::render::{FrameRenderer, RenderCommand, Surface};
use crate::style::Color;

/// A single point of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Radius.
    pub size: f64,
    /// Vertical velocity, pixels per frame.
    pub speed: f64,
    /// Fill alpha (0-1).
    pub opacity: f64,
}

/// Opacity of a star with `speed` at wall-clock `now_ms`.
///
/// Each star twinkles at a frequency tied to its speed. The phase comes from
/// the clock alone, so a paused page resumes with a jump.
#[inline]
#[must_use]
pub fn twinkle(now_ms: f64, speed: f64) -> f64 {
    (now_ms * speed * TWINKLE_FREQUENCY).sin() * TWINKLE_AMPLITUDE + TWINKLE_BASE
}

/// Uniform sample in `[min, max)`.
fn uniform<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// The star population. Fixed size for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Generates `config.count` stars inside `viewport`.
    pub fn generate<R: Rng>(config: &StarfieldConfig, viewport: Viewport, rng: &mut R) -> Self {
        let stars = (0..config.count)
            .map(|_| Star {
                x: rng.gen::<f64>() * viewport.width_f64(),
                y: rng.gen::<f64>() * viewport.height_f64(),
                size: uniform(rng, config.size),
                speed: uniform(rng, config.speed),
                opacity: uniform(rng, config.opacity),
            })
            .collect();
        Self { stars }
    }

    /// Wraps an existing population.
    #[must_use]
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    /// Returns the stars.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Returns the star count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Returns true if there are no stars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Emits the background fill and one circle per star.
    pub fn draw(&self, renderer: &mut FrameRenderer, viewport: Viewport, background: Color) {
        renderer.push(RenderCommand::Fill {
            bounds: viewport.bounds(),
            color: background,
        });
        for star in &self.stars {
            renderer.push(RenderCommand::Circle {
                x: star.x,
                y: star.y,
                radius: star.size,
                color: Color::WHITE.with_alpha(star.opacity),
            });
        }
    }

    /// Moves every star one frame and recomputes its opacity.
    pub fn advance<R: Rng>(&mut self, viewport: Viewport, now_ms: f64, rng: &mut R) {
        let height = viewport.height_f64();
        let width = viewport.width_f64();
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > height {
                star.y = 0.0;
                star.x = rng.gen::<f64>() * width;
            }
            star.opacity = twinkle(now_ms, star.speed);
        }
    }
}

/// Starfield bound to a drawing surface.
pub struct StarfieldRenderer<S: Surface, R: Rng> {
    surface: S,
    field: Starfield,
    rng: R,
    renderer: FrameRenderer,
    background: Color,
}

impl<S: Surface, R: Rng> StarfieldRenderer<S, R> {
    /// Sizes `surface` to `viewport` and populates it.
    pub fn new(mut surface: S, viewport: Viewport, config: &StarfieldConfig, mut rng: R) -> Self {
        surface.resize(viewport);
        let field = Starfield::generate(config, viewport, &mut rng);
        tracing::info!(
            stars = field.len(),
            width = viewport.width,
            height = viewport.height,
            "starfield created"
        );
        Self {
            surface,
            field,
            rng,
            renderer: FrameRenderer::with_capacity(config.count + 1),
            background: Color::from_array(config.background),
        }
    }

    /// Replaces the star population, keeping surface and rng.
    #[must_use]
    pub fn with_starfield(mut self, field: Starfield) -> Self {
        self.field = field;
        self
    }

    /// Matches the surface to a new viewport. Stars are left where they are.
    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        tracing::debug!(width = viewport.width, height = viewport.height, "starfield resized");
    }

    /// Paints the current state, then advances the simulation.
    pub fn paint_frame(&mut self, wall_clock_ms: f64) {
        let viewport = self.surface.viewport();

        self.renderer.begin_frame();
        self.field.draw(&mut self.renderer, viewport, self.background);
        self.surface.present(self.renderer.end_frame());

        self.field.advance(viewport, wall_clock_ms, &mut self.rng);
    }

    /// Returns the drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the star population.
    #[must_use]
    pub fn starfield(&self) -> &Starfield {
        &self.field
    }
}

impl<S: Surface, R: Rng> Animator for StarfieldRenderer<S, R> {
    fn frame(&mut self, time: FrameTime) -> FrameControl {
        self.paint_frame(time.wall_clock_ms);
        FrameControl::Continue
    }
}
