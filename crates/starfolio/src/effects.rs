//! The two page effects, bound to browser resources.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use starfolio_shared::{GreetingConfig, StarfieldConfig, StarfolioResult};
use starfolio_ui::{AnimationTask, Animator, FrameControl, FrameTime, StarfieldRenderer, WaveGreeting};
use web_sys::{HtmlCanvasElement, HtmlElement, Window};

use crate::browser::{self, BrowserFrames};
use crate::canvas::CanvasSurface;
use crate::listener::EventListener;

/// Starts the starfield on `canvas`, sized to the window and following its
/// resizes until the returned task is dropped.
pub fn mount_starfield(
    window: &Window,
    canvas: HtmlCanvasElement,
    config: &StarfieldConfig,
    frames: BrowserFrames,
) -> StarfolioResult<AnimationTask<BrowserFrames>> {
    let surface = CanvasSurface::new(canvas)?;
    let viewport = browser::viewport(window)?;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let renderer = Rc::new(RefCell::new(StarfieldRenderer::new(
        surface,
        viewport,
        config,
        StdRng::seed_from_u64(seed),
    )));

    let mut task = AnimationTask::start(frames, Rc::clone(&renderer))?;

    let resize_window = window.clone();
    let on_resize = EventListener::new(window, "resize", move |_| {
        match browser::viewport(&resize_window) {
            Ok(viewport) => renderer.borrow_mut().resize(viewport),
            Err(err) => tracing::debug!(%err, "resize ignored"),
        }
    })?;
    task.attach(on_resize);

    tracing::debug!(
        stars = config.count,
        width = viewport.width,
        height = viewport.height,
        "starfield mounted"
    );
    Ok(task)
}

/// Writes the tween's rotation to the glyph on every frame.
struct WaveGlyph {
    element: HtmlElement,
    greeting: WaveGreeting,
}

impl Animator for WaveGlyph {
    fn frame(&mut self, time: FrameTime) -> FrameControl {
        let control = self.greeting.frame(time);
        if let Err(err) = self
            .element
            .style()
            .set_property("transform", &self.greeting.transform_css())
        {
            tracing::debug!(?err, "glyph transform not applied");
        }
        control
    }
}

/// Plays the wave once on `glyph`.
pub fn mount_wave(
    glyph: HtmlElement,
    config: &GreetingConfig,
    frames: BrowserFrames,
) -> StarfolioResult<AnimationTask<BrowserFrames>> {
    let animator = WaveGlyph {
        element: glyph,
        greeting: WaveGreeting::new(config.clone()),
    };
    AnimationTask::start(frames, Rc::new(RefCell::new(animator)))
}
