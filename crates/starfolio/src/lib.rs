//! # Starfolio
//!
//! Browser half of the portfolio page. On `wasm32` the module start hook
//! builds the page from the embedded content, then mounts two independent
//! effects:
//!
//! - the starfield on a full-viewport `<canvas>`
//! - the waving hand next to the greeting
//!
//! Each effect is an owned [`starfolio_ui::AnimationTask`]; [`unmount`]
//! drops them, which cancels their pending frames and removes the resize
//! listener.
//!
//! On other targets this crate is empty; the engine is tested natively in
//! `starfolio_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod listener;

#[cfg(target_arch = "wasm32")]
pub use app::{start, unmount};

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;

    use starfolio_shared::{SiteConfig, StarfolioError};
    use starfolio_ui::{AnimationTask, PortfolioView};
    use wasm_bindgen::prelude::*;

    use crate::browser::{self, BrowserFrames};
    use crate::dom::Page;
    use crate::effects;

    /// The mounted page and its running effects.
    struct App {
        /// Dropped first: effects stop before their DOM goes away.
        starfield: Option<AnimationTask<BrowserFrames>>,
        wave: Option<AnimationTask<BrowserFrames>>,
        _page: Page,
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    fn mount() -> Result<App, StarfolioError> {
        let config = SiteConfig::embedded()?;
        let window = browser::window()?;
        let document = window
            .document()
            .ok_or_else(|| StarfolioError::Host("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| StarfolioError::Host("no body".to_owned()))?;

        let tree = PortfolioView::new(&config).build();
        let page = Page::build(&document, &body, &tree)?;
        let frames = BrowserFrames::new(window.clone());

        // A missing canvas or context only costs the effect, never the page.
        let starfield = page
            .canvas()
            .ok_or(StarfolioError::SurfaceUnavailable("starfield canvas"))
            .and_then(|canvas| effects::mount_starfield(&window, canvas, &config.starfield, frames.clone()))
            .map_err(|err| tracing::debug!(%err, "starfield disabled"))
            .ok();
        let wave = page
            .wave_glyph()
            .ok_or(StarfolioError::SurfaceUnavailable("wave glyph"))
            .and_then(|glyph| effects::mount_wave(glyph, &config.greeting, frames))
            .map_err(|err| tracing::debug!(%err, "wave disabled"))
            .ok();

        tracing::info!(
            sections = config.sections.len(),
            links = config.links.len(),
            starfield = starfield.is_some(),
            wave = wave.is_some(),
            "page mounted"
        );
        Ok(App {
            starfield,
            wave,
            _page: page,
        })
    }

    /// Module start hook: builds the page and starts the effects.
    ///
    /// # Errors
    ///
    /// Returns the error as a JS string if the content fails to load or the
    /// document is unusable.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let app = mount().map_err(|err| JsValue::from_str(&err.to_string()))?;
        APP.with(|slot| *slot.borrow_mut() = Some(app));
        Ok(())
    }

    /// Tears the page down: stops both effects, removes listeners and DOM.
    #[wasm_bindgen]
    pub fn unmount() {
        if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
            tracing::info!(
                starfield = app.starfield.is_some(),
                wave = app.wave.is_some(),
                "page unmounted"
            );
            drop(app);
        }
    }
}
