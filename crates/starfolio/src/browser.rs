//! Browser implementations of the engine's host traits.

use starfolio_shared::{StarfolioError, StarfolioResult};
use starfolio_ui::{FrameCallback, FrameHost, FrameId, FrameTime, Navigator, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Converts a failed JS call into a [`StarfolioError::Host`].
pub fn host_error(value: JsValue) -> StarfolioError {
    StarfolioError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// The global `window`.
pub fn window() -> StarfolioResult<Window> {
    web_sys::window().ok_or_else(|| StarfolioError::Host("no window".to_owned()))
}

/// `innerWidth × innerHeight` of `window`.
pub fn viewport(window: &Window) -> StarfolioResult<Viewport> {
    let dimension = |value: Result<JsValue, JsValue>| -> StarfolioResult<u32> {
        let pixels = value.map_err(host_error)?.as_f64().unwrap_or(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pixels = pixels.max(0.0) as u32;
        Ok(pixels)
    };
    Ok(Viewport::new(
        dimension(window.inner_width())?,
        dimension(window.inner_height())?,
    ))
}

/// `requestAnimationFrame` as a [`FrameHost`].
#[derive(Clone)]
pub struct BrowserFrames {
    window: Window,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameHost for BrowserFrames {
    fn request_frame(&self, callback: FrameCallback) -> StarfolioResult<FrameId> {
        // Freed by wasm-bindgen after the single invocation.
        let closure = Closure::once_into_js(move |timestamp_ms: f64| {
            callback(FrameTime::new(timestamp_ms, js_sys::Date::now()));
        });
        let id = self
            .window
            .request_animation_frame(closure.unchecked_ref())
            .map_err(host_error)?;
        u64::try_from(id)
            .map(FrameId)
            .map_err(|_| StarfolioError::Host(format!("negative frame id {id}")))
    }

    fn cancel_frame(&self, id: FrameId) {
        let Ok(raw) = i32::try_from(id.0) else {
            return;
        };
        if let Err(err) = self.window.cancel_animation_frame(raw) {
            tracing::debug!(?err, "cancelAnimationFrame failed");
        }
    }
}

/// `window.open` as a [`Navigator`].
pub struct BrowserNavigator {
    window: Window,
}

impl BrowserNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str, target: &str) -> StarfolioResult<()> {
        self.window
            .open_with_url_and_target(url, target)
            .map(|_| ())
            .map_err(host_error)
    }
}
