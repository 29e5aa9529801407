//! `<canvas>` 2D context as a drawing [`Surface`].

use std::f64::consts::TAU;

use starfolio_shared::{StarfolioError, StarfolioResult};
use starfolio_ui::{RenderCommand, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A canvas and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquires the 2D context of `canvas`.
    ///
    /// Fails with [`StarfolioError::SurfaceUnavailable`] when the browser
    /// has no 2D context to give.
    pub fn new(canvas: HtmlCanvasElement) -> StarfolioResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(StarfolioError::SurfaceUnavailable("2d context"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn present(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            match command {
                RenderCommand::Fill { bounds, color } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.fill_rect(bounds.x, bounds.y, bounds.width, bounds.height);
                }
                RenderCommand::Circle { x, y, radius, color } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.begin_path();
                    if self.ctx.arc(*x, *y, *radius, 0.0, TAU).is_ok() {
                        self.ctx.fill();
                    }
                }
            }
        }
    }
}
