//! Canvas rendering.
//!
//! Effects describe a frame as a flat list of [`RenderCommand`]s; a
//! [`Surface`] executes the finished list. Nothing here knows about the
//! browser.

use crate::layout::{Rect, Viewport};
use crate::style::Color;

/// A render command for the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Fill {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center X.
        x: f64,
        /// Center Y.
        y: f64,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
}

/// A 2D raster target sized to the viewport.
pub trait Surface {
    /// Current size of the surface.
    fn viewport(&self) -> Viewport;

    /// Resizes the backing store. Previous contents may be discarded.
    fn resize(&mut self, viewport: Viewport);

    /// Executes a finished frame, in order.
    fn present(&mut self, commands: &[RenderCommand]);
}

/// Collects the commands of one frame.
pub struct FrameRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
}

impl FrameRenderer {
    /// Creates a renderer with room for `capacity` commands per frame.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Ends the frame and returns its commands. They stay valid until the
    /// next [`FrameRenderer::begin_frame`].
    #[must_use]
    pub fn end_frame(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the command count of the current frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::with_capacity(512)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_frame() {
        let mut renderer = FrameRenderer::default();

        renderer.begin_frame();
        renderer.push(RenderCommand::Fill {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            color: Color::NIGHT,
        });
        assert_eq!(renderer.end_frame().len(), 1);

        renderer.begin_frame();
        assert_eq!(renderer.command_count(), 0);
    }
}
