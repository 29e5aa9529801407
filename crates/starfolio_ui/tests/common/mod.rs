//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use starfolio_ui::{RenderCommand, Surface, Viewport};

/// Everything a [`RecordingSurface`] saw.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    /// Resizes, in order.
    pub resizes: Vec<Viewport>,
    /// Presented frames, in order.
    pub frames: Vec<Vec<RenderCommand>>,
}

/// A surface that records instead of drawing. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    /// Creates a zero-sized surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle on the log.
    pub fn log(&self) -> Rc<RefCell<SurfaceLog>> {
        Rc::clone(&self.log)
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.log.borrow_mut().resizes.push(viewport);
    }

    fn present(&mut self, commands: &[RenderCommand]) {
        self.log.borrow_mut().frames.push(commands.to_vec());
    }
}
