//! In-memory surface used by the test suite.

use core::cell::RefCell;
use std::rc::Rc;

use crate::surface::{Markup, RenderSurface};

/// Everything a [`RecordingSurface`] has been asked to do.
#[derive(Debug, Default)]
pub(crate) struct SurfaceLog {
    frames: RefCell<Vec<String>>,
    css: RefCell<Vec<String>>,
}

impl SurfaceLog {
    /// Number of render passes applied so far.
    pub(crate) fn passes(&self) -> usize {
        self.frames.borrow().len()
    }

    pub(crate) fn last_frame(&self) -> Option<String> {
        self.frames.borrow().last().cloned()
    }

    pub(crate) fn last_css(&self) -> Option<String> {
        self.css.borrow().last().cloned()
    }
}

/// A [`RenderSurface`] that records instead of rendering.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    log: Rc<SurfaceLog>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A handle onto the log that stays valid after the surface is boxed.
    pub(crate) fn log(&self) -> Rc<SurfaceLog> {
        Rc::clone(&self.log)
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, markup: &Markup) {
        self.log.frames.borrow_mut().push(markup.as_str().to_owned());
    }

    fn set_css(&mut self, css: &str) {
        self.log.css.borrow_mut().push(css.to_owned());
    }
}
