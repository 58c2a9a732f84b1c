//! The registration context handed to factory bodies.

use core::fmt;

use nami::Signal;

use crate::lifecycle::{Hooks, Stage};
use crate::scheduling::Dependency;
use crate::style::CssFragment;

/// Collects everything a factory registers while it runs.
///
/// A factory body is invoked exactly once per instance, with the props
/// store and a mutable `Scope`. Hook registrations accumulate (several
/// callbacks may target the same stage and run in registration order),
/// CSS fragments accumulate, and [`track`](Self::track) declares the
/// reactive state the returned template reads. After the factory returns,
/// the scope's contents are moved into the instance and the scope is gone;
/// there is no way to register anything later.
pub struct Scope {
    pub(crate) hooks: Hooks,
    pub(crate) css: Vec<CssFragment>,
    pub(crate) tracked: Vec<Dependency>,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self {
            hooks: Hooks::default(),
            css: Vec::new(),
            tracked: Vec::new(),
        }
    }

    /// Registers a callback for the synchronous pre-first-render stage.
    pub fn on_before_mount(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::BeforeMount, Box::new(hook));
    }

    /// Registers a callback for the host's connected notification.
    pub fn on_mounted(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::Mounted, Box::new(hook));
    }

    /// Registers a callback to run before each pass once mounted.
    pub fn on_before_update(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::BeforeUpdate, Box::new(hook));
    }

    /// Registers a callback to run after each pass once mounted.
    pub fn on_updated(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::Updated, Box::new(hook));
    }

    /// Registers a callback for the host's disconnected notification.
    pub fn on_unmounted(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::Unmounted, Box::new(hook));
    }

    /// Registers a callback for observed attribute writes.
    pub fn on_attribute_change(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.push(Stage::AttributeChanged, Box::new(hook));
    }

    /// Registers a CSS fragment for this instance's style text.
    pub fn register_css(&mut self, css: impl Into<CssFragment>) {
        self.css.push(css.into());
    }

    /// Declares `signal` as a render dependency of this instance.
    ///
    /// The props store is always a dependency; everything else the template
    /// reads must be declared here or changes to it will not re-render.
    pub fn track<S>(&mut self, signal: &S)
    where
        S: Signal + Clone + 'static,
        S::Output: 'static,
        S::Guard: 'static,
    {
        self.tracked.push(Dependency::on(signal));
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("hooks", &self.hooks)
            .field("css", &self.css.len())
            .field("tracked", &self.tracked.len())
            .finish()
    }
}
