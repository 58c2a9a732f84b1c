//! The per-element runtime: render scheduling, lifecycle sequencing and the
//! attribute bridge.
//!
//! One [`Instance`] exists per constructed element. Construction seeds the
//! props store, runs the body (factory or constructor), dispatches
//! `BeforeMount`, subscribes the scheduler to every reactive dependency and
//! performs the first render pass, all synchronously. From then on the
//! instance only re-renders when a subscription fires, and it stops for
//! good when the host reports disconnection.

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use nami::watcher::BoxWatcherGuard;
use tracing::trace;
use waterui_str::Str;

use crate::adapter::BodyState;
use crate::definition::Definition;
use crate::lifecycle::Stage;
use crate::props::Props;
use crate::scheduling::Defer;
use crate::style::StyleSheet;
use crate::surface::RenderSurface;

/// Where an instance is in its life.
///
/// `Created` covers construction up to the end of the first render pass;
/// the flip to `Active` happens exactly once, inside that pass, and gates
/// the `BeforeUpdate`/`Updated` hooks. `Disposed` is terminal. The phase
/// belongs to the instance; two instances of the same tag never share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, first render pass not yet completed.
    Created,
    /// First pass done; update hooks fire around every further pass.
    Active,
    /// Torn down; nothing will render again.
    Disposed,
}

/// A live component instance bound to one rendering surface.
///
/// The host (a backend, or a test harness) drives it with the three
/// notifications a custom element receives: [`connected`](Self::connected),
/// [`disconnected`](Self::disconnected) and
/// [`attribute_changed`](Self::attribute_changed).
#[derive(Debug)]
pub struct Instance {
    inner: Rc<Inner>,
}

struct Inner {
    tag: Str,
    props: Props,
    body: RefCell<BodyState>,
    styles: RefCell<StyleSheet>,
    surface: RefCell<Box<dyn RenderSurface>>,
    phase: Cell<Phase>,
    dirty: Cell<bool>,
    guards: RefCell<Vec<BoxWatcherGuard>>,
    defer: Rc<dyn Defer>,
}

impl Instance {
    /// Constructs the instance and performs the first render pass.
    ///
    /// The sequence is fixed: props store, body instantiation,
    /// `BeforeMount`, subscriptions, first pass. Panics raised by the body
    /// or its hooks are not caught here.
    pub fn new(
        definition: &Definition,
        surface: Box<dyn RenderSurface>,
        defer: Rc<dyn Defer>,
    ) -> Self {
        let props = Props::new(definition.observed());
        let (body, css, tracked) = definition.body().instantiate(&props);

        let mut styles = StyleSheet::default();
        for fragment in css {
            styles.register(fragment);
        }

        let inner = Rc::new(Inner {
            tag: definition.name().clone(),
            props,
            body: RefCell::new(body),
            styles: RefCell::new(styles),
            surface: RefCell::new(surface),
            phase: Cell::new(Phase::Created),
            dirty: Cell::new(false),
            guards: RefCell::new(Vec::new()),
            defer,
        });

        inner.body.borrow_mut().dispatch(Stage::BeforeMount);

        let invalidate = Inner::invalidator(&inner);
        let mut guards = inner.props.watch_all(Rc::clone(&invalidate));
        for dependency in &tracked {
            guards.push(dependency.subscribe(Rc::clone(&invalidate)));
        }
        *inner.guards.borrow_mut() = guards;

        Inner::run_pass(&inner);

        Self { inner }
    }

    /// Forwards the host's connected notification to the `Mounted` hooks.
    pub fn connected(&self) {
        if self.inner.phase.get() == Phase::Disposed {
            return;
        }
        trace!(tag = %self.inner.tag, "connected");
        self.inner.body.borrow_mut().dispatch(Stage::Mounted);
    }

    /// Tears the instance down.
    ///
    /// Every reactive subscription is released first, unconditionally and
    /// synchronously, then the `Unmounted` hooks run. Afterwards no state
    /// mutation can schedule another pass. Safe to call more than once; only
    /// the first call does anything.
    pub fn disconnected(&self) {
        let inner = &self.inner;
        if inner.phase.get() == Phase::Disposed {
            return;
        }
        trace!(tag = %inner.tag, "disposing");
        inner.phase.set(Phase::Disposed);
        inner.dirty.set(false);
        inner.guards.borrow_mut().clear();
        inner.body.borrow_mut().dispatch(Stage::Unmounted);
    }

    /// The attribute bridge: forwards one host attribute notification.
    ///
    /// Writes the value into the props store (scheduling a pass through the
    /// store's subscription) and dispatches the `AttributeChanged` hooks.
    /// Names outside the observed set are dropped without touching the
    /// store.
    pub fn attribute_changed(&self, name: &str, value: impl Into<Str>) {
        let inner = &self.inner;
        if inner.phase.get() == Phase::Disposed {
            return;
        }
        if inner.props.set(name, value.into()) {
            inner.body.borrow_mut().dispatch(Stage::AttributeChanged);
        } else {
            trace!(tag = %inner.tag, attribute = name, "ignoring unobserved attribute");
        }
    }

    /// The instance's reactive props store.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.inner.props
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.phase.get()
    }

    /// Whether the first render pass has completed.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.phase.get() == Phase::Active
    }

    /// The tag this instance was registered under.
    #[must_use]
    pub fn tag(&self) -> &Str {
        &self.inner.tag
    }
}

impl Inner {
    /// A wake-up callback for subscriptions. Holds only a weak reference so
    /// a guard that outlives the instance cannot keep it alive.
    fn invalidator(inner: &Rc<Self>) -> Rc<dyn Fn()> {
        let weak = Rc::downgrade(inner);
        Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::invalidate(&inner);
            }
        })
    }

    /// Marks the instance dirty and defers one flush. While dirty, further
    /// wake-ups are no-ops, which is what coalesces any number of same-turn
    /// mutations into a single pass.
    fn invalidate(inner: &Rc<Self>) {
        if inner.phase.get() == Phase::Disposed {
            return;
        }
        if inner.dirty.replace(true) {
            return;
        }
        let weak = Rc::downgrade(inner);
        inner.defer.defer(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::flush(&inner);
            }
        }));
    }

    fn flush(inner: &Rc<Self>) {
        if !inner.dirty.replace(false) {
            return;
        }
        if inner.phase.get() == Phase::Disposed {
            return;
        }
        Self::run_pass(inner);
    }

    /// One render pass: update hooks (when mounted), render, reconcile,
    /// style sync, and the one-time flip to `Active`.
    fn run_pass(inner: &Rc<Self>) {
        let mounted = inner.phase.get() == Phase::Active;
        trace!(tag = %inner.tag, first = !mounted, "render pass");

        if mounted {
            inner.body.borrow_mut().dispatch(Stage::BeforeUpdate);
        }

        let markup = inner.body.borrow().render(&inner.props);
        inner.surface.borrow_mut().apply(&markup);

        if let Some(css) = inner.styles.borrow_mut().sync() {
            inner.surface.borrow_mut().set_css(css);
        }

        if mounted {
            inner.body.borrow_mut().dispatch(Stage::Updated);
        } else {
            inner.phase.set(Phase::Active);
        }
    }
}

impl core::fmt::Debug for Inner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("tag", &self.tag.as_str())
            .field("phase", &self.phase.get())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}
