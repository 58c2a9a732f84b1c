//! The class-style authoring contract.

use waterui_str::Str;

use crate::props::Props;
use crate::scheduling::Dependency;
use crate::surface::Markup;

/// A component authored as a type with lifecycle methods.
///
/// Only [`create`](Self::create) and [`render`](Self::render) are required.
/// Every lifecycle method defaults to a no-op, so a type overrides exactly
/// the stages it cares about; there is no error path for a "missing" hook.
///
/// Internal reactive state lives in fields (typically [`nami::Binding`]s).
/// Because the runtime subscribes explicitly rather than tracking reads,
/// state that should re-render the component on change must be returned
/// from [`tracked`](Self::tracked):
///
/// ```no_run
/// use estuary::{Component, Dependency, Markup, Props, Str};
/// use nami::{Binding, Signal, binding};
///
/// struct Counter {
///     count: Binding<i32>,
/// }
///
/// impl Component for Counter {
///     fn create(_props: Props) -> Self {
///         Self { count: binding(0) }
///     }
///
///     fn render(&self, props: &Props) -> Markup {
///         Markup::new(format!(
///             "<h2>{} {}</h2>",
///             self.count.get(),
///             props.get("msg").unwrap_or_else(|| Str::new()),
///         ))
///     }
///
///     fn tracked(&self) -> Vec<Dependency> {
///         vec![Dependency::on(&self.count)]
///     }
/// }
/// ```
pub trait Component: 'static {
    /// Constructs the component with the instance's reactive props store.
    fn create(props: Props) -> Self
    where
        Self: Sized;

    /// Produces the markup for one render pass.
    fn render(&self, props: &Props) -> Markup;

    /// The component's CSS, re-resolved on every pass.
    fn style(&self) -> Str {
        Str::new()
    }

    /// Extra reactive dependencies whose changes re-render this instance.
    ///
    /// Collected once, right after construction.
    fn tracked(&self) -> Vec<Dependency> {
        Vec::new()
    }

    /// Runs synchronously during construction, before the first pass.
    fn on_before_mount(&mut self) {}

    /// Runs on the host's connected notification.
    fn on_mounted(&mut self) {}

    /// Runs before every pass once the instance is mounted.
    fn on_before_update(&mut self) {}

    /// Runs after every pass once the instance is mounted.
    fn on_updated(&mut self) {}

    /// Runs on the host's disconnected notification.
    fn on_unmounted(&mut self) {}

    /// Runs after an observed attribute write reaches the props store.
    fn on_attribute_change(&mut self) {}
}
