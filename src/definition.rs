//! Component definitions.

use std::rc::Rc;

use waterui_str::Str;

use crate::adapter::{Body, Template};
use crate::component::Component;
use crate::props::Props;
use crate::scope::Scope;

/// Everything a tag needs to be registered: its name, the attributes to
/// observe, and the component body.
///
/// Created once at registration and immutable afterwards; the registry and
/// every live instance of the tag share it behind an [`Rc`].
#[derive(Debug, Clone)]
pub struct Definition {
    name: Str,
    observed: Vec<Str>,
    body: Body,
}

impl Definition {
    /// Defines a factory-style component.
    ///
    /// ```no_run
    /// use estuary::{Definition, Markup};
    ///
    /// let greeter = Definition::factory("x-greeter", |props, _scope| {
    ///     Box::new(move || {
    ///         Markup::new(format!("<p>hello {}</p>", props.get("name").unwrap()))
    ///     })
    /// })
    /// .observe(["name"]);
    /// ```
    pub fn factory(
        name: impl Into<Str>,
        factory: impl Fn(Props, &mut Scope) -> Template + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            observed: Vec::new(),
            body: Body::Factory(Rc::new(factory)),
        }
    }

    /// Defines a class-style component from its [`Component`] impl.
    pub fn class<C: Component>(name: impl Into<Str>) -> Self {
        Self {
            name: name.into(),
            observed: Vec::new(),
            body: Body::Class(Rc::new(|props| Box::new(C::create(props)))),
        }
    }

    /// Sets the attribute names to observe. Defaults to none.
    #[must_use]
    pub fn observe<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Str>,
    {
        self.observed = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &Str {
        &self.name
    }

    /// The observed attribute names, in declaration order.
    #[must_use]
    pub fn observed(&self) -> &[Str] {
        &self.observed
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }
}
