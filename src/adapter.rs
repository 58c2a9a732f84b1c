//! The two authoring styles behind one invocation contract.
//!
//! [`Body`] is the registration-time choice: the caller picks the variant
//! through [`Definition::factory`](crate::Definition::factory) or
//! [`Definition::class`](crate::Definition::class), so the style of a tag
//! is fixed once and never re-inspected per instance. [`BodyState`] is the
//! per-instance side: whichever way a component was authored, the runtime
//! renders and dispatches through the same two methods.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use crate::component::Component;
use crate::lifecycle::{Hooks, Stage};
use crate::props::Props;
use crate::scheduling::Dependency;
use crate::scope::Scope;
use crate::style::CssFragment;
use crate::surface::Markup;

/// A zero-argument closure producing the markup of one pass.
pub type Template = Box<dyn Fn() -> Markup>;

/// A factory body: invoked once per instance with the props store and the
/// registration scope, returns the instance's template.
pub type FactoryFn = Rc<dyn Fn(Props, &mut Scope) -> Template>;

pub(crate) type ClassConstructor = Rc<dyn Fn(Props) -> Box<dyn Component>>;

/// A component body, tagged with its authoring style.
#[derive(Clone)]
pub enum Body {
    /// Closure-based authoring.
    Factory(FactoryFn),
    /// Trait-based authoring.
    Class(ClassConstructor),
}

impl Body {
    /// Builds the per-instance state, invoking the factory or constructor.
    ///
    /// Returns the uniform body state plus whatever the body registered:
    /// its CSS fragments and its extra reactive dependencies.
    pub(crate) fn instantiate(&self, props: &Props) -> (BodyState, Vec<CssFragment>, Vec<Dependency>) {
        match self {
            Self::Factory(factory) => {
                let mut scope = Scope::new();
                let template = factory(props.clone(), &mut scope);
                let Scope { hooks, css, tracked } = scope;
                (BodyState::Factory { template, hooks }, css, tracked)
            }
            Self::Class(construct) => {
                let component = construct(props.clone());
                let tracked = component.tracked();
                let component = Rc::new(RefCell::new(component));
                let css = vec![CssFragment::dynamic({
                    let component = Rc::clone(&component);
                    move || component.borrow().style()
                })];
                (BodyState::Class { component }, css, tracked)
            }
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory(_) => f.write_str("Factory"),
            Self::Class(_) => f.write_str("Class"),
        }
    }
}

/// Per-instance body state with a style-independent invocation contract.
pub(crate) enum BodyState {
    Factory {
        template: Template,
        hooks: Hooks,
    },
    Class {
        component: Rc<RefCell<Box<dyn Component>>>,
    },
}

impl BodyState {
    pub(crate) fn render(&self, props: &Props) -> Markup {
        match self {
            Self::Factory { template, .. } => template(),
            Self::Class { component } => component.borrow().render(props),
        }
    }

    pub(crate) fn dispatch(&mut self, stage: Stage) {
        match self {
            Self::Factory { hooks, .. } => hooks.run(stage),
            Self::Class { component } => {
                let mut component = component.borrow_mut();
                match stage {
                    Stage::BeforeMount => component.on_before_mount(),
                    Stage::Mounted => component.on_mounted(),
                    Stage::BeforeUpdate => component.on_before_update(),
                    Stage::Updated => component.on_updated(),
                    Stage::Unmounted => component.on_unmounted(),
                    Stage::AttributeChanged => component.on_attribute_change(),
                }
            }
        }
    }
}

impl fmt::Debug for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory { hooks, .. } => f.debug_struct("Factory").field("hooks", hooks).finish(),
            Self::Class { .. } => f.write_str("Class"),
        }
    }
}
