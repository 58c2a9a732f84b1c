#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod adapter;
pub mod component;
pub mod definition;
pub mod error;
pub mod instance;
pub mod lifecycle;
pub mod props;
pub mod registry;
pub mod scheduling;
pub mod scope;
pub mod style;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use adapter::{Body, FactoryFn, Template};
#[doc(inline)]
pub use component::Component;
#[doc(inline)]
pub use definition::Definition;
#[doc(inline)]
pub use error::DefineError;
#[doc(inline)]
pub use instance::{Instance, Phase};
#[doc(inline)]
pub use lifecycle::Stage;
#[doc(inline)]
pub use props::Props;
#[doc(inline)]
pub use registry::Registry;
#[doc(inline)]
pub use scheduling::{Defer, Dependency, Inline, ManualQueue};
#[doc(inline)]
pub use scope::Scope;
#[doc(inline)]
pub use style::CssFragment;
#[doc(inline)]
pub use surface::{Markup, RenderSurface};

pub use nami as reactive;
#[doc(inline)]
pub use reactive::{Binding, Computed, Signal, binding};
pub use tracing as log;
pub use waterui_str::Str;
