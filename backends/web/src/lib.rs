//! Web/WASM backend for the Estuary component runtime.
//!
//! This crate turns [`estuary::Definition`]s into real DOM custom elements.
//! [`register`] synthesizes an `HTMLElement` subclass for the tag and wires
//! its lifecycle callbacks into an [`estuary::Instance`]; each element gets
//! a closed shadow root as its isolated rendering root, and render flushes
//! ride the host's microtask queue so every mutation in one task collapses
//! into a single pass.
//!
//! Only meaningful on `wasm32-unknown-unknown` inside a browser.

mod element;
mod error;
mod schedule;
mod surface;

pub use element::{ElementFactory, ElementHandle, register};
pub use error::WebError;
pub use schedule::Microtask;
pub use surface::ShadowSurface;

/// Installs the panic hook that routes panics to the browser console.
///
/// Call once, early; calling it again is a no-op.
pub fn init() {
    console_error_panic_hook::set_once();
}
