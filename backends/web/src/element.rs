//! Custom-element synthesis.
//!
//! The browser requires a JavaScript class per tag, so registration goes
//! through a small shim: it builds an `HTMLElement` subclass whose
//! constructor and lifecycle callbacks forward straight into the exported
//! [`ElementFactory`]/[`ElementHandle`] objects, then hands it to
//! `customElements.define`. Everything stateful stays on the Rust side.

use std::rc::Rc;

use estuary::{Definition, Instance};

use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::{WebError, describe};
use crate::schedule::Microtask;
use crate::surface::ShadowSurface;

#[wasm_bindgen(inline_js = r#"
export function defineAdapterElement(name, attributes, factory) {
    class AdapterElement extends HTMLElement {
        static get observedAttributes() {
            return attributes;
        }
        constructor() {
            super();
            this.__estuary = factory.construct(this);
        }
        connectedCallback() {
            this.__estuary.connected();
        }
        disconnectedCallback() {
            this.__estuary.disconnected();
        }
        attributeChangedCallback(attribute, _previous, value) {
            this.__estuary.attribute_changed(attribute, value === null ? "" : value);
        }
    }
    customElements.define(name, AdapterElement);
}
"#)]
unsafe extern "C" {
    #[wasm_bindgen(catch, js_name = defineAdapterElement)]
    fn define_adapter_element(
        name: &str,
        attributes: Vec<String>,
        factory: ElementFactory,
    ) -> Result<(), JsValue>;
}

/// Registers a component definition as a custom element on this page.
///
/// # Errors
///
/// Surfaces whatever `customElements.define` throws (most commonly a
/// duplicate or syntactically invalid tag name) as [`WebError::Define`].
pub fn register(definition: Definition) -> Result<(), WebError> {
    let name = definition.name().to_string();
    let attributes = definition
        .observed()
        .iter()
        .map(ToString::to_string)
        .collect();
    debug!(tag = %name, "registering custom element");

    let factory = ElementFactory {
        definition: Rc::new(definition),
    };
    define_adapter_element(&name, attributes, factory).map_err(|err| WebError::Define {
        name,
        message: describe(&err),
    })
}

/// Constructs one [`ElementHandle`] per element the browser creates.
#[wasm_bindgen]
pub struct ElementFactory {
    definition: Rc<Definition>,
}

#[wasm_bindgen]
impl ElementFactory {
    /// Called by the element constructor. Attaches the shadow surface and
    /// runs the instance's construction sequence, first render included.
    ///
    /// # Errors
    ///
    /// Propagates shadow-root attachment failures, which the host reports
    /// through its uncaught-error channel.
    pub fn construct(&self, host: HtmlElement) -> Result<ElementHandle, WebError> {
        let surface = ShadowSurface::attach(&host)?;
        let instance = Instance::new(&self.definition, Box::new(surface), Rc::new(Microtask));
        Ok(ElementHandle { instance })
    }
}

impl core::fmt::Debug for ElementFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementFactory")
            .field("tag", &self.definition.name().as_str())
            .finish()
    }
}

/// The Rust side of one live element.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ElementHandle {
    instance: Instance,
}

#[wasm_bindgen]
impl ElementHandle {
    /// Forwards `connectedCallback`.
    pub fn connected(&self) {
        self.instance.connected();
    }

    /// Forwards `disconnectedCallback`, destroying the instance.
    pub fn disconnected(&self) {
        self.instance.disconnected();
    }

    /// Forwards `attributeChangedCallback` into the attribute bridge.
    pub fn attribute_changed(&self, attribute: String, value: String) {
        self.instance.attribute_changed(&attribute, value);
    }
}
