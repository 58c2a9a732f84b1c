use estuary::{Markup, RenderSurface};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlStyleElement, ShadowRootInit, ShadowRootMode};

use crate::error::WebError;

/// The isolated rendering root of one element: a closed shadow root holding
/// one `<style>` element and one content container.
///
/// The style element's text is owned entirely by the runtime's style
/// aggregator; the container's content is replaced whenever a pass produces
/// different markup. Identical markup leaves the DOM untouched.
#[derive(Debug)]
pub struct ShadowSurface {
    container: Element,
    style: HtmlStyleElement,
    markup: Option<String>,
}

impl ShadowSurface {
    /// Attaches a closed shadow root to `host` and prepares it for
    /// rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the host element has no document or refuses a
    /// shadow root.
    pub fn attach(host: &HtmlElement) -> Result<Self, WebError> {
        let document = host.owner_document().ok_or(WebError::DomUnavailable)?;
        let root = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Closed))?;

        let style = document
            .create_element("style")?
            .dyn_into::<HtmlStyleElement>()
            .map_err(|element| WebError::from(JsValue::from(element)))?;
        root.append_child(&style)?;

        let container = document.create_element("div")?;
        root.append_child(&container)?;

        Ok(Self {
            container,
            style,
            markup: None,
        })
    }
}

impl RenderSurface for ShadowSurface {
    fn apply(&mut self, markup: &Markup) {
        if self.markup.as_deref() == Some(markup.as_str()) {
            return;
        }
        self.container.set_inner_html(markup.as_str());
        self.markup = Some(markup.as_str().to_owned());
    }

    fn set_css(&mut self, css: &str) {
        self.style.set_text_content(Some(css));
    }
}
