//! The seam between the component runtime and the templating collaborator.
//!
//! The runtime never diffs or patches a render target itself. Each pass
//! produces a [`Markup`] value and hands it to the instance's
//! [`RenderSurface`], which owns the isolated rendering root and decides how
//! to reconcile the new content into it. Backends provide the surface; the
//! in-memory recorder used by the test suite is another implementation of
//! the same contract.

use core::fmt;

use waterui_str::Str;

/// The opaque result of a render path.
///
/// A component's template closure (factory style) or `render` method (class
/// style) returns one of these per pass. The runtime treats the content as
/// a black box and only forwards it to the surface.
#[derive(Debug, Clone)]
pub struct Markup(Str);

impl Markup {
    /// Wraps the provided content.
    pub fn new(content: impl Into<Str>) -> Self {
        Self(content.into())
    }

    /// Borrows the content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the markup, returning the underlying string.
    #[must_use]
    pub fn into_inner(self) -> Str {
        self.0
    }
}

impl PartialEq for Markup {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Markup {}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&'static str> for Markup {
    fn from(content: &'static str) -> Self {
        Self(Str::from_static(content))
    }
}

impl From<String> for Markup {
    fn from(content: String) -> Self {
        Self(Str::from(content))
    }
}

impl From<Str> for Markup {
    fn from(content: Str) -> Self {
        Self(content)
    }
}

/// An isolated rendering root owned by one component instance.
///
/// `apply` receives the markup of every pass; `set_css` receives the full
/// aggregated style text whenever it changes. Implementations own the whole
/// content of their root and style element; nothing else writes to them.
///
/// Errors raised while touching the underlying target are a host concern
/// and must be reported through the host's own channel rather than returned
/// here; the scheduler has no recovery semantics for a failed pass.
pub trait RenderSurface: 'static {
    /// Reconciles the rendered markup into the root.
    fn apply(&mut self, markup: &Markup);

    /// Replaces the style text owned by this instance.
    fn set_css(&mut self, css: &str);
}

#[cfg(test)]
mod tests {
    use super::Markup;

    #[test]
    fn equality_is_textual() {
        assert_eq!(Markup::new("<p>hi</p>"), Markup::from("<p>hi</p>"));
        assert_ne!(Markup::new("<p>hi</p>"), Markup::new("<p>ho</p>"));
    }

    #[test]
    fn conversions_preserve_content() {
        let owned: Markup = String::from("<b>x</b>").into();
        assert_eq!(owned.as_str(), "<b>x</b>");
        assert_eq!(owned.into_inner().as_str(), "<b>x</b>");
    }
}
