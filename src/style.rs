//! Per-instance CSS aggregation.
//!
//! Components register style fragments, either fixed strings or
//! zero-argument producers, and the instance merges them into the style text
//! owned by its surface. Producers are re-resolved on every pass; a
//! resolved fragment is appended only when the merged text does not
//! already contain it verbatim, so repeated registrations and repeated
//! producer output never duplicate style rules.
//!
//! The containment check walks the merged text once per fragment per pass.
//! That is fine for the small, mostly-static fragment sets components
//! register in practice; a producer that emits endless distinct text will
//! grow the merged style without bound.

use core::fmt;

use waterui_str::Str;

/// One registered piece of CSS.
pub enum CssFragment {
    /// Fixed text, resolved once.
    Static(Str),
    /// Re-resolved on every render pass.
    Dynamic(Box<dyn Fn() -> Str>),
}

impl CssFragment {
    /// Creates a fragment whose text is produced fresh each pass.
    pub fn dynamic(producer: impl Fn() -> Str + 'static) -> Self {
        Self::Dynamic(Box::new(producer))
    }

    fn resolve(&self) -> Str {
        match self {
            Self::Static(text) => text.clone(),
            Self::Dynamic(producer) => producer(),
        }
    }
}

impl From<&'static str> for CssFragment {
    fn from(text: &'static str) -> Self {
        Self::Static(Str::from_static(text))
    }
}

impl From<String> for CssFragment {
    fn from(text: String) -> Self {
        Self::Static(Str::from(text))
    }
}

impl From<Str> for CssFragment {
    fn from(text: Str) -> Self {
        Self::Static(text)
    }
}

impl fmt::Debug for CssFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(&text.as_str()).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic"),
        }
    }
}

/// The merged style text of one instance.
#[derive(Debug, Default)]
pub(crate) struct StyleSheet {
    fragments: Vec<CssFragment>,
    text: String,
}

impl StyleSheet {
    pub(crate) fn register(&mut self, fragment: CssFragment) {
        self.fragments.push(fragment);
    }

    /// Resolves every fragment and merges new text in registration order.
    ///
    /// Returns the full merged text when this pass changed it, `None` when
    /// the surface is already up to date.
    pub(crate) fn sync(&mut self) -> Option<&str> {
        let mut changed = false;
        for fragment in &self.fragments {
            let resolved = fragment.resolve();
            let css = resolved.as_str();
            if !self.text.contains(css) {
                self.text.push_str(css);
                changed = true;
            }
        }
        changed.then_some(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::rc::Rc;

    use waterui_str::Str;

    use super::{CssFragment, StyleSheet};

    #[test]
    fn repeated_fragments_merge_once() {
        let mut sheet = StyleSheet::default();
        sheet.register(CssFragment::from(".btn{color:yellow}"));
        sheet.register(CssFragment::from(".btn{color:yellow}"));

        assert_eq!(sheet.sync(), Some(".btn{color:yellow}"));
        assert_eq!(sheet.sync(), None);
    }

    #[test]
    fn producers_are_reresolved_each_pass() {
        let color = Rc::new(Cell::new("blue"));
        let mut sheet = StyleSheet::default();
        sheet.register(CssFragment::dynamic({
            let color = Rc::clone(&color);
            move || Str::from(format!(".component{{color:{}}}", color.get()))
        }));

        assert_eq!(sheet.sync(), Some(".component{color:blue}"));
        assert_eq!(sheet.sync(), None);

        color.set("black");
        assert_eq!(
            sheet.sync(),
            Some(".component{color:blue}.component{color:black}")
        );
    }

    #[test]
    fn contained_producer_output_is_not_reappended() {
        let mut sheet = StyleSheet::default();
        sheet.register(CssFragment::from(".a{x:1}.b{y:2}"));
        sheet.register(CssFragment::dynamic(|| Str::from_static(".b{y:2}")));

        assert_eq!(sheet.sync(), Some(".a{x:1}.b{y:2}"));
        assert_eq!(sheet.sync(), None);
    }
}
