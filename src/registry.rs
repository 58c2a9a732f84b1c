//! A host-agnostic component registry.
//!
//! Backends that sit on a native element registry (the web backend sits on
//! `customElements`) delegate duplicate detection to it; everything else,
//! tests included, uses this one. Either way a duplicate tag is an error
//! surfaced to the caller, never swallowed.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::definition::Definition;
use crate::error::DefineError;
use crate::instance::Instance;
use crate::scheduling::Defer;
use crate::surface::RenderSurface;

/// Maps tag names to their registered definitions.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: BTreeMap<String, Rc<Definition>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under its tag name.
    ///
    /// # Errors
    ///
    /// [`DefineError::InvalidName`] for names that are not lowercase
    /// dash-separated tags, [`DefineError::Duplicate`] when the tag is
    /// already taken.
    pub fn define(&mut self, definition: Definition) -> Result<Rc<Definition>, DefineError> {
        let name = definition.name().clone();
        if !is_valid_tag(name.as_str()) {
            return Err(DefineError::InvalidName(name));
        }
        if self.definitions.contains_key(name.as_str()) {
            return Err(DefineError::Duplicate(name));
        }
        debug!(tag = %name, observed = definition.observed().len(), "component defined");
        let definition = Rc::new(definition);
        self.definitions
            .insert(name.to_string(), Rc::clone(&definition));
        Ok(definition)
    }

    /// Looks up a registered definition.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<Definition>> {
        self.definitions.get(name).cloned()
    }

    /// Constructs an instance of a registered tag, rendering onto `surface`.
    ///
    /// # Errors
    ///
    /// [`DefineError::Unknown`] when no definition carries that tag.
    pub fn instantiate(
        &self,
        name: &str,
        surface: Box<dyn RenderSurface>,
        defer: Rc<dyn Defer>,
    ) -> Result<Instance, DefineError> {
        let definition = self
            .get(name)
            .ok_or_else(|| DefineError::Unknown(waterui_str::Str::from(name.to_string())))?;
        Ok(Instance::new(&definition, surface, defer))
    }
}

/// Custom-element naming rule: lowercase ASCII start, at least one dash.
fn is_valid_tag(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::definition::Definition;
    use crate::error::DefineError;
    use crate::scheduling::Inline;
    use crate::surface::Markup;
    use crate::testing::RecordingSurface;

    use super::{Registry, is_valid_tag};

    fn any_definition(tag: &'static str) -> Definition {
        Definition::factory(tag, |_props, _scope| Box::new(|| Markup::from("<p></p>")))
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let mut registry = Registry::new();
        registry.define(any_definition("x-widget")).unwrap();
        let err = registry.define(any_definition("x-widget")).unwrap_err();
        assert!(matches!(err, DefineError::Duplicate(_)));
    }

    #[test]
    fn tags_must_look_like_custom_elements() {
        assert!(is_valid_tag("t-counter"));
        assert!(is_valid_tag("my-widget-2"));
        assert!(!is_valid_tag("counter"));
        assert!(!is_valid_tag("T-Counter"));
        assert!(!is_valid_tag("-counter"));

        let mut registry = Registry::new();
        let err = registry.define(any_definition("widget")).unwrap_err();
        assert!(matches!(err, DefineError::InvalidName(_)));
    }

    #[test]
    fn unknown_tags_cannot_be_instantiated() {
        let registry = Registry::new();
        let err = registry
            .instantiate(
                "x-missing",
                Box::new(RecordingSurface::new()),
                Rc::new(Inline),
            )
            .unwrap_err();
        assert!(matches!(err, DefineError::Unknown(_)));
    }

    #[test]
    fn registered_tags_instantiate() {
        let mut registry = Registry::new();
        registry.define(any_definition("x-widget")).unwrap();
        let instance = registry
            .instantiate(
                "x-widget",
                Box::new(RecordingSurface::new()),
                Rc::new(Inline),
            )
            .unwrap();
        assert!(instance.is_mounted());
    }
}
