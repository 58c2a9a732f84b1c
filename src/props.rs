//! The per-instance reactive props store.
//!
//! A [`Props`] value maps observed attribute names to [`Binding`]s. The key
//! set is fixed when the instance is constructed: it is seeded from the
//! definition's observed list and never grows, so a name can only appear
//! here if the definition declared it. The attribute bridge writes into the
//! bindings; the render scheduler subscribes to every one of them before the
//! first pass.

use core::fmt;
use std::rc::Rc;

use nami::{Binding, Signal, binding, watcher::BoxWatcherGuard};
use waterui_str::Str;

/// Reactive key→value store for one component instance.
///
/// Cloning is cheap and every clone refers to the same underlying bindings,
/// so a factory can move its clone into the template closure while the
/// runtime keeps another for the attribute bridge.
#[derive(Clone)]
pub struct Props {
    entries: Rc<Vec<(Str, Binding<Str>)>>,
}

impl Props {
    /// Seeds one empty binding per observed attribute name.
    pub(crate) fn new(observed: &[Str]) -> Self {
        let mut entries: Vec<(Str, Binding<Str>)> = Vec::with_capacity(observed.len());
        for name in observed {
            if entries.iter().any(|(existing, _)| existing.as_str() == name.as_str()) {
                continue;
            }
            entries.push((name.clone(), binding(Str::new())));
        }
        Self {
            entries: Rc::new(entries),
        }
    }

    /// Returns the current value of an observed attribute.
    ///
    /// `None` means the name is not part of the observed set; an observed
    /// attribute that was never written reads as the empty string.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Str> {
        self.binding(name).map(|binding| binding.get())
    }

    /// Returns the binding behind an observed attribute, if any.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<Binding<Str>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.as_str() == name)
            .map(|(_, binding)| binding.clone())
    }

    /// Iterates over the observed attribute names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &Str> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Number of observed attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the observed set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes a new value, returning `false` for names outside the observed
    /// set (the write is dropped, the store is untouched).
    pub(crate) fn set(&self, name: &str, value: Str) -> bool {
        match self.binding(name) {
            Some(binding) => {
                binding.set(value);
                true
            }
            None => false,
        }
    }

    /// Subscribes `invalidate` to every binding in the store.
    ///
    /// The returned guards unsubscribe when dropped.
    pub(crate) fn watch_all(&self, invalidate: Rc<dyn Fn()>) -> Vec<BoxWatcherGuard> {
        self.entries
            .iter()
            .map(|(_, binding)| {
                let invalidate = Rc::clone(&invalidate);
                Box::new(binding.watch(move |_context| (invalidate)())) as BoxWatcherGuard
            })
            .collect()
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, binding) in self.entries.iter() {
            map.entry(&name.as_str(), &binding.get().as_str());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::rc::Rc;

    use waterui_str::Str;

    use super::Props;

    fn observed(names: &[&'static str]) -> Vec<Str> {
        names.iter().copied().map(Str::from_static).collect()
    }

    #[test]
    fn seeded_from_observed_list_only() {
        let props = Props::new(&observed(&["label", "kind"]));
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("label").unwrap().as_str(), "");
        assert!(props.get("color").is_none());
    }

    #[test]
    fn writes_outside_the_observed_set_are_dropped() {
        let props = Props::new(&observed(&["label"]));
        assert!(!props.set("color", Str::from_static("red")));
        assert!(props.get("color").is_none());
        assert!(props.set("label", Str::from_static("x")));
        assert_eq!(props.get("label").unwrap().as_str(), "x");
    }

    #[test]
    fn duplicate_observed_names_collapse() {
        let props = Props::new(&observed(&["label", "label"]));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn watchers_fire_on_writes() {
        let props = Props::new(&observed(&["label"]));
        let hits = Rc::new(Cell::new(0usize));
        let guards = props.watch_all({
            let hits = Rc::clone(&hits);
            Rc::new(move || hits.set(hits.get() + 1))
        });
        props.set("label", Str::from_static("x"));
        assert_eq!(hits.get(), 1);

        drop(guards);
        props.set("label", Str::from_static("y"));
        assert_eq!(hits.get(), 1);
    }
}
