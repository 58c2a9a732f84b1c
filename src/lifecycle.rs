//! Lifecycle stages and the factory-mode hook registry.

use core::fmt;

/// A point in a component instance's life at which user callbacks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Synchronously during construction, before the first render pass.
    BeforeMount,
    /// On the host's connected notification.
    Mounted,
    /// Before every render pass once the instance is mounted.
    BeforeUpdate,
    /// After every render pass once the instance is mounted.
    Updated,
    /// On the host's disconnected notification, after subscription teardown.
    Unmounted,
    /// After an observed attribute write reaches the props store.
    AttributeChanged,
}

pub(crate) type Hook = Box<dyn FnMut()>;

/// Append-only callback lists, one per stage.
///
/// Used by factory-style bodies: every registration accumulates, and a
/// stage dispatch runs its whole list in registration order. Class-style
/// bodies dispatch through trait methods instead and never touch this.
#[derive(Default)]
pub struct Hooks {
    before_mount: Vec<Hook>,
    mounted: Vec<Hook>,
    before_update: Vec<Hook>,
    updated: Vec<Hook>,
    unmounted: Vec<Hook>,
    attribute_changed: Vec<Hook>,
}

impl Hooks {
    pub(crate) fn push(&mut self, stage: Stage, hook: Hook) {
        self.list_mut(stage).push(hook);
    }

    pub(crate) fn run(&mut self, stage: Stage) {
        for hook in self.list_mut(stage) {
            hook();
        }
    }

    fn list_mut(&mut self, stage: Stage) -> &mut Vec<Hook> {
        match stage {
            Stage::BeforeMount => &mut self.before_mount,
            Stage::Mounted => &mut self.mounted,
            Stage::BeforeUpdate => &mut self.before_update,
            Stage::Updated => &mut self.updated,
            Stage::Unmounted => &mut self.unmounted,
            Stage::AttributeChanged => &mut self.attribute_changed,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_mount", &self.before_mount.len())
            .field("mounted", &self.mounted.len())
            .field("before_update", &self.before_update.len())
            .field("updated", &self.updated.len())
            .field("unmounted", &self.unmounted.len())
            .field("attribute_changed", &self.attribute_changed.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use std::rc::Rc;

    use super::{Hooks, Stage};

    #[test]
    fn hooks_accumulate_and_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = Hooks::default();
        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            hooks.push(Stage::Mounted, Box::new(move || seen.borrow_mut().push(tag)));
        }
        hooks.run(Stage::Mounted);
        assert_eq!(&*seen.borrow(), &["first", "second", "third"]);

        hooks.run(Stage::Updated);
        assert_eq!(seen.borrow().len(), 3);
    }
}
