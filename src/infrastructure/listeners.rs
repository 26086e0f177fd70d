// SPDX-License-Identifier: MPL-2.0
//! Ownership of event listeners handed to a host.
//!
//! A host that cannot attach listener state to its elements keeps the
//! handles here and releases them when their element leaves the document.

/// A listener handle and the element it is attached to.
#[derive(Debug)]
pub(crate) struct Registered<E, H> {
    pub element: E,
    pub event: String,
    pub handle: H,
}

#[derive(Debug)]
pub(crate) struct ListenerRegistry<E, H> {
    entries: Vec<Registered<E, H>>,
}

impl<E, H> Default for ListenerRegistry<E, H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E, H> ListenerRegistry<E, H> {
    pub fn register(&mut self, element: E, event: &str, handle: H) {
        self.entries.push(Registered {
            element,
            event: event.to_string(),
            handle,
        });
    }

    /// Removes and returns every listener whose element matches `within`.
    pub fn release(&mut self, mut within: impl FnMut(&E) -> bool) -> Vec<Registered<E, H>> {
        let (released, kept) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| within(&entry.element));
        self.entries = kept;
        released
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn release_returns_only_matching_listeners() {
        let mut registry = ListenerRegistry::default();
        registry.register(1, "click", "close");
        registry.register(2, "change", "tutor");
        registry.register(1, "keydown", "escape");

        let released = registry.release(|element| *element == 1);

        let events: Vec<&str> = released.iter().map(|entry| entry.event.as_str()).collect();
        assert_eq!(events, ["click", "keydown"]);
        assert_eq!(registry.len(), 1);
        assert!(registry.release(|element| *element == 1).is_empty());
    }

    #[test]
    fn released_handles_are_dropped_with_the_result() {
        let state = Rc::new(());
        let mut registry = ListenerRegistry::default();
        registry.register("toast", "click", Rc::clone(&state));
        assert_eq!(Rc::strong_count(&state), 2);

        drop(registry.release(|element| *element == "toast"));

        assert_eq!(Rc::strong_count(&state), 1);
        assert_eq!(registry.len(), 0);
    }
}
