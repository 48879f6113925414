//! Theme State Store
//!
//! Single source of truth for dark/light presentation mode. The in-memory
//! flag is authoritative; the persisted slot and the document attribute are
//! kept in step on every mutation, and the persisted value only matters again
//! at the next session start.

use std::rc::Rc;

use leptos::*;

use crate::platform::{BrowserStorage, DocumentRoot, KeyValueStore, PresentationSink};

/// Persisted slot for the preference, `"true"` or `"false"`
pub const DARK_MODE_KEY: &str = "darkMode";

/// Attribute set on the document root while dark mode is active
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Theme state provided to all components
#[derive(Clone)]
pub struct ThemeStore {
    /// Whether dark mode is active
    pub is_dark_mode: RwSignal<bool>,
    storage: Rc<dyn KeyValueStore>,
    presentation: Rc<dyn PresentationSink>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, presentation: Rc<dyn PresentationSink>) -> Self {
        Self {
            is_dark_mode: create_rw_signal(false),
            storage,
            presentation,
        }
    }

    /// Flip the mode, reflect it onto the document and persist it.
    /// The storage write is fire-and-forget.
    pub fn toggle_dark_mode(&self) {
        let dark = !self.is_dark_mode.get_untracked();
        self.is_dark_mode.set(dark);

        if dark {
            self.presentation.set_attribute(THEME_ATTRIBUTE, "dark");
        } else {
            self.presentation.clear_attribute(THEME_ATTRIBUTE);
        }

        self.storage.set(DARK_MODE_KEY, if dark { "true" } else { "false" });
    }

    /// Resolve the initial mode, once per session start: a persisted
    /// preference wins, otherwise the OS-reported color scheme.
    pub fn init_theme(&self, system_prefers_dark: bool) {
        let dark = match self.storage.get(DARK_MODE_KEY) {
            Some(saved) => saved == "true",
            None => system_prefers_dark,
        };
        self.is_dark_mode.set(dark);

        // Light mode relies on the attribute being absent by default
        if dark {
            self.presentation.set_attribute(THEME_ATTRIBUTE, "dark");
        }
    }
}

/// Provide the theme store, backed by the real browser capabilities
pub fn provide_theme_store() {
    provide_context(ThemeStore::new(Rc::new(BrowserStorage), Rc::new(DocumentRoot)));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        slots: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        attributes: RefCell<HashMap<String, String>>,
    }

    impl RecordingSink {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }
    }

    impl PresentationSink for RecordingSink {
        fn set_attribute(&self, name: &str, value: &str) {
            self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn clear_attribute(&self, name: &str) {
            self.attributes.borrow_mut().remove(name);
        }
    }

    fn store_with_fakes() -> (ThemeStore, Rc<MemoryStore>, Rc<RecordingSink>) {
        let storage = Rc::new(MemoryStore::default());
        let sink = Rc::new(RecordingSink::default());
        let store = ThemeStore::new(storage.clone(), sink.clone());
        (store, storage, sink)
    }

    #[test]
    fn toggle_from_light_applies_and_persists_dark() {
        let runtime = create_runtime();
        let (store, storage, sink) = store_with_fakes();

        store.toggle_dark_mode();

        assert!(store.is_dark_mode.get_untracked());
        assert_eq!(sink.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("true"));

        runtime.dispose();
    }

    #[test]
    fn toggle_back_clears_attribute_and_persists_false() {
        let runtime = create_runtime();
        let (store, storage, sink) = store_with_fakes();

        store.toggle_dark_mode();
        store.toggle_dark_mode();

        assert!(!store.is_dark_mode.get_untracked());
        assert_eq!(sink.attribute(THEME_ATTRIBUTE), None);
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("false"));

        runtime.dispose();
    }

    #[test]
    fn init_adopts_saved_preference_over_system() {
        let runtime = create_runtime();
        let (store, storage, sink) = store_with_fakes();
        storage.set(DARK_MODE_KEY, "true");

        store.init_theme(false);

        assert!(store.is_dark_mode.get_untracked());
        assert_eq!(sink.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));

        runtime.dispose();
    }

    #[test]
    fn init_treats_unrecognized_saved_value_as_light() {
        let runtime = create_runtime();
        let (store, storage, _sink) = store_with_fakes();
        storage.set(DARK_MODE_KEY, "yes please");

        store.init_theme(true);

        assert!(!store.is_dark_mode.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn init_falls_back_to_system_preference() {
        let runtime = create_runtime();
        let (store, _storage, _sink) = store_with_fakes();

        store.init_theme(true);

        assert!(store.is_dark_mode.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn init_light_leaves_attribute_untouched() {
        let runtime = create_runtime();
        let (store, _storage, sink) = store_with_fakes();
        // A stale attribute survives a light init; only toggling clears it
        sink.set_attribute(THEME_ATTRIBUTE, "dark");

        store.init_theme(false);

        assert!(!store.is_dark_mode.get_untracked());
        assert_eq!(sink.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));

        runtime.dispose();
    }
}
