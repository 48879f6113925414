//! Browser Platform Capabilities
//!
//! Thin wrappers over the `web-sys` surface the stores depend on, behind
//! small traits so tests can substitute in-memory fakes.

use web_sys::window;

/// Persistent string key-value slots
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Fire-and-forget write; storage failures are swallowed
    fn set(&self, key: &str, value: &str);
}

/// Set or clear a named attribute on the rendering surface
pub trait PresentationSink {
    fn set_attribute(&self, name: &str, value: &str);
    fn clear_attribute(&self, name: &str);
}

/// `window.localStorage`-backed key-value store
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Attribute sink targeting `document.documentElement`
pub struct DocumentRoot;

impl PresentationSink for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute(name, value);
        }
    }

    fn clear_attribute(&self, name: &str) {
        if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.remove_attribute(name);
        }
    }
}

/// Whether the OS reports a dark color-scheme preference
pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|media| media.matches())
        .unwrap_or(false)
}
