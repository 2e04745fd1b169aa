//! Environment seams: preference store and display context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver core never touches web-sys directly. These traits isolate
//! the two browser collaborators (`localStorage`, the document root) so the
//! same core runs under hydrate, SSR, and plain `cargo test`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::mode::Mode;

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// String key-value store holding the persisted explicit choice.
///
/// Implementations swallow storage failures: a read that cannot reach the
/// store reports the value as absent, and writes/removals become no-ops.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Rendering surface the resolved mode is reflected onto.
///
/// `apply` is idempotent and must be safe to call when no real surface
/// exists.
pub trait DisplayContext {
    fn apply(&self, mode: Mode);
}

/// In-memory store for headless hosts and tests.
///
/// Share one across owners as `Rc<MemoryStore>`; the blanket `Rc`
/// implementation forwards the trait.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Display context for environments with no rendering surface.
pub struct NullDisplay;

impl DisplayContext for NullDisplay {
    fn apply(&self, _mode: Mode) {}
}
