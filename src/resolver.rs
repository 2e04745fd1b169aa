//! Mode resolution, persistence, and change notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ModeResolver` is the single owner of the light/dark axis: it layers the
//! user's explicit choice over the OS preference over the built-in default,
//! and keeps the display context and the persisted entry in lockstep with
//! every change. Exactly one instance should exist per display context.

use std::cell::{Cell, RefCell};

use crate::env::{DisplayContext, PreferenceStore};
use crate::mode::Mode;

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

/// Store key holding the explicit choice.
pub const STORAGE_KEY: &str = "dark-mode";

/// Resolves the active display mode from the explicit choice, the OS
/// preference, and the built-in default, in that order.
///
/// All mutations run synchronously to completion: the display side-effect,
/// the persisted entry, and observer notification land in the same turn, so
/// callers never observe a torn state. The crate targets the single-threaded
/// browser event loop; share across handlers as `Rc<ModeResolver>`.
pub struct ModeResolver {
    choice: Cell<Option<Mode>>,
    system: Cell<Option<Mode>>,
    store: Box<dyn PreferenceStore>,
    display: Box<dyn DisplayContext>,
    observers: RefCell<Vec<Box<dyn Fn(Mode)>>>,
}

impl ModeResolver {
    /// Build a resolver: load the persisted choice, take the current OS
    /// preference, and apply the resolved mode to the display.
    ///
    /// An absent or unrecognized persisted value leaves the choice unset.
    /// No observers exist yet, so construction applies without notifying.
    pub fn new(
        store: Box<dyn PreferenceStore>,
        display: Box<dyn DisplayContext>,
        system: Option<Mode>,
    ) -> Self {
        let choice = store.get(STORAGE_KEY).as_deref().and_then(Mode::parse);
        let resolver = Self {
            choice: Cell::new(choice),
            system: Cell::new(system),
            store,
            display,
            observers: RefCell::new(Vec::new()),
        };
        resolver.display.apply(resolver.mode());
        resolver
    }

    /// The resolved mode: explicit choice if set, else OS preference, else
    /// the default (`light`). Pure; no side effects.
    pub fn mode(&self) -> Mode {
        self.choice.get().or(self.system.get()).unwrap_or_default()
    }

    /// The explicit choice, if any. `None` means "following the OS".
    pub fn choice(&self) -> Option<Mode> {
        self.choice.get()
    }

    /// The last observed OS preference, if the environment reported one.
    pub fn system_preference(&self) -> Option<Mode> {
        self.system.get()
    }

    /// Set or clear the explicit choice.
    ///
    /// `Some(mode)` persists the lowercase token; `None` removes the
    /// persisted entry and returns to following the OS preference.
    pub fn set_mode(&self, choice: Option<Mode>) {
        self.choice.set(choice);
        match choice {
            Some(mode) => self.store.set(STORAGE_KEY, mode.as_str()),
            None => self.store.remove(STORAGE_KEY),
        }
        self.sync();
    }

    /// Flip the resolved mode and keep the result as the new explicit
    /// choice.
    ///
    /// Toggling from an unset choice still produces an explicit, persisted
    /// choice; two consecutive toggles restore the starting mode. Returns
    /// the new resolved mode.
    pub fn toggle(&self) -> Mode {
        let next = self.mode().inverse();
        self.set_mode(Some(next));
        next
    }

    /// Feed an updated OS preference, e.g. from a media-query change event.
    pub fn sync_system_preference(&self, system: Option<Mode>) {
        self.system.set(system);
        self.sync();
    }

    /// Register a change observer.
    ///
    /// Observers receive the resolved mode after every mutation, once the
    /// display and the persisted entry are already consistent with it.
    pub fn subscribe(&self, observer: impl Fn(Mode) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Re-apply the resolved mode to the display, then notify observers.
    fn sync(&self) {
        let mode = self.mode();
        log::debug!("display mode resolved to {mode}");
        self.display.apply(mode);
        for observer in self.observers.borrow().iter() {
            observer(mode);
        }
    }
}
