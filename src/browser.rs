//! Browser bindings: localStorage persistence, document-root application,
//! and the `prefers-color-scheme` subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! All web-sys access lives here, gated on the `hydrate` feature. Every
//! function degrades to a no-op outside a browser (SSR, tests), so callers
//! never branch on the environment themselves.

use std::rc::Rc;

use crate::env::{DisplayContext, PreferenceStore};
use crate::mode::Mode;
use crate::resolver::ModeResolver;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Class token present on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "hydrate")]
const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";
#[cfg(feature = "hydrate")]
const PREFERS_LIGHT: &str = "(prefers-color-scheme: light)";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `PreferenceStore` over `window.localStorage`.
///
/// Inaccessible storage reads as absent; writes and removals are dropped.
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = storage() {
                let _ = s.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = storage() {
                let _ = s.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// `DisplayContext` over `document.documentElement`: toggles the `dark`
/// class and mirrors the mode into the `color-scheme` style property.
pub struct DocumentRoot;

impl DisplayContext for DocumentRoot {
    fn apply(&self, mode: Mode) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let class_list = root.class_list();
            if mode.is_dark() {
                let _ = class_list.add_1(DARK_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_CLASS);
            }
            if let Ok(el) = root.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("color-scheme", mode.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

/// Current OS color-scheme preference, if the environment reports one.
///
/// Queries the dark and light `prefers-color-scheme` media features
/// independently; an ambiguous answer (neither matches) reads as no
/// preference.
pub fn system_preference() -> Option<Mode> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let matches = |query: &str| {
            window
                .match_media(query)
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches())
        };
        Mode::from_flags(matches(PREFERS_DARK), matches(PREFERS_LIGHT))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cancellable subscription to `prefers-color-scheme` change events.
///
/// Dropping the listener detaches it from the media query list; call
/// [`SchemeListener::forget`] to keep it attached for the page lifetime.
pub struct SchemeListener {
    #[cfg(feature = "hydrate")]
    query: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    handler: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl SchemeListener {
    /// Subscribe `resolver` to OS preference changes.
    ///
    /// Each event re-derives the preference from the live media-query state
    /// and feeds it to [`ModeResolver::sync_system_preference`]. Returns
    /// `None` when the environment has no media-query facility.
    pub fn attach(resolver: &Rc<ModeResolver>) -> Option<SchemeListener> {
        #[cfg(feature = "hydrate")]
        {
            let query = web_sys::window()?.match_media(PREFERS_DARK).ok().flatten()?;
            let shared = Rc::clone(resolver);
            let handler = Closure::wrap(Box::new(move |_event: web_sys::MediaQueryListEvent| {
                shared.sync_system_preference(system_preference());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
                .ok()?;
            Some(SchemeListener { query, handler })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = resolver;
            None
        }
    }

    /// Detach now. Equivalent to dropping the listener.
    pub fn detach(self) {
        drop(self);
    }

    /// Leak the subscription so it stays attached for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for SchemeListener {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self
                .query
                .remove_event_listener_with_callback("change", self.handler.as_ref().unchecked_ref());
        }
    }
}

/// Construct the browser-backed resolver: load the persisted choice, read
/// the current OS preference, apply the resolved mode to the document, and
/// subscribe to preference changes.
///
/// The listener is returned alongside the resolver so hosts that rebuild the
/// manager (test harnesses) can detach it; page-lifetime hosts typically
/// `forget()` it. Outside a browser this still returns a working resolver —
/// storage reads as absent, the display apply is a no-op, and no listener is
/// attached.
pub fn install() -> (Rc<ModeResolver>, Option<SchemeListener>) {
    let resolver = Rc::new(ModeResolver::new(
        Box::new(LocalStorage),
        Box::new(DocumentRoot),
        system_preference(),
    ));
    let listener = SchemeListener::attach(&resolver);
    (resolver, listener)
}
