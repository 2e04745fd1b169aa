//! Dark mode toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin rendering wrapper over [`ModeResolver`]: the resolver owns all mode
//! state and side-effects, this component only renders the current mode and
//! forwards clicks to `toggle`.

use std::rc::Rc;

use leptos::prelude::*;

use crate::mode::Mode;
use crate::resolver::ModeResolver;

#[cfg(test)]
#[path = "mode_toggle_test.rs"]
mod mode_toggle_test;

/// Register `resolver` and a signal mirroring its resolved mode in Leptos
/// context.
///
/// Call once at the composition root; exactly one resolver should exist per
/// display context. The signal updates whenever the resolver notifies, so
/// any component reading it re-renders on mode changes.
pub fn provide_mode_resolver(resolver: Rc<ModeResolver>) {
    let mode = RwSignal::new(resolver.mode());
    resolver.subscribe(move |next| mode.set(next));
    provide_context(mode);
    provide_context(StoredValue::new_local(resolver));
}

/// Toggle button flipping between light and dark.
///
/// Expects [`provide_mode_resolver`] to have run higher in the tree.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let resolver = expect_context::<StoredValue<Rc<ModeResolver>, LocalStorage>>();
    let mode = expect_context::<RwSignal<Mode>>();

    view! {
        <button
            class="btn mode-toggle"
            on:click=move |_| {
                resolver.with_value(|r| {
                    r.toggle();
                });
            }
            title="Toggle dark mode"
        >
            {move || glyph(mode.get())}
        </button>
    }
}

/// Glyph for the action the button offers: the sun while dark, the moon
/// while light.
fn glyph(mode: Mode) -> &'static str {
    if mode.is_dark() { "☀" } else { "☾" }
}
