#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// Degraded environment behavior (no browser)
// =============================================================

#[test]
fn system_preference_is_absent_without_a_browser() {
    assert_eq!(system_preference(), None);
}

#[test]
fn local_storage_reads_as_absent_and_swallows_writes() {
    let store = LocalStorage;
    store.set("dark-mode", "dark");
    assert_eq!(store.get("dark-mode"), None);
    store.remove("dark-mode");
}

#[test]
fn document_root_apply_is_noop_but_callable() {
    DocumentRoot.apply(Mode::Light);
    DocumentRoot.apply(Mode::Dark);
}

#[test]
fn scheme_listener_does_not_attach() {
    let (resolver, listener) = install();
    assert!(listener.is_none());
    drop(resolver);
}

// =============================================================
// install() still resolves correctly in memory
// =============================================================

#[test]
fn install_falls_back_to_the_default_mode() {
    let (resolver, _listener) = install();
    assert_eq!(resolver.mode(), Mode::Light);
    assert_eq!(resolver.choice(), None);
    assert_eq!(resolver.system_preference(), None);
}

#[test]
fn install_keeps_explicit_choices_in_memory() {
    let (resolver, _listener) = install();

    resolver.set_mode(Some(Mode::Dark));
    assert_eq!(resolver.mode(), Mode::Dark);

    assert_eq!(resolver.toggle(), Mode::Light);
    assert_eq!(resolver.mode(), Mode::Light);
}
