//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render mode controls while reading shared state from the
//! Leptos context registered by
//! [`mode_toggle::provide_mode_resolver`].

pub mod mode_toggle;
