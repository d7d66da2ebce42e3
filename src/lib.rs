//! Galla Zubko portfolio — a single-window Dioxus app.
//!
//! Re-exports catalogs, state, and components so views can be embedded in a
//! host app and the state machine exercised in tests.

pub mod catalog;
pub mod components;
pub mod i18n;
pub mod prefs;
pub mod reveal;
pub mod state;

/// Site stylesheet for embedding in a host webview.
pub const SITE_CSS: &str = include_str!("style.css");
