//! # classhub
//!
//! Leptos + WASM browser client for the ClassHub learning platform.
//!
//! The crate centers on the session core: a credential store persisted
//! across reloads, an HTTP layer that attaches the stored token to outbound
//! requests, the login/registration exchanges, and route gating that keeps
//! protected screens behind an authorized session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
