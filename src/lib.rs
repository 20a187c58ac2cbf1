//! # auth-client
//!
//! Leptos + WASM frontend for the authentication service: signup, login,
//! forgot-password and reset-password flows, plus a session-gated dashboard.
//!
//! This crate is a thin presentation layer over the remote auth API. All
//! real state (credentials, tokens, OTP validity) lives server-side; the
//! client holds per-page form state, a toast stack, and a localStorage
//! session record.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the app into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
