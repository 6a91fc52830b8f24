//! # labelboard
//!
//! Leptos + WASM frontend for the image labeling platform. Administrators
//! manage labelers, groups, tags, and images; labelers work through their
//! assigned groups applying tags, with optional server-side suggestions.
//!
//! This crate contains pages, components, session state, and the typed
//! HTTP client for the platform's JSON API. It renders on the server via
//! `leptos_axum` (the `ssr` feature) and hydrates in the browser (the
//! `hydrate` feature).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
