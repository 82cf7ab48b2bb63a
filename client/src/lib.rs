//! # visualbug-client
//!
//! Leptos UI for the VisualBug marketing site and dashboard.
//!
//! This crate contains the app shell and routes, the landing page sections,
//! the sign-in form, the dashboard, client state, and the REST helpers that
//! talk to the server's `/api` routes. The server crate depends on it with the
//! `ssr` feature for rendering and for the shared wire types in `net::types`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the logger is already installed then.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
