//! # portail
//!
//! Leptos + WASM frontend for the Madagascar higher-education directory.
//!
//! This crate contains the routing shell, layout components, route-level
//! pages, REST API helpers and DTOs, the fetch tri-state, and the thin
//! `wasm-bindgen` bridges to the page-global Leaflet and Chart.js libraries.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
