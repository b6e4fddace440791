//! # stockroom-client
//!
//! Leptos + WASM frontend for the inventory catalog service.
//!
//! This crate contains the session store, the product/location list renderer,
//! the lazy inventory panel controller, and the pages and components that
//! wire them together. Browser-only glue (HTTP, `sessionStorage`, navigation)
//! is compiled in with the `hydrate` feature; without it the same code
//! server-renders and runs under native unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
