//! # reframe-client
//!
//! Leptos + WASM frontend for the Reframe image-style transformation app.
//!
//! This crate contains pages, components, session/UI state, the REST client
//! for the transformation backend, and the browser-local profile store. It is
//! compiled twice: with `hydrate` into the browser bundle and with `ssr` into
//! the page server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("reframe client hydrating");
    leptos::mount::hydrate_body(app::App);
}
