//! # signup-client
//!
//! Leptos + WASM frontend for account signup.
//!
//! This crate contains the signup and login pages, the signup form state and
//! submission flow, the identity provider client, and browser helpers. The
//! `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
