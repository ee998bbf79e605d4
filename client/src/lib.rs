//! # client
//!
//! Leptos + WASM frontend for the admin console.
//!
//! This crate holds the session store, the role-gated view resolver, the
//! identity backend client and the pages that render on top of them. The
//! `hydrate` feature builds the browser bundle; `ssr` is used by the host
//! server to render the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
