//! # yuca-site
//!
//! Leptos + WASM widget layer for Yuca marketing sites: navigation chrome,
//! a contact form wired to the hosted lead-capture endpoint, and a chat
//! widget proxying conversation turns to the hosted chat endpoint.
//!
//! The host page supplies a `window.SITE_CONFIG` global before the bundle
//! loads; see [`config::SiteConfig`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("yuca-site widgets ready");
    leptos::mount::hydrate_body(crate::app::App);
}
