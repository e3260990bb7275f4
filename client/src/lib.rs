//! # client
//!
//! Leptos + WASM frontend for the block feed.
//!
//! This crate contains the feed page, its components, session state, the
//! WebSocket feed client, and the scroll helper. Block decoding lives in the
//! `blocks` crate so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: read the host-provided configuration from the page and
/// hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::FeedConfig::from_document().unwrap_or_else(|| {
        leptos::logging::warn!("feed configuration meta tags missing; using defaults");
        config::FeedConfig::default()
    });
    leptos::mount::hydrate_body(move || {
        use leptos::prelude::*;
        view! { <app::App config=config.clone()/> }
    });
}
