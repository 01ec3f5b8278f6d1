//! # memos-web
//!
//! Leptos + WASM frontend for the memo list.
//!
//! This crate holds the app shell, memo list state, and the `MasonryView`
//! component family that renders memos as an adaptive multi-column grid. The
//! layout math lives in the `masonry` crate; this crate supplies the browser
//! side of it (resize observation, debounce timers, settings persistence).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
