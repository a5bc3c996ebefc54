//! # client
//!
//! Leptos frontend for Rate My Course: course list, the "Add Comment"
//! dialog, the student's own comments, and login.
//!
//! Built twice: with `hydrate` as the browser WASM bundle, and with `ssr`
//! as a library the server renders pages from.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating rate-my-course client");
    leptos::mount::hydrate_body(app::App);
}
