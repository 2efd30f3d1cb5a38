//! # autores-client
//!
//! Leptos + WASM frontend for managing author records through the authors
//! REST API: bearer-token login, author list and detail, and a protected
//! management page with create/edit/delete.
//!
//! The browser-facing pieces (HTTP, `localStorage`, timers, navigation) sit
//! behind the `hydrate` feature. Session handling, the author repository, the
//! view-state machines and the refresh orchestration compile natively and are
//! unit-tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
