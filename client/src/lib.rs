//! # liftgrid-ui
//!
//! Leptos + WASM presentation layer for LiftGrid, the job-matching platform
//! connecting forklift operators ("caristes") with hiring companies.
//!
//! This crate contains the marketing landing page, the role-specific layouts
//! (company, driver) and the session bootstrap those layouts share: the
//! injected session store, the profile fetch bound to the navbar lifetime,
//! and the navigation shell state.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
