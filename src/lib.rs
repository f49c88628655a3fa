//! # crowsnest-client
//!
//! Browser client for the Crowsnest vessel-monitoring platform: the map
//! viewer, the user-administration console, and the login flow, composed
//! around a cookie-based session with a separate administrator tier.
//!
//! The engineered core is the session gating subsystem: `util::cookie`
//! probes the access cookie, `net::api` runs the identity/login/logout
//! exchanges, `util::guard` gates every protected navigation, and
//! `net::admin` adapts the same primitives for the privileged console.
//! Pages and components are declarative wiring over those parts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
