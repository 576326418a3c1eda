//! skill-time web shell.
//!
//! This crate provides the Leptos-based application shell for the
//! skill-time learning marketplace, plus the server side that proxies
//! session reads and logout to the marketplace backend.

#![allow(non_snake_case)]

pub mod app;
pub mod earnings;
pub mod provider;
pub mod user;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod backend;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
