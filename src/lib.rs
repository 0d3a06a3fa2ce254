//! IrisMapper browser client: authentication, profile, and admin user
//! management on a hosted identity/document backend.
//!
//! ARCHITECTURE
//! ============
//! `net` consumes the hosted services, `guard` decides per page load who may
//! see what, `state` holds the shared signals, and `pages`/`components`
//! render the workflows. Nothing server-side lives in this crate.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point; mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
