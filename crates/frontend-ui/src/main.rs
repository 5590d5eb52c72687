//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it mounts the App component to the
//! document body.

use frontend_ui::{App, logger};
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(error) = logger::init() {
        leptos::logging::error!("{error}");
    }
    tracing::info!("mounting app");

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
