//! Leptos 0.7 CSR frontend shell
//!
//! Client-side rendered web UI compiled to WASM. The router serves the home
//! page at `/` and falls back to a static 404 page for every other path.
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and the not-found fallback
//! - `pages`: Top-level page components
//! - `components`: Reusable UI components
//! - `models`: Static page content as data
//! - `config`: Build-profile configuration
//! - `logger`: Browser console logging
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod pages;
pub mod router;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
