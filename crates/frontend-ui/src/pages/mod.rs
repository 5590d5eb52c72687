//! Page components for the frontend
//!
//! This module contains the top-level page components for each route,
//! plus the fallback shown when no route matches.

pub mod home;
pub mod not_found;

pub use home::Home;
pub use not_found::NotFound;
