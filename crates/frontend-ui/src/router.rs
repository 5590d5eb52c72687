//! Router configuration
//!
//! This module defines the routes and navigation structure for the application.
//! Paths that match nothing fall through to [`NotFound`].

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{Home, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    use crate::error::{Result, UiError};

    pub const HOME: &str = "/";

    /// Every path registered with [`super::AppRouter`]
    pub const ALL: &[&str] = &[HOME];

    pub fn is_registered(path: &str) -> bool {
        ALL.iter().any(|route| *route == path)
    }

    /// Accept a registered path.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::RouteNotFound`] carrying the path when nothing is
    /// registered for it.
    pub fn check(path: &str) -> Result<&str> {
        if is_registered(path) {
            Ok(path)
        } else {
            Err(UiError::RouteNotFound(path.to_owned()))
        }
    }
}

/// Log a path that reached the fallback
pub fn report_unmatched(path: &str) {
    match routes::check(path) {
        Err(error) => tracing::warn!(%error, "rendering not found page"),
        Ok(_) => tracing::debug!(path, "fallback rendered for a registered path"),
    }
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| {
                report_unmatched(&use_location().pathname.get_untracked());
                view! { <NotFound /> }
            }>
                <Route path=StaticSegment("") view=Home />
            </Routes>
        </Router>
    }
}
