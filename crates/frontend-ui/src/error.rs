//! Error types for the frontend shell
//!
//! Pages themselves cannot fail; these errors come from the host side
//! (route lookups, startup).

use thiserror::Error;

/// Errors raised by the application shell
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No registered route matches the path
    #[error("Route not found: {0}")]
    RouteNotFound(String),
    /// Startup step failed (logger, mount)
    #[error("Initialization failed: {0}")]
    Initialization(String),
}

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, UiError>;
