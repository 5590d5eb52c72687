//! Browser console logging
//!
//! Routes `tracing` events to the devtools console via `tracing-web`.

use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_web::MakeWebConsoleWriter;

use crate::config::CONFIG;
use crate::error::{Result, UiError};

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`UiError::Initialization`] if a global subscriber is already set.
pub fn init() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // no system clock on wasm32-unknown-unknown
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(CONFIG.log_level);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|e| UiError::Initialization(e.to_string()))
}
