//! Compile-time configuration
//!
//! There is no runtime config source in the browser, so values are picked
//! from the build profile.

use std::sync::LazyLock;

use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Shown in the app header
    pub app_name: &'static str,
    /// Most verbose level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl UiConfig {
    pub const fn dev_mode() -> Self {
        Self {
            app_name: "Frontend",
            log_level: LevelFilter::DEBUG,
        }
    }

    pub const fn release_mode() -> Self {
        Self {
            app_name: "Frontend",
            log_level: LevelFilter::INFO,
        }
    }
}

pub static CONFIG: LazyLock<UiConfig> = LazyLock::new(|| {
    if cfg!(debug_assertions) {
        UiConfig::dev_mode()
    } else {
        UiConfig::release_mode()
    }
});
