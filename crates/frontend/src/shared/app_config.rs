//! Application configuration
//!
//! Base paths for the REST API and for server-rendered pages. Defaults match the
//! production deployment; both can be overridden at build time:
//!
//! ```text
//! OPENBOXES_API_BASE=/api OPENBOXES_APP_BASE= trunk build
//! ```

use leptos::prelude::*;

const DEFAULT_APP_BASE: &str = "/openboxes";
const DEFAULT_API_BASE: &str = "/openboxes/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix of server-rendered pages (`/stockMovement/show/...`)
    pub app_base: String,
    /// Prefix of every REST endpoint
    pub api_base: String,
}

impl AppConfig {
    /// Build-time overrides, falling back to the defaults
    pub fn from_env() -> Self {
        Self {
            app_base: option_env!("OPENBOXES_APP_BASE")
                .unwrap_or(DEFAULT_APP_BASE)
                .trim_end_matches('/')
                .to_string(),
            api_base: option_env!("OPENBOXES_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_base: DEFAULT_APP_BASE.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Config from context, or the defaults when no provider is mounted
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
