//! API utilities for frontend-backend communication
//!
//! Builds endpoint and navigation URLs from [`AppConfig`].

use super::app_config::AppConfig;

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// # use frontend::shared::app_config::AppConfig;
/// # let config = AppConfig::default();
/// let url = api_url(&config, "/stockMovements/123");
/// // "/openboxes/api/stockMovements/123"
/// ```
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.api_base, path)
}

/// Build a URL of a server-rendered page (outside the API)
pub fn app_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.app_base, path)
}

/// Percent-encode a record id before putting it into a path
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Full-page navigation to a server-rendered view
pub fn navigate_to(url: &str) {
    log::debug!("navigate: {url}");
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_use_configured_bases() {
        let config = AppConfig::default();
        assert_eq!(
            api_url(&config, "/stockTransfers/42"),
            "/openboxes/api/stockTransfers/42"
        );
        assert_eq!(
            app_url(&config, "/stockMovement/show/42"),
            "/openboxes/stockMovement/show/42"
        );
    }

    #[test]
    fn test_path_segment_encodes_separators() {
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(path_segment("ff8081"), "ff8081");
    }
}
