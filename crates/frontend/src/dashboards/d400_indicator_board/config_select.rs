use contracts::dashboards::d400_indicator_board::{DashboardConfig, PERSONAL_CONFIG};

/// URL value meaning "whatever configuration is active"
const INDEX_PARAM: &str = "index";

/// Configuration to show: the URL `configId`, then the key remembered in the
/// session, then `personal`
pub fn resolve_config_key(
    url_param: Option<&str>,
    active: Option<&str>,
    stored: Option<&str>,
) -> String {
    let from_url = match url_param {
        Some(INDEX_PARAM) => active,
        other => other,
    };
    [from_url, stored]
        .into_iter()
        .flatten()
        .find(|key| !key.is_empty())
        .unwrap_or(PERSONAL_CONFIG)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFilter {
    pub name: String,
    pub endpoint: Option<String>,
}

/// Filters declared by the configuration `key`, in name order
pub fn page_filters(config: &DashboardConfig, key: &str) -> Vec<PageFilter> {
    config
        .dashboards
        .get(key)
        .map(|dashboard| {
            dashboard
                .filters
                .iter()
                .map(|(name, filter)| PageFilter {
                    name: name.clone(),
                    endpoint: filter.endpoint.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_param_wins() {
        assert_eq!(
            resolve_config_key(Some("warehouse"), Some("personal"), Some("other")),
            "warehouse"
        );
    }

    #[test]
    fn test_index_means_active() {
        assert_eq!(
            resolve_config_key(Some("index"), Some("warehouse"), Some("other")),
            "warehouse"
        );
        assert_eq!(resolve_config_key(Some("index"), None, Some("other")), "other");
    }

    #[test]
    fn test_falls_back_to_session_then_personal() {
        assert_eq!(resolve_config_key(None, Some("x"), Some("stored")), "stored");
        assert_eq!(resolve_config_key(Some(""), None, None), "personal");
        assert_eq!(resolve_config_key(None, None, Some("")), "personal");
    }

    #[test]
    fn test_page_filters_of_active_configuration() {
        let config: DashboardConfig = serde_json::from_value(json!({
            "dashboards": {
                "personal": {"filters": {"location": {"endpoint": "/api/locations"}, "category": {}}},
                "other": {"filters": {}}
            }
        }))
        .unwrap();
        assert_eq!(
            page_filters(&config, "personal"),
            vec![
                PageFilter {
                    name: "category".to_string(),
                    endpoint: None
                },
                PageFilter {
                    name: "location".to_string(),
                    endpoint: Some("/api/locations".to_string())
                },
            ]
        );
        assert!(page_filters(&config, "other").is_empty());
        assert!(page_filters(&config, "missing").is_empty());
    }
}
