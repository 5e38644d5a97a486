use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the only configuration a user may edit and persist
pub const PERSONAL_CONFIG: &str = "personal";

/// Widget type that goes to the numeric group; any other type is a graph
pub const NUMBER_WIDGET_TYPE: &str = "number";

/// Widget placement inside a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRef {
    pub widget_id: String,
    pub order: u32,
}

/// Filter declared by a configuration (`filters.<name>.endpoint`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDef {
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Named dashboard configuration.
///
/// Fields the client does not use are kept in `extra` so that saving the
/// configuration posts them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<WidgetRef>,
    #[serde(default)]
    pub filters: BTreeMap<String, FilterDef>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Catalogue entry for a widget (`dashboardWidgets.<widgetId>`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDef {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub widget_type: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl WidgetDef {
    pub fn is_number(&self) -> bool {
        self.widget_type == NUMBER_WIDGET_TYPE
    }
}

/// Response of `GET /dashboard/config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboards: BTreeMap<String, DashboardDef>,
    #[serde(default)]
    pub dashboard_widgets: BTreeMap<String, WidgetDef>,
}

/// Location from `GET /dashboard/fillRateDestinations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillRateDestination {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Data of a numeric card returned by its widget endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberCardData {
    #[serde(default)]
    pub number: Option<serde_json::Value>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub number_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrips_unknown_fields() {
        let json = r#"{
            "dashboards": {
                "personal": {"name":"Personal","widgets":[{"widgetId":"w1","order":1}],"filters":{},"endpoint":"/x"}
            },
            "dashboardWidgets": {"w1": {"title":"In stock","type":"number","endpoint":"/api/w1"}}
        }"#;
        let cfg: DashboardConfig = serde_json::from_str(json).unwrap();
        let personal = &cfg.dashboards[PERSONAL_CONFIG];
        assert_eq!(personal.widgets.len(), 1);
        assert!(cfg.dashboard_widgets["w1"].is_number());

        let back = serde_json::to_value(personal).unwrap();
        assert_eq!(back["endpoint"], "/x");
    }
}
