//! Wizard header: title segments, status badge, breadcrumbs.

use super::state::WizardState;
use crate::layout::global_context::Breadcrumb;
use crate::shared::app_config::AppConfig;
use crate::shared::api_utils::app_url;
use crate::shared::form::path::{bool_at, text_at, value_at};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSegment {
    pub text: String,
    pub color: &'static str,
    /// Printed after the segment
    pub delimiter: &'static str,
}

fn segment(text: String, color: &'static str, delimiter: &'static str) -> TitleSegment {
    TitleSegment {
        text,
        color,
        delimiter,
    }
}

/// `Stock Movement | ABC-1 - Main to Ward, 06/01/2024, Restock`.
/// Empty until the movement has a number or a tracking number.
pub fn derive_title(values: &Value) -> Vec<TitleSegment> {
    let movement_number = text_at(values, "movementNumber");
    if movement_number.is_empty() && text_at(values, "trackingNumber").is_empty() {
        return Vec::new();
    }
    vec![
        segment("Stock Movement".to_string(), "#000000", " | "),
        segment(movement_number, "#000000", " - "),
        segment(text_at(values, "origin.name"), "#004d40", " to "),
        segment(text_at(values, "destination.name"), "#01579b", ", "),
        segment(text_at(values, "dateRequested"), "#4a148c", ", "),
        segment(text_at(values, "description"), "#770838", ""),
    ]
}

/// Shipment status badge, shown on the last page only
pub fn additional_title(state: &WizardState) -> Option<&'static str> {
    if !state.is_last_page() {
        return None;
    }
    let badge = if bool_at(&state.values, "shipped") {
        "SHIPPED"
    } else if bool_at(&state.values, "received") {
        "RECEIVED"
    } else {
        "PENDING"
    };
    Some(badge)
}

/// Labels and targets of the list and action crumbs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbsConfig {
    pub list_label: String,
    pub default_list_label: String,
    pub list_url: String,
    pub action_label: String,
    pub default_action_label: String,
    pub action_url: String,
}

impl BreadcrumbsConfig {
    pub fn verify_request(config: &AppConfig) -> Self {
        Self {
            list_label: "react.breadcrumbs.stockMovement.label".to_string(),
            default_list_label: "Stock Movements".to_string(),
            list_url: app_url(config, "/stockMovement/list"),
            action_label: "react.breadcrumbs.verifyRequest.label".to_string(),
            default_action_label: "Verify request".to_string(),
            action_url: app_url(config, "/stockMovement/verifyRequest/"),
        }
    }
}

pub fn breadcrumbs(config: &BreadcrumbsConfig, values: &Value) -> Vec<Breadcrumb> {
    let mut crumbs = vec![
        Breadcrumb {
            label: config.list_label.clone(),
            default_label: config.default_list_label.clone(),
            url: config.list_url.clone(),
            id: None,
        },
        Breadcrumb {
            label: config.action_label.clone(),
            default_label: config.default_action_label.clone(),
            url: config.action_url.clone(),
            id: None,
        },
    ];

    let movement_number = text_at(values, "movementNumber");
    let id = Some(text_at(values, "id"))
        .filter(|id| !id.is_empty())
        .or_else(|| Some(text_at(values, "stockMovementId")).filter(|id| !id.is_empty()));
    if let (false, Some(id)) = (movement_number.is_empty(), id) {
        crumbs.push(Breadcrumb {
            label: movement_number.clone(),
            default_label: movement_number,
            url: config.action_url.clone(),
            id: Some(id),
        });
    }
    crumbs
}

/// The movement ships from somewhere other than the user's location:
/// pages render read-only
pub fn show_only(values: &Value, current_location_id: &str) -> bool {
    match value_at(values, "origin") {
        Some(Value::Object(_)) => text_at(values, "origin.id") != current_location_id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_verify_request::state::{initialize, WizardEvent};
    use serde_json::json;

    fn config() -> BreadcrumbsConfig {
        BreadcrumbsConfig::verify_request(&AppConfig::default())
    }

    #[test]
    fn test_title_segments() {
        let values = json!({
            "movementNumber": "ABC-1",
            "origin": {"name": "Main"},
            "destination": {"name": "Ward"},
            "dateRequested": "06/01/2024",
            "description": "Restock"
        });
        let title = derive_title(&values);
        let text: String = title
            .iter()
            .map(|s| format!("{}{}", s.text, s.delimiter))
            .collect();
        assert_eq!(text, "Stock Movement | ABC-1 - Main to Ward, 06/01/2024, Restock");
        assert_eq!(title[2].color, "#004d40");
    }

    #[test]
    fn test_title_empty_without_number_or_tracking() {
        assert!(derive_title(&json!({"description": "Restock"})).is_empty());
        assert_eq!(derive_title(&json!({"trackingNumber": "T1"})).len(), 6);
    }

    #[test]
    fn test_badge_only_on_last_page() {
        let (mut state, _) = initialize(None, false, json!({"shipped": true}));
        assert_eq!(additional_title(&state), None);

        state = state
            .step(WizardEvent::Advance {
                from_page: 2,
                values: json!({}),
            })
            .0;
        assert_eq!(additional_title(&state), Some("SHIPPED"));

        state.values = json!({"received": true});
        assert_eq!(additional_title(&state), Some("RECEIVED"));
        state.values = json!({});
        assert_eq!(additional_title(&state), Some("PENDING"));
    }

    #[test]
    fn test_breadcrumbs_add_movement_crumb() {
        let two = breadcrumbs(&config(), &json!({"movementNumber": "ABC-1"}));
        assert_eq!(two.len(), 2);

        let three = breadcrumbs(
            &config(),
            &json!({"movementNumber": "ABC-1", "stockMovementId": "sm1"}),
        );
        assert_eq!(three.len(), 3);
        assert_eq!(three[2].label, "ABC-1");
        assert_eq!(three[2].id.as_deref(), Some("sm1"));
        assert_eq!(three[2].url, "/openboxes/stockMovement/verifyRequest/");
    }

    #[test]
    fn test_show_only_when_origin_is_elsewhere() {
        assert!(show_only(&json!({"origin": {"id": "l2"}}), "l1"));
        assert!(!show_only(&json!({"origin": {"id": "l1"}}), "l1"));
        assert!(!show_only(&json!({}), "l1"));
        assert!(!show_only(&json!({"origin": null}), "l1"));
    }
}
