//! Sending options shared by the outbound return page and the wizard's
//! Send step: field declarations, validation and wire normalization.

use crate::shared::date_utils::{is_before, parse_form_date};
use crate::shared::form::path::{is_blank, text_at, value_at};
use crate::shared::form::{
    Attributes, ControlKind, ErrorKind, FieldConfig, FieldErrors, FieldMap, SelectOption,
};
use crate::shared::page::PageRules;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Free-text fields the backend expects as `""` rather than `null`
pub const OPTIONAL_TEXT_FIELDS: [&str; 5] = [
    "trackingNumber",
    "driverName",
    "comments",
    "dateShipped",
    "expectedDeliveryDate",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentContext {
    /// Record can no longer be edited
    pub issued: bool,
    pub shipment_types: Vec<SelectOption>,
}

fn disabled_when_issued(ctx: &ShipmentContext) -> Attributes {
    Attributes {
        disabled: Some(ctx.issued),
        ..Default::default()
    }
}

fn shipment_type_attrs(ctx: &ShipmentContext) -> Attributes {
    Attributes {
        options: Some(ctx.shipment_types.clone()),
        disabled: Some(ctx.issued),
        ..Default::default()
    }
}

fn date_attrs() -> Attributes {
    Attributes {
        date_format: Some("MM/DD/YYYY"),
        required: Some(true),
        auto_complete: Some("off"),
        ..Default::default()
    }
}

pub static SHIPMENT_FIELDS: Lazy<FieldMap<ShipmentContext>> = Lazy::new(|| {
    let read_only = || Attributes {
        disabled: Some(true),
        ..Default::default()
    };
    vec![
        (
            "origin.name",
            FieldConfig::new(ControlKind::Text, "react.outboundReturns.origin.label", "Origin")
                .with_attributes(read_only()),
        ),
        (
            "destination.name",
            FieldConfig::new(
                ControlKind::Text,
                "react.outboundReturns.destination.label",
                "Destination",
            )
            .with_attributes(read_only()),
        ),
        (
            "dateShipped",
            FieldConfig::new(ControlKind::Date, "react.stockMovement.shipDate.label", "Shipment date")
                .with_attributes(date_attrs())
                .with_dynamic(disabled_when_issued),
        ),
        (
            "shipmentType",
            FieldConfig::new(
                ControlKind::Select,
                "react.stockMovement.shipmentType.label",
                "Shipment type",
            )
            .with_attributes(Attributes {
                required: Some(true),
                show_value_tooltip: Some(true),
                ..Default::default()
            })
            .with_dynamic(shipment_type_attrs),
        ),
        (
            "trackingNumber",
            FieldConfig::new(
                ControlKind::Text,
                "react.stockMovement.trackingNumber.label",
                "Tracking number",
            )
            .with_dynamic(disabled_when_issued),
        ),
        (
            "driverName",
            FieldConfig::new(ControlKind::Text, "react.stockMovement.driverName.label", "Driver name")
                .with_dynamic(disabled_when_issued),
        ),
        (
            "comments",
            FieldConfig::new(ControlKind::Text, "react.stockMovement.comments.label", "Comments")
                .with_dynamic(disabled_when_issued),
        ),
        (
            "expectedDeliveryDate",
            FieldConfig::new(
                ControlKind::Date,
                "react.stockMovement.expectedDeliveryDate.label",
                "Expected receipt date",
            )
            .with_attributes(date_attrs())
            .with_dynamic(disabled_when_issued),
        ),
    ]
});

/// Later rules overwrite earlier ones for the same field: a missing date
/// reports `required` even when a bound check also ran.
pub fn validate_shipment(values: &Value, minimum_date: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let date_shipped = text_at(values, "dateShipped");
    let expected = text_at(values, "expectedDeliveryDate");

    if is_before(&date_shipped, minimum_date) {
        errors.insert("dateShipped".to_string(), ErrorKind::InvalidDate);
    }
    if date_shipped.trim().is_empty() {
        errors.insert("dateShipped".to_string(), ErrorKind::Required);
    }
    if is_blank(value_at(values, "shipmentType")) {
        errors.insert("shipmentType".to_string(), ErrorKind::Required);
    }
    if expected.trim().is_empty() {
        errors.insert("expectedDeliveryDate".to_string(), ErrorKind::Required);
    }
    if parse_form_date(&expected).is_some() && is_before(&expected, &date_shipped) {
        errors.insert("expectedDeliveryDate".to_string(), ErrorKind::PastDate);
    }
    errors
}

/// Wire shape: optional text as `""`, shipment type as `{id}`
pub fn normalize_shipment(values: &Value) -> Value {
    let mut out = match values {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    for field in OPTIONAL_TEXT_FIELDS {
        let missing = out.get(field).map_or(true, Value::is_null);
        if missing {
            out.insert(field.to_string(), Value::String(String::new()));
        }
    }
    if let Some(Value::String(id)) = out.get("shipmentType") {
        let shipment_type = json!({ "id": id });
        out.insert("shipmentType".to_string(), shipment_type);
    }
    Value::Object(out)
}

/// Rules of a sending-options page
#[derive(Debug, Clone)]
pub struct ShipmentRules {
    /// Earliest allowed shipment date, `MM/DD/YYYY`
    pub minimum_date: String,
    /// `status` value that freezes the record
    pub terminal_status: Option<&'static str>,
}

impl PageRules for ShipmentRules {
    fn validate(&self, values: &Value) -> FieldErrors {
        validate_shipment(values, &self.minimum_date)
    }

    fn normalize_for_save(&self, values: &Value) -> Value {
        normalize_shipment(values)
    }

    fn is_terminal(&self, values: &Value) -> bool {
        self.terminal_status
            .is_some_and(|status| text_at(values, "status") == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ship_date_is_required() {
        let values = json!({
            "dateShipped": "",
            "shipmentType": "X",
            "expectedDeliveryDate": "06/01/2024"
        });
        let errors = validate_shipment(&values, "05/01/2024");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("dateShipped"), Some(&ErrorKind::Required));
    }

    #[test]
    fn test_delivery_before_shipment_is_past_date() {
        let values = json!({
            "dateShipped": "06/10/2024",
            "expectedDeliveryDate": "06/01/2024",
            "shipmentType": "X"
        });
        let errors = validate_shipment(&values, "");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("expectedDeliveryDate"),
            Some(&ErrorKind::PastDate)
        );
    }

    #[test]
    fn test_ship_date_before_minimum_is_invalid() {
        let values = json!({
            "dateShipped": "04/30/2024",
            "expectedDeliveryDate": "05/02/2024",
            "shipmentType": {"id": "1"}
        });
        let errors = validate_shipment(&values, "05/01/2024");
        assert_eq!(errors.get("dateShipped"), Some(&ErrorKind::InvalidDate));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_everything_missing() {
        let errors = validate_shipment(&json!({}), "05/01/2024");
        assert_eq!(errors.get("dateShipped"), Some(&ErrorKind::Required));
        assert_eq!(errors.get("shipmentType"), Some(&ErrorKind::Required));
        assert_eq!(
            errors.get("expectedDeliveryDate"),
            Some(&ErrorKind::Required)
        );
    }

    #[test]
    fn test_validate_is_pure() {
        let values = json!({"dateShipped": "06/10/2024", "shipmentType": "X"});
        assert_eq!(
            validate_shipment(&values, "05/01/2024"),
            validate_shipment(&values, "05/01/2024")
        );
    }

    #[test]
    fn test_normalize_fills_optional_text() {
        let values = json!({"trackingNumber": null, "driverName": "Ann", "shipmentType": "3"});
        let out = normalize_shipment(&values);
        assert_eq!(out["trackingNumber"], json!(""));
        assert_eq!(out["comments"], json!(""));
        assert_eq!(out["dateShipped"], json!(""));
        assert_eq!(out["driverName"], json!("Ann"));
        assert_eq!(out["shipmentType"], json!({"id": "3"}));
    }

    #[test]
    fn test_completed_record_is_terminal() {
        let rules = ShipmentRules {
            minimum_date: String::new(),
            terminal_status: Some("COMPLETED"),
        };
        assert!(rules.is_terminal(&json!({"status": "COMPLETED"})));
        assert!(!rules.is_terminal(&json!({"status": "PENDING"})));
    }

    #[test]
    fn test_field_map_disables_when_issued() {
        let ctx = ShipmentContext {
            issued: true,
            shipment_types: vec![],
        };
        for (path, field) in SHIPMENT_FIELDS.iter() {
            assert!(field.resolve(&ctx).is_disabled(), "{path} should be disabled");
        }
    }
}
