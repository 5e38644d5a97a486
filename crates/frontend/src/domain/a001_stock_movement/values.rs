//! Stock movement record → wizard values

use contracts::domain::a001_stock_movement::StockMovement;
use contracts::domain::common::LocationRef;
use serde_json::{json, Map, Value};

fn location_value(location: Option<&LocationRef>) -> Value {
    let location = location.cloned().unwrap_or_default();
    json!({
        "id": location.id,
        "type": location.type_code(),
        "name": location.name,
        "label": location.display_label(),
    })
}

/// Wizard values for a fetched movement.
///
/// Every record field is kept; `stockMovementId`, `movementNumber` and the
/// select-shaped `origin`, `destination`, `requestedBy` and `requestType`
/// are added on top. Missing nested objects become nulls.
pub fn movement_values(record: &StockMovement) -> Value {
    let mut values = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    };

    let requested_by = record.requested_by.clone().unwrap_or_default();
    let request_type = record.request_type.clone().unwrap_or_default();

    values.insert("stockMovementId".into(), json!(record.id));
    values.insert("movementNumber".into(), json!(record.identifier));
    values.insert("origin".into(), location_value(record.origin.as_ref()));
    values.insert(
        "destination".into(),
        location_value(record.destination.as_ref()),
    );
    values.insert(
        "requestedBy".into(),
        json!({
            "id": requested_by.id,
            "name": requested_by.name,
            "label": requested_by.name,
        }),
    );
    values.insert(
        "requestType".into(),
        json!({
            "name": request_type.name,
            "label": request_type.name,
        }),
    );
    Value::Object(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> StockMovement {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_record() {
        let values = movement_values(&record(
            r#"{
                "id": "sm1",
                "identifier": "ABC-1",
                "statusCode": "PICKED",
                "description": "Restock",
                "origin": {"id": "l1", "name": "Main", "locationType": {"locationTypeCode": "DEPOT", "description": "Depot"}},
                "destination": {"id": "l2", "name": "Ward"},
                "requestedBy": {"id": "u1", "name": "Ann"},
                "requestType": {"name": "STOCK"},
                "stocklist": {"id": "s1"}
            }"#,
        ));

        assert_eq!(values["stockMovementId"], "sm1");
        assert_eq!(values["movementNumber"], "ABC-1");
        assert_eq!(values["statusCode"], "PICKED");
        assert_eq!(values["description"], "Restock");
        assert_eq!(
            values["origin"],
            json!({"id": "l1", "type": "DEPOT", "name": "Main", "label": "Main [Depot]"})
        );
        assert_eq!(values["destination"]["type"], Value::Null);
        assert_eq!(values["destination"]["label"], "Ward [null]");
        assert_eq!(
            values["requestedBy"],
            json!({"id": "u1", "name": "Ann", "label": "Ann"})
        );
        assert_eq!(values["requestType"], json!({"name": "STOCK", "label": "STOCK"}));
        assert_eq!(values["stocklist"], json!({"id": "s1"}));
    }

    #[test]
    fn test_missing_nested_objects_default_to_null() {
        let values = movement_values(&record(r#"{"id": "sm2"}"#));
        assert_eq!(values["movementNumber"], Value::Null);
        assert_eq!(values["origin"]["id"], Value::Null);
        assert_eq!(values["requestedBy"]["name"], Value::Null);
        assert_eq!(values["requestType"]["label"], Value::Null);
    }
}
