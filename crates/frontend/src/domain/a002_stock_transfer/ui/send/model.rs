use crate::shared::api_client::{get_json, post_flat, put_flat, ApiError};
use crate::shared::api_utils::{api_url, path_segment};
use crate::shared::app_config::AppConfig;
use contracts::domain::a002_stock_transfer::{OutboundReturn, ShipmentTypeField};
use serde_json::{json, Map, Value};

fn transfer_url(config: &AppConfig, id: &str) -> String {
    api_url(config, &format!("/stockTransfers/{}", path_segment(id)))
}

/// Form values of an outbound return: the record itself, the shipment type
/// reduced to its id and every picklist item in one `picklistItems` list
pub fn into_form_values(record: &OutboundReturn) -> Value {
    let mut values = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    };
    let shipment_type = record
        .shipment_type
        .as_ref()
        .and_then(ShipmentTypeField::id)
        .map_or(Value::Null, Value::String);
    let picklist_items = serde_json::to_value(record.picklist_items()).unwrap_or_else(|_| json!([]));

    values.insert("shipmentType".into(), shipment_type);
    values.insert("picklistItems".into(), picklist_items);
    Value::Object(values)
}

pub async fn fetch_outbound_return(config: &AppConfig, id: &str) -> Result<Value, ApiError> {
    let record: OutboundReturn = get_json(&transfer_url(config, id)).await?;
    Ok(into_form_values(&record))
}

/// PUT the normalized values; the returned record becomes the new form
/// values. An empty response keeps what was sent.
pub async fn save_outbound_return(
    config: &AppConfig,
    id: &str,
    payload: &Value,
) -> Result<Value, ApiError> {
    let response = put_flat(&transfer_url(config, id), payload).await?;
    if response.is_null() {
        return Ok(payload.clone());
    }
    let record: OutboundReturn =
        serde_json::from_value(response).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(into_form_values(&record))
}

pub async fn send_shipment(config: &AppConfig, id: &str, payload: &Value) -> Result<(), ApiError> {
    let url = format!("{}/sendShipment", transfer_url(config, id));
    post_flat(&url, payload).await.map(|_| ())
}
