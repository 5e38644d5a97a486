//! HTTP client adapter
//!
//! Thin wrapper over `gloo_net` with two wire conventions of the backend:
//! - request bodies are sent flat: nested objects become dotted keys
//!   (`{"origin": {"id": 1}}` → `{"origin.id": 1}`), arrays stay arrays;
//! - responses may come flat as well and are rebuilt into nested objects,
//!   optionally wrapped into `{"data": ...}`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failures of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to build request: {0}")]
    Encode(String),
}

// ============================================================================
// Wire shape conversions
// ============================================================================

/// Flatten nested objects into dotted keys. Array elements are flattened on
/// their own; empty objects are kept as they are.
pub fn flatten_request(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut flat = Map::new();
            flatten_into(&mut flat, None, map);
            Value::Object(flat)
        }
        Value::Array(items) => Value::Array(items.iter().map(flatten_request).collect()),
        other => other.clone(),
    }
}

fn flatten_into(out: &mut Map<String, Value>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                flatten_into(out, Some(&full_key), inner);
            }
            Value::Array(items) => {
                out.insert(
                    full_key,
                    Value::Array(items.iter().map(flatten_request).collect()),
                );
            }
            other => {
                out.insert(full_key, other.clone());
            }
        }
    }
}

/// Rebuild nested objects from dotted keys, recursively through arrays
pub fn parse_response(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut nested = Map::new();
            for (key, inner) in map {
                let parsed = parse_response(inner);
                let parts: Vec<&str> = key.split('.').filter(|p| !p.is_empty()).collect();
                if parts.is_empty() {
                    nested.insert(key.clone(), parsed);
                } else {
                    insert_path(&mut nested, &parts, parsed);
                }
            }
            Value::Object(nested)
        }
        Value::Array(items) => Value::Array(items.iter().map(parse_response).collect()),
        other => other.clone(),
    }
}

fn insert_path(map: &mut Map<String, Value>, parts: &[&str], value: Value) {
    let (head, rest) = match parts.split_first() {
        Some(split) => split,
        None => return,
    };
    if rest.is_empty() {
        match (map.get_mut(*head), value) {
            // `{"a.b": 1, "a": {"c": 2}}`: merge instead of overwrite
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                existing.extend(incoming);
            }
            (_, value) => {
                map.insert(head.to_string(), value);
            }
        }
        return;
    }
    let entry = map
        .entry(head.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(inner) = entry {
        insert_path(inner, rest, value);
    }
}

/// Strip the `{"data": ...}` envelope if the backend used one
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

// ============================================================================
// Transport
// ============================================================================

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status { status, body: text });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let raw: Value = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parse_response(&unwrap_data(raw)))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET, unwrap, rebuild nested keys, then deserialize into `T`
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(read_body(response).await?)
}

/// PUT a flattened body; returns the parsed response body
pub async fn put_flat(url: &str, body: &Value) -> Result<Value, ApiError> {
    log::debug!("PUT {url}");
    let response = Request::put(url)
        .json(&flatten_request(body))
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

/// POST a flattened body; returns the parsed response body
pub async fn post_flat(url: &str, body: &Value) -> Result<Value, ApiError> {
    post_json(url, &flatten_request(body)).await
}

/// POST a body as-is (the dashboard config endpoint takes nested JSON)
pub async fn post_json(url: &str, body: &Value) -> Result<Value, ApiError> {
    log::debug!("POST {url}");
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_objects() {
        let body = json!({
            "id": "r1",
            "origin": {"id": "l1", "locationType": {"code": "DEPOT"}},
            "comments": "",
            "shipmentType": null,
            "meta": {}
        });
        assert_eq!(
            flatten_request(&body),
            json!({
                "id": "r1",
                "origin.id": "l1",
                "origin.locationType.code": "DEPOT",
                "comments": "",
                "shipmentType": null,
                "meta": {}
            })
        );
    }

    #[test]
    fn test_flatten_keeps_arrays_and_flattens_elements() {
        let body = json!({"picklistItems": [{"product": {"id": "p1"}, "quantity": 2}]});
        assert_eq!(
            flatten_request(&body),
            json!({"picklistItems": [{"product.id": "p1", "quantity": 2}]})
        );
    }

    #[test]
    fn test_parse_rebuilds_nested_objects() {
        let flat = json!({
            "id": "r1",
            "origin.id": "l1",
            "origin.name": "Main",
            "stockTransferItems": [{"picklistItems": [{"product.name": "Gauze"}]}]
        });
        assert_eq!(
            parse_response(&flat),
            json!({
                "id": "r1",
                "origin": {"id": "l1", "name": "Main"},
                "stockTransferItems": [{"picklistItems": [{"product": {"name": "Gauze"}}]}]
            })
        );
    }

    #[test]
    fn test_parse_merges_dotted_and_nested_forms() {
        let mixed = json!({"origin": {"name": "Main"}, "origin.id": "l1"});
        assert_eq!(
            parse_response(&mixed),
            json!({"origin": {"name": "Main", "id": "l1"}})
        );
    }

    #[test]
    fn test_parse_undoes_flatten() {
        let nested = json!({"a": {"b": {"c": 1}, "d": [1, 2]}, "e": "x"});
        assert_eq!(parse_response(&flatten_request(&nested)), nested);
    }

    #[test]
    fn test_unwrap_data_only_strips_envelope() {
        assert_eq!(unwrap_data(json!({"data": [1]})), json!([1]));
        assert_eq!(
            unwrap_data(json!({"data": 1, "total": 2})),
            json!({"data": 1, "total": 2})
        );
    }
}
