//! Dotted field paths over JSON form values.
//!
//! `"origin.name"` addresses `{"origin": {"name": ..}}`; a numeric segment
//! addresses an array element (`"picklistItems.0.quantity"`).

use serde_json::{Map, Value};

pub fn value_at<'a>(values: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(values, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display text of a scalar; `null`, missing and composite values give `""`
pub fn text_at(values: &Value, path: &str) -> String {
    match value_at(values, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub fn bool_at(values: &Value, path: &str) -> bool {
    matches!(value_at(values, path), Some(Value::Bool(true)))
}

/// Missing, `null`, empty string or empty object
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Set a value, creating intermediate objects. Writing through a scalar
/// replaces it with an object; an out-of-range array index is ignored.
pub fn set_value_at(values: &mut Value, path: &str, new_value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    set_segments(values, &segments, new_value);
}

fn set_segments(current: &mut Value, segments: &[&str], new_value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if let Value::Array(items) = current {
        if let Some(item) = head.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
            if rest.is_empty() {
                *item = new_value;
            } else {
                set_segments(item, rest, new_value);
            }
        }
        return;
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Value::Object(map) = current {
        if rest.is_empty() {
            map.insert(head.to_string(), new_value);
        } else {
            let child = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            set_segments(child, rest, new_value);
        }
    }
}

/// Shallow merge: top-level keys of `incoming` replace those of `base`, keys
/// absent from `incoming` are kept
pub fn merge_values(base: &Value, incoming: &Value) -> Value {
    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    if let Value::Object(map) = incoming {
        for (key, value) in map {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_at_objects_and_arrays() {
        let values = json!({"origin": {"name": "Main"}, "items": [{"qty": 3}]});
        assert_eq!(text_at(&values, "origin.name"), "Main");
        assert_eq!(text_at(&values, "items.0.qty"), "3");
        assert_eq!(text_at(&values, "items.4.qty"), "");
        assert_eq!(text_at(&values, "destination.name"), "");
    }

    #[test]
    fn test_set_value_creates_objects() {
        let mut values = json!({"origin": null});
        set_value_at(&mut values, "origin.name", json!("Main"));
        set_value_at(&mut values, "comments", json!("fragile"));
        assert_eq!(values, json!({"origin": {"name": "Main"}, "comments": "fragile"}));
    }

    #[test]
    fn test_set_value_in_array_row() {
        let mut values = json!({"lineItems": [{"boxName": ""}, {"boxName": ""}]});
        set_value_at(&mut values, "lineItems.1.boxName", json!("B2"));
        set_value_at(&mut values, "lineItems.9.boxName", json!("lost"));
        assert_eq!(
            values,
            json!({"lineItems": [{"boxName": ""}, {"boxName": "B2"}]})
        );
    }

    #[test]
    fn test_merge_keeps_fields_absent_from_incoming() {
        let base = json!({"description": "Restock", "trackingNumber": "T1"});
        let incoming = json!({"trackingNumber": "T2", "driverName": "Ann"});
        assert_eq!(
            merge_values(&base, &incoming),
            json!({"description": "Restock", "trackingNumber": "T2", "driverName": "Ann"})
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!("  "))));
        assert!(is_blank(Some(&json!({}))));
        assert!(!is_blank(Some(&json!("X"))));
        assert!(!is_blank(Some(&json!(0))));
    }
}
