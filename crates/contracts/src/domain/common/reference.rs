use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to an entity by id and name (user, request type, bin location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Origin or destination of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationTypeRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationRef {
    pub fn type_code(&self) -> Option<String> {
        self.location_type
            .as_ref()
            .and_then(|t| t.location_type_code.clone())
    }

    /// `"Main Warehouse [Depot]"`; the bracket holds `null` when the type is unknown
    pub fn display_label(&self) -> String {
        let description = self
            .location_type
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_else(|| "null".to_string());
        format!("{} [{}]", self.name.clone().unwrap_or_default(), description)
    }
}
