use crate::domain::common::{null_as_default, LocationRef, NamedRef};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Movement status as the backend reports it in `statusCode`.
///
/// The server owns the transitions; the client only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StockMovementStatus {
    Requested,
    Validating,
    Validated,
    Picking,
    Picked,
    Packing,
    Checking,
    Issued,
    Other(String),
}

impl StockMovementStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "REQUESTED" => Self::Requested,
            "VALIDATING" => Self::Validating,
            "VALIDATED" => Self::Validated,
            "PICKING" => Self::Picking,
            "PICKED" => Self::Picked,
            "PACKING" => Self::Packing,
            "CHECKING" => Self::Checking,
            "ISSUED" => Self::Issued,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Line of a movement to be picked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovementLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_requested: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recalled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_hold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pallet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stock movement (`GET /stockMovements/{id}`).
///
/// Keys the client does not read stay in `extra` and reach the wizard
/// values unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    /// Shown to the user as `movementNumber`
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub origin: Option<LocationRef>,
    #[serde(default)]
    pub destination: Option<LocationRef>,
    #[serde(default)]
    pub requested_by: Option<NamedRef>,
    #[serde(default)]
    pub request_type: Option<NamedRef>,
    #[serde(default)]
    pub date_requested: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipped: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub received: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: Vec<StockMovementLineItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StockMovement {
    pub fn status(&self) -> StockMovementStatus {
        StockMovementStatus::from_code(self.status_code.as_deref().unwrap_or_default())
    }
}
