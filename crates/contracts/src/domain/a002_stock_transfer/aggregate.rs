use crate::domain::a001_stock_movement::ProductRef;
use crate::domain::common::{null_as_default, LocationRef, NamedRef};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A completed return accepts no more changes
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Shipment type of a document: the backend sends either the id or an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShipmentTypeField {
    Id(String),
    Ref(NamedRef),
}

impl ShipmentTypeField {
    pub fn id(&self) -> Option<String> {
        match self {
            Self::Id(id) if !id.is_empty() => Some(id.clone()),
            Self::Id(_) => None,
            Self::Ref(r) => r.id.clone(),
        }
    }
}

/// Picked line of a returned product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicklistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_bin_location: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recalled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_hold: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document line; its picklist items are nested inside
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransferItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub picklist_items: Vec<PicklistItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outbound return (`GET/PUT /stockTransfers/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundReturn {
    pub id: String,
    #[serde(default)]
    pub stock_transfer_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub origin: Option<LocationRef>,
    #[serde(default)]
    pub destination: Option<LocationRef>,
    #[serde(default)]
    pub date_shipped: Option<String>,
    #[serde(default)]
    pub expected_delivery_date: Option<String>,
    #[serde(default)]
    pub shipment_type: Option<ShipmentTypeField>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_transfer_items: Vec<StockTransferItem>,
    /// Keys the client does not read; sent back unchanged on save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutboundReturn {
    /// Picklist items of all lines, in backend order
    pub fn picklist_items(&self) -> Vec<PicklistItem> {
        self.stock_transfer_items
            .iter()
            .flat_map(|item| item.picklist_items.iter().cloned())
            .collect()
    }
}
