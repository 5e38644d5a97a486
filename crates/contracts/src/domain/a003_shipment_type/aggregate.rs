use crate::domain::common::localized_label;
use serde::{Deserialize, Serialize};

/// Shipment type (`GET /generic/shipmentType`).
///
/// `name` carries a bilingual caption such as `"Air|fr:Aérien"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentType {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl ShipmentType {
    pub fn label(&self, locale: Option<&str>) -> String {
        localized_label(&self.name, locale)
    }
}
