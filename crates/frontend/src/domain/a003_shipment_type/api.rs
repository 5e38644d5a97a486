use crate::shared::api_client::{get_json, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::app_config::AppConfig;
use crate::shared::form::SelectOption;
use contracts::domain::a003_shipment_type::ShipmentType;

/// Select options in the given locale, in backend order
pub fn to_options(types: &[ShipmentType], locale: Option<&str>) -> Vec<SelectOption> {
    types
        .iter()
        .map(|t| SelectOption {
            value: t.id.clone(),
            label: t.label(locale),
        })
        .collect()
}

pub async fn fetch_shipment_types(
    config: &AppConfig,
    locale: Option<&str>,
) -> Result<Vec<SelectOption>, ApiError> {
    let types: Vec<ShipmentType> = get_json(&api_url(config, "/generic/shipmentType")).await?;
    Ok(to_options(&types, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_locale() {
        let types = vec![
            ShipmentType {
                id: "1".into(),
                name: "Air|fr:Aérien".into(),
            },
            ShipmentType {
                id: "2".into(),
                name: "Land".into(),
            },
        ];
        let options = to_options(&types, Some("fr"));
        assert_eq!(options[0].label, "Aérien");
        assert_eq!(options[1].label, "Land");
        assert_eq!(to_options(&types, None)[0].label, "Air");
    }
}
