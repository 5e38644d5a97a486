use crate::shared::api_client::{get_json, post_json, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::app_config::AppConfig;
use contracts::dashboards::d400_indicator_board::{
    DashboardConfig, DashboardDef, FillRateDestination, NumberCardData,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NumberCardQuery<'a> {
    location_id: &'a str,
    user_id: &'a str,
}

/// All dashboard configurations and the widget catalog
pub async fn fetch_config(config: &AppConfig) -> Result<DashboardConfig, ApiError> {
    get_json(&api_url(config, "/dashboard/config")).await
}

/// Store every configuration; the body goes out as is, not flattened
pub async fn save_config(
    config: &AppConfig,
    dashboards: &BTreeMap<String, DashboardDef>,
) -> Result<(), ApiError> {
    let body = serde_json::to_value(dashboards).map_err(|e| ApiError::Encode(e.to_string()))?;
    post_json(&api_url(config, "/dashboard/config"), &body).await?;
    Ok(())
}

/// Locations for the filter, sorted by id
pub async fn fetch_locations(config: &AppConfig) -> Result<Vec<FillRateDestination>, ApiError> {
    let mut locations: Vec<FillRateDestination> =
        get_json(&api_url(config, "/dashboard/fillRateDestinations")).await?;
    locations.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(locations)
}

/// Widget endpoint with the location and user appended to its query string
pub fn number_card_url(endpoint: &str, location_id: &str, user_id: &str) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&NumberCardQuery {
        location_id,
        user_id,
    })
    .map_err(|e| ApiError::Encode(e.to_string()))?;
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(format!("{endpoint}{separator}{query}"))
}

/// Data of a numeric card
pub async fn fetch_number_card(
    endpoint: &str,
    location_id: &str,
    user_id: &str,
) -> Result<NumberCardData, ApiError> {
    get_json(&number_card_url(endpoint, location_id, user_id)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_card_url_appends_query() {
        assert_eq!(
            number_card_url("/openboxes/api/dashboard/inStock", "l1", "u1").unwrap(),
            "/openboxes/api/dashboard/inStock?locationId=l1&userId=u1"
        );
        assert_eq!(
            number_card_url("/api/w?x=1", "l2", "u1").unwrap(),
            "/api/w?x=1&locationId=l2&userId=u1"
        );
    }
}
