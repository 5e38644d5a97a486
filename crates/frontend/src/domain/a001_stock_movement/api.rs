use crate::shared::api_client::{get_json, put_flat, ApiError};
use crate::shared::api_utils::{api_url, path_segment};
use crate::shared::app_config::AppConfig;
use contracts::domain::a001_stock_movement::StockMovement;
use serde_json::Value;

fn movement_url(config: &AppConfig, id: &str) -> String {
    api_url(config, &format!("/stockMovements/{}", path_segment(id)))
}

pub async fn fetch_stock_movement(config: &AppConfig, id: &str) -> Result<StockMovement, ApiError> {
    get_json(&movement_url(config, id)).await
}

/// Persist a wizard step; the body is flattened to dotted keys
pub async fn update_stock_movement(
    config: &AppConfig,
    id: &str,
    values: &Value,
) -> Result<Value, ApiError> {
    put_flat(&movement_url(config, id), values).await
}
