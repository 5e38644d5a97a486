//! Session context: locale, current location, user.
//!
//! The host page writes a bootstrap record into sessionStorage; the app only
//! reads it. Missing fields fall back to defaults.

use super::storage;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLocation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// The location supports packing; the wizard gets a Pack step
    #[serde(default)]
    pub has_packing_support: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default = "default_locale")]
    pub active_language: String,
    #[serde(default)]
    pub current_location: CurrentLocation,
    /// Earliest allowed shipment date, `MM/DD/YYYY`
    #[serde(default)]
    pub minimum_expiration_date: String,
    #[serde(default)]
    pub user_id: String,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            active_language: default_locale(),
            current_location: CurrentLocation::default(),
            minimum_expiration_date: String::new(),
            user_id: String::new(),
        }
    }
}

impl SessionInfo {
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(info) => info,
            Err(e) => {
                log::warn!("session bootstrap ignored: {e}");
                Self::default()
            }
        }
    }

    pub fn locale(&self) -> Option<&str> {
        Some(self.active_language.as_str()).filter(|l| !l.is_empty())
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub info: RwSignal<SessionInfo>,
}

impl SessionContext {
    pub fn load() -> Self {
        let info = storage::get_session_context_json()
            .map(|json| SessionInfo::from_json(&json))
            .unwrap_or_default();
        Self {
            info: RwSignal::new(info),
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_with_partial_fields() {
        let info = SessionInfo::from_json(
            r#"{"activeLanguage":"fr","currentLocation":{"id":"l1","hasPackingSupport":true}}"#,
        );
        assert_eq!(info.locale(), Some("fr"));
        assert!(info.current_location.has_packing_support);
        assert_eq!(info.minimum_expiration_date, "");
    }

    #[test]
    fn test_malformed_bootstrap_uses_defaults() {
        let info = SessionInfo::from_json("not json");
        assert_eq!(info, SessionInfo::default());
        assert_eq!(info.locale(), Some("en"));
    }
}
