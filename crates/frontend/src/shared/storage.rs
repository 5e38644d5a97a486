use web_sys::window;

const DASHBOARD_KEY: &str = "dashboardKey";
const SESSION_CONTEXT_KEY: &str = "sessionContext";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the active dashboard configuration key to sessionStorage
pub fn save_dashboard_key(key: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(DASHBOARD_KEY, key);
    }
}

/// Get the active dashboard configuration key from sessionStorage
pub fn get_dashboard_key() -> Option<String> {
    get_session_storage()?
        .get_item(DASHBOARD_KEY)
        .ok()?
        .filter(|k| !k.is_empty())
}

/// Raw session bootstrap JSON written by the host page
pub fn get_session_context_json() -> Option<String> {
    get_session_storage()?.get_item(SESSION_CONTEXT_KEY).ok()?
}
