use leptos::prelude::*;

/// Crumb of the header trail. `label` is the translation key; `default_label`
/// is what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub default_label: String,
    pub url: String,
    /// Appended to `url` when present
    pub id: Option<String>,
}

impl Breadcrumb {
    pub fn href(&self) -> String {
        match &self.id {
            Some(id) => format!("{}{}", self.url, id),
            None => self.url.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub breadcrumbs: RwSignal<Vec<Breadcrumb>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            breadcrumbs: RwSignal::new(vec![]),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_appends_id() {
        let mut crumb = Breadcrumb {
            label: "react.breadcrumbs.verifyRequest.label".into(),
            default_label: "Verify request".into(),
            url: "/openboxes/stockMovement/verifyRequest/".into(),
            id: None,
        };
        assert_eq!(crumb.href(), "/openboxes/stockMovement/verifyRequest/");
        crumb.id = Some("sm1".into());
        assert_eq!(crumb.href(), "/openboxes/stockMovement/verifyRequest/sm1");
    }
}
