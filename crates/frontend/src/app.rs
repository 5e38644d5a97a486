use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::app_config::AppConfig;
use crate::shared::busy::BusyService;
use crate::shared::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // API and page bases, overridable at build time
    provide_context(AppConfig::from_env());

    // Global spinner shared by every page
    provide_context(BusyService::new());

    // Locale, current location and user from the host page
    provide_context(SessionContext::load());

    // Breadcrumbs shown by the header
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
