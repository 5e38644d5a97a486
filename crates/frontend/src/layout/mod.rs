pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell: header with breadcrumbs and the busy spinner, then
/// the routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-main">
                {children()}
            </div>
        </div>
    }
}
