use crate::layout::global_context::AppGlobalContext;
use crate::shared::busy::use_busy;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let busy_visible = use_busy().visible;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <nav class="breadcrumbs">
                    {move || {
                        ctx.breadcrumbs
                            .get()
                            .into_iter()
                            .map(|crumb| {
                                let href = crumb.href();
                                view! {
                                    <a class="breadcrumbs__item" href=href data-label-key=crumb.label>
                                        {crumb.default_label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
            </div>
            <div class="header__actions">
                <Show when=move || busy_visible.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>
        </header>
    }
}
