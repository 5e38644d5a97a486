use super::fields::PICKLIST_FIELDS;
use super::view_model::SendOutboundReturnViewModel;
use crate::domain::common::shipment::SHIPMENT_FIELDS;
use crate::shared::app_config::use_app_config;
use crate::shared::busy::use_busy;
use crate::shared::form::{render_fields, FieldErrors, FormBinding};
use crate::shared::page::{ConfirmDialog, PageEvent, PagePhase};
use crate::shared::session::use_session;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SendOutboundReturn(outbound_return_id: String) -> impl IntoView {
    let session = use_session().info.get_untracked();
    let vm = SendOutboundReturnViewModel::new(
        outbound_return_id,
        use_app_config(),
        use_busy(),
        session.minimum_expiration_date.clone(),
        session.locale().map(str::to_string),
    );
    vm.load();

    let binding = vm.binding();
    let terminal = Memo::new(move |_| vm.is_terminal());
    let can_submit = Memo::new(move |_| vm.can_submit());
    let shipment_context = Memo::new(move |_| vm.field_context());
    let table_binding = FormBinding {
        values: vm.form,
        errors: Signal::derive(FieldErrors::new),
    };

    let on_choice = Callback::new(move |choice| vm.dispatch(PageEvent::Confirm(choice)));

    view! {
        <div class="send-outbound-return">
            {move || match vm.page.get().phase {
                PagePhase::Loading => view! { <div class="page-loading"><Spinner /></div> }.into_any(),
                PagePhase::LoadFailed => view! {
                    <div class="error">
                        "Failed to load the outbound return. "
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.load()>
                            "Retry"
                        </Button>
                    </div>
                }.into_any(),
                PagePhase::ConfirmPending(target) => view! {
                    <ConfirmDialog target=target on_choice=on_choice />
                }.into_any(),
                _ => ().into_any(),
            }}

            <div class="classic-form classic-form-condensed">
                <span class="buttons-container classic-form-buttons">
                    <Show
                        when=move || !terminal.get()
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || !vm.validate_current().is_empty())
                                on_click=move |_| vm.submit_with(PageEvent::Exit)
                            >
                                "Exit"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || !can_submit.get())
                            on_click=move |_| vm.submit_with(PageEvent::Save)
                        >
                            "Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.submit_with(PageEvent::Exit)
                        >
                            "Save and exit"
                        </Button>
                    </Show>
                </span>
                <div class="form-title" data-label-key="react.attribute.options.label">
                    "Sending options"
                </div>
                {move || render_fields(&SHIPMENT_FIELDS, shipment_context.get(), binding)}
            </div>

            <div class="submit-buttons">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || terminal.get())
                    on_click=move |_| vm.submit_with(PageEvent::GoBack)
                >
                    "Previous"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=move |_| vm.submit_with(PageEvent::SubmitAndAdvance)
                >
                    "Send shipment"
                </Button>
            </div>

            <div class="my-2 table-form">
                {render_fields(&PICKLIST_FIELDS, (), table_binding)}
            </div>
        </div>
    }
}
