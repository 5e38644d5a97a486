use super::pages::{step_values, StepContext, StepRules, EDIT_FIELDS, PACK_FIELDS, PICK_FIELDS};
use super::state::{WizardEvent, WizardPage};
use super::view::WizardDriver;
use crate::domain::a001_stock_movement::api::update_stock_movement;
use crate::domain::a001_stock_movement::movement_values;
use crate::domain::a003_shipment_type::api::fetch_shipment_types;
use crate::domain::common::shipment::{ShipmentContext, SHIPMENT_FIELDS};
use crate::shared::api_client::ApiError;
use crate::shared::api_utils::{app_url, navigate_to, path_segment};
use crate::shared::app_config::AppConfig;
use crate::shared::busy::BusyService;
use crate::shared::form::path::merge_values;
use crate::shared::form::{render_fields, FormBinding, SelectOption};
use crate::shared::page::{ConfirmDialog, PageEvent, PageIntent, PagePhase, PageRules, PageState};
use contracts::domain::a001_stock_movement::StockMovement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

/// PUT the step; a movement in the response is mapped back to wizard values
async fn persist_step(config: &AppConfig, id: &str, payload: &Value) -> Result<Value, ApiError> {
    let response = update_stock_movement(config, id, payload).await?;
    if response.is_null() {
        return Ok(payload.clone());
    }
    match serde_json::from_value::<StockMovement>(response) {
        Ok(record) => Ok(merge_values(payload, &movement_values(&record))),
        Err(e) => {
            log::warn!("unexpected stock movement response: {e}");
            Ok(payload.clone())
        }
    }
}

/// Page controller driver of one wizard step
#[derive(Clone, Copy)]
pub struct StepViewModel {
    pub page: RwSignal<PageState>,
    pub form: RwSignal<Value>,
    pub shipment_types: RwSignal<Vec<SelectOption>>,
    rules: StoredValue<StepRules>,
    movement_id: StoredValue<String>,
    config: StoredValue<AppConfig>,
    busy: StoredValue<BusyService>,
    wizard: WizardDriver,
    page_number: usize,
    is_last: bool,
}

impl StepViewModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rules: StepRules,
        values: Value,
        movement_id: String,
        config: AppConfig,
        busy: BusyService,
        wizard: WizardDriver,
        page_number: usize,
        is_last: bool,
    ) -> Self {
        let values = step_values(rules.page, &values);
        Self {
            page: RwSignal::new(PageState::ready(values.clone())),
            form: RwSignal::new(values),
            shipment_types: RwSignal::new(Vec::new()),
            rules: StoredValue::new(rules),
            movement_id: StoredValue::new(movement_id),
            config: StoredValue::new(config),
            busy: StoredValue::new(busy),
            wizard,
            page_number,
            is_last,
        }
    }

    pub fn binding(&self) -> FormBinding {
        let vm = *self;
        FormBinding {
            values: self.form,
            errors: Signal::derive(move || {
                let rules = vm.rules.get_value();
                vm.form.with(|values| rules.validate(values))
            }),
        }
    }

    pub fn can_submit(&self) -> bool {
        let rules = self.rules.get_value();
        let page = self.page.get();
        self.form.with(|values| page.can_submit(&rules, values))
    }

    pub fn submit_with(&self, make: fn(Value) -> PageEvent) {
        self.dispatch(make(self.form.get_untracked()));
    }

    pub fn load_shipment_types(&self, locale: Option<String>) {
        let vm = *self;
        let config = self.config.get_value();
        spawn_local(async move {
            match fetch_shipment_types(&config, locale.as_deref()).await {
                Ok(types) => vm.shipment_types.set(types),
                Err(e) => log::warn!("shipment types failed to load: {e}"),
            }
        });
    }

    pub fn dispatch(&self, event: PageEvent) {
        let rules = self.rules.get_value();
        let (next, intents) = self.page.get_untracked().step(event, &rules);
        self.page.set(next);
        for intent in intents {
            self.run(intent);
        }
    }

    fn show_url(&self) -> String {
        let id = path_segment(&self.movement_id.get_value());
        app_url(
            &self.config.get_value(),
            &format!("/stockMovement/show/{id}"),
        )
    }

    fn run(&self, intent: PageIntent) {
        let vm = *self;
        match intent {
            PageIntent::Persist { values, then } => {
                if self.rules.get_value().show_only {
                    self.dispatch(PageEvent::Persisted(values));
                    return;
                }
                let id = self.movement_id.get_value();
                let config = self.config.get_value();
                let busy = self.busy.get_value();
                log::debug!("saving stock movement {id} step {} ({then:?})", self.page_number);
                spawn_local(async move {
                    let _guard = busy.acquire();
                    match persist_step(&config, &id, &values).await {
                        Ok(record) => vm.dispatch(PageEvent::Persisted(record)),
                        Err(e) => {
                            log::warn!("stock movement {id} failed to save: {e}");
                            vm.dispatch(PageEvent::PersistFailed);
                        }
                    }
                });
            }
            PageIntent::ShowValues(values) => {
                let page = self.rules.get_value().page;
                self.form.set(step_values(page, &values));
            }
            PageIntent::Advance(values) => {
                if self.is_last {
                    navigate_to(&self.show_url());
                } else {
                    self.wizard.dispatch(WizardEvent::Advance {
                        from_page: self.page_number,
                        values,
                    });
                }
            }
            PageIntent::Retreat(values) => self.wizard.dispatch(WizardEvent::Retreat {
                from_page: self.page_number,
                values,
            }),
            PageIntent::ExitTo(_) => navigate_to(&self.show_url()),
            PageIntent::Fetch { .. } => {
                log::debug!("wizard steps are handed their values; nothing to fetch")
            }
        }
    }

    fn render_form(&self, read_only: bool) -> AnyView {
        let binding = self.binding();
        let ctx = StepContext { read_only };
        match self.rules.get_value().page {
            WizardPage::Edit => render_fields(&EDIT_FIELDS, ctx, binding),
            WizardPage::Pick => render_fields(&PICK_FIELDS, ctx, binding),
            WizardPage::Pack => render_fields(&PACK_FIELDS, ctx, binding),
            WizardPage::Send => {
                let vm = *self;
                view! {
                    {move || {
                        let ctx = ShipmentContext {
                            issued: read_only,
                            shipment_types: vm.shipment_types.get(),
                        };
                        render_fields(&SHIPMENT_FIELDS, ctx, binding)
                    }}
                }
                .into_any()
            }
        }
    }
}

#[component]
pub fn WizardStep(
    vm: StepViewModel,
    read_only: bool,
    locale: Option<String>,
) -> impl IntoView {
    let page = vm.rules.get_value().page;
    if page == WizardPage::Send {
        vm.load_shipment_types(locale);
    }
    let can_submit = Memo::new(move |_| vm.can_submit());
    let on_choice = Callback::new(move |choice| vm.dispatch(PageEvent::Confirm(choice)));
    let next_label = if vm.is_last { "Send shipment" } else { "Next" };

    view! {
        <div class="wizard-step">
            {move || match vm.page.get().phase {
                PagePhase::ConfirmPending(target) => view! {
                    <ConfirmDialog target=target on_choice=on_choice />
                }.into_any(),
                _ => ().into_any(),
            }}

            <div class="classic-form">
                <span class="buttons-container classic-form-buttons">
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
                </span>
                {vm.render_form(read_only)}
            </div>

            <div class="submit-buttons">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=vm.page_number == 1
                    on_click=move |_| vm.submit_with(PageEvent::GoBack)
                >
                    "Previous"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=move |_| vm.submit_with(PageEvent::SubmitAndAdvance)
                >
                    {next_label}
                </Button>
            </div>
        </div>
    }
}
