use super::model;
use crate::domain::a003_shipment_type::api::fetch_shipment_types;
use crate::domain::common::shipment::{ShipmentContext, ShipmentRules};
use crate::shared::api_utils::{app_url, navigate_to, path_segment};
use crate::shared::app_config::AppConfig;
use crate::shared::busy::BusyService;
use crate::shared::form::{FieldErrors, FormBinding, SelectOption};
use crate::shared::page::{ExitTarget, PageEvent, PageIntent, PageRules, PageState};
use contracts::domain::a002_stock_transfer::STATUS_COMPLETED;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

/// ViewModel of the "Send outbound return" page
#[derive(Clone, Copy)]
pub struct SendOutboundReturnViewModel {
    pub page: RwSignal<PageState>,
    pub form: RwSignal<Value>,
    pub shipment_types: RwSignal<Vec<SelectOption>>,
    id: StoredValue<String>,
    rules: StoredValue<ShipmentRules>,
    config: StoredValue<AppConfig>,
    busy: StoredValue<BusyService>,
    locale: StoredValue<Option<String>>,
}

impl SendOutboundReturnViewModel {
    pub fn new(
        id: String,
        config: AppConfig,
        busy: BusyService,
        minimum_date: String,
        locale: Option<String>,
    ) -> Self {
        Self {
            page: RwSignal::new(PageState::loading()),
            form: RwSignal::new(Value::Null),
            shipment_types: RwSignal::new(Vec::new()),
            id: StoredValue::new(id),
            rules: StoredValue::new(ShipmentRules {
                minimum_date,
                terminal_status: Some(STATUS_COMPLETED),
            }),
            config: StoredValue::new(config),
            busy: StoredValue::new(busy),
            locale: StoredValue::new(locale),
        }
    }

    pub fn binding(&self) -> FormBinding {
        let vm = *self;
        FormBinding {
            values: self.form,
            errors: Signal::derive(move || vm.validate_current()),
        }
    }

    pub fn validate_current(&self) -> FieldErrors {
        let rules = self.rules.get_value();
        self.form.with(|values| rules.validate(values))
    }

    pub fn is_terminal(&self) -> bool {
        let rules = self.rules.get_value();
        self.form.with(|values| rules.is_terminal(values))
    }

    pub fn can_submit(&self) -> bool {
        let rules = self.rules.get_value();
        let page = self.page.get();
        self.form.with(|values| page.can_submit(&rules, values))
    }

    pub fn field_context(&self) -> ShipmentContext {
        ShipmentContext {
            issued: self.is_terminal(),
            shipment_types: self.shipment_types.get(),
        }
    }

    pub fn load(&self) {
        self.dispatch(PageEvent::Load);
    }

    /// Snapshot the form and feed `make(values)` to the controller
    pub fn submit_with(&self, make: fn(Value) -> PageEvent) {
        self.dispatch(make(self.form.get_untracked()));
    }

    pub fn dispatch(&self, event: PageEvent) {
        let rules = self.rules.get_value();
        let state = self.page.get_untracked();
        let (next, intents) = state.step(event, &rules);
        self.page.set(next);
        for intent in intents {
            self.run(intent);
        }
    }

    fn show_url(&self, target: ExitTarget) -> String {
        let id = path_segment(&self.id.get_value());
        let path = match target {
            ExitTarget::RecordShow => format!("/stockMovement/show/{id}"),
            ExitTarget::TerminalShow => format!("/stockTransfer/show/{id}"),
        };
        app_url(&self.config.get_value(), &path)
    }

    fn run(&self, intent: PageIntent) {
        let vm = *self;
        let id = self.id.get_value();
        let config = self.config.get_value();

        match intent {
            PageIntent::Fetch { token } => {
                let busy = self.busy.get_value();
                let locale = self.locale.get_value();
                spawn_local(async move {
                    let _guard = busy.acquire();
                    match model::fetch_outbound_return(&config, &id).await {
                        Ok(values) => vm.dispatch(PageEvent::Loaded { token, values }),
                        Err(e) => {
                            log::warn!("outbound return {id} failed to load: {e}");
                            vm.dispatch(PageEvent::LoadFailed { token });
                            return;
                        }
                    }
                    match fetch_shipment_types(&config, locale.as_deref()).await {
                        Ok(types) => vm.shipment_types.set(types),
                        Err(e) => log::warn!("shipment types failed to load: {e}"),
                    }
                });
            }
            PageIntent::ShowValues(values) => self.form.set(values),
            PageIntent::Persist { values, then } => {
                let busy = self.busy.get_value();
                log::debug!("saving outbound return {id} ({then:?})");
                spawn_local(async move {
                    let _guard = busy.acquire();
                    match model::save_outbound_return(&config, &id, &values).await {
                        Ok(record) => vm.dispatch(PageEvent::Persisted(record)),
                        Err(e) => {
                            log::warn!("outbound return {id} failed to save: {e}");
                            vm.dispatch(PageEvent::PersistFailed);
                        }
                    }
                });
            }
            PageIntent::Advance(values) => {
                let busy = self.busy.get_value();
                let payload = self.rules.get_value().normalize_for_save(&values);
                let target = self.show_url(ExitTarget::RecordShow);
                spawn_local(async move {
                    let _guard = busy.acquire();
                    match model::send_shipment(&config, &id, &payload).await {
                        Ok(()) => navigate_to(&target),
                        Err(e) => {
                            log::warn!("sending outbound return {id} failed: {e}");
                            vm.dispatch(PageEvent::AdvanceFailed);
                        }
                    }
                });
            }
            PageIntent::Retreat(_) => {
                let went_back = web_sys::window()
                    .and_then(|w| w.history().ok())
                    .map(|h| h.back());
                if !matches!(went_back, Some(Ok(()))) {
                    log::warn!("no history to go back to");
                    self.dispatch(PageEvent::RetreatFailed);
                }
            }
            PageIntent::ExitTo(target) => navigate_to(&self.show_url(target)),
        }
    }
}
