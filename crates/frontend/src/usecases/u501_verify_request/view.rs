use super::pages::StepRules;
use super::state::{initialize, step_labels, WizardEvent, WizardIntent, WizardPhase, WizardState};
use super::step::{StepViewModel, WizardStep};
use super::title::{additional_title, breadcrumbs, derive_title, show_only, BreadcrumbsConfig};
use crate::domain::a001_stock_movement::api::fetch_stock_movement;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::app_config::{use_app_config, AppConfig};
use crate::shared::busy::{use_busy, BusyService};
use crate::shared::form::path::text_at;
use crate::shared::session::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};
use thaw::*;

/// Runs wizard intents and feeds results back into the sequencer
#[derive(Clone, Copy)]
pub struct WizardDriver {
    pub state: RwSignal<WizardState>,
    config: StoredValue<AppConfig>,
    busy: StoredValue<BusyService>,
}

impl WizardDriver {
    pub fn start(
        identifier: Option<&str>,
        has_packing_support: bool,
        config: AppConfig,
        busy: BusyService,
    ) -> Self {
        let (state, intents) =
            initialize(identifier, has_packing_support, Value::Object(Map::new()));
        let driver = Self {
            state: RwSignal::new(state),
            config: StoredValue::new(config),
            busy: StoredValue::new(busy),
        };
        for intent in intents {
            driver.run(intent);
        }
        driver
    }

    pub fn dispatch(&self, event: WizardEvent) {
        let (next, intents) = self.state.get_untracked().step(event);
        self.state.set(next);
        for intent in intents {
            self.run(intent);
        }
    }

    fn run(&self, intent: WizardIntent) {
        match intent {
            WizardIntent::FetchMovement { id, token } => {
                let driver = *self;
                let config = self.config.get_value();
                let busy = self.busy.get_value();
                spawn_local(async move {
                    let _guard = busy.acquire();
                    match fetch_stock_movement(&config, &id).await {
                        Ok(record) => driver.dispatch(WizardEvent::Loaded { token, record }),
                        Err(e) => {
                            log::warn!("stock movement {id} failed to load: {e}");
                            driver.dispatch(WizardEvent::LoadFailed { token });
                        }
                    }
                });
            }
        }
    }
}

#[component]
fn WizardHeader(driver: WizardDriver) -> impl IntoView {
    let title = Memo::new(move |_| driver.state.with(|s| derive_title(&s.values)));
    let badge = Memo::new(move |_| driver.state.with(additional_title));

    view! {
        <div class="wizard-header">
            <h5 class="wizard-title">
                {move || {
                    title
                        .get()
                        .into_iter()
                        .map(|segment| {
                            view! {
                                <span style=format!("color: {}", segment.color)>{segment.text}</span>
                                <span>{segment.delimiter}</span>
                            }
                        })
                        .collect_view()
                }}
                {move || badge.get().map(|b| view! { <span class="shipment-status float-right">{b}</span> })}
            </h5>
            <div class="wizard-steps">
                {move || {
                    let (has_packing, current) =
                        driver.state.with(|s| (s.has_packing_support, s.current_page));
                    step_labels(has_packing)
                        .into_iter()
                        .enumerate()
                        .map(|(i, (key, label))| {
                            let class = if i + 1 == current { "step step-active" } else { "step" };
                            view! { <div class=class data-label-key=key>{label}</div> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn StockMovementVerifyRequest(stock_movement_id: Option<String>) -> impl IntoView {
    let config = use_app_config();
    let busy = use_busy();
    let session = use_session().info.get_untracked();
    let location_id = session.current_location.id.clone();
    let minimum_date = session.minimum_expiration_date.clone();
    let locale = session.locale().map(str::to_string);

    let driver = WizardDriver::start(
        stock_movement_id.as_deref(),
        session.current_location.has_packing_support,
        config.clone(),
        busy.clone(),
    );

    if let Some(global) = use_context::<AppGlobalContext>() {
        let crumbs_config = BreadcrumbsConfig::verify_request(&config);
        Effect::new(move |_| {
            let crumbs = driver
                .state
                .with(|s| breadcrumbs(&crumbs_config, &s.values));
            global.breadcrumbs.set(crumbs);
        });
    }

    // Steps are rebuilt only when the page changes, not on every value merge
    let position = Memo::new(move |_| driver.state.with(|s| (s.phase, s.current_page)));

    let render_step = move || {
        let (phase, page_number) = position.get();
        match phase {
            WizardPhase::Loading => view! { <div class="page-loading"><Spinner /></div> }.into_any(),
            WizardPhase::LoadFailed => view! {
                <div class="error">
                    "Failed to load the stock movement. "
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| driver.dispatch(WizardEvent::Reload)
                    >
                        "Retry"
                    </Button>
                </div>
            }
            .into_any(),
            WizardPhase::Ready => {
                let state = driver.state.get_untracked();
                let read_only = show_only(&state.values, &location_id);
                let movement_id = stock_movement_id
                    .clone()
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| text_at(&state.values, "stockMovementId"));
                let vm = StepViewModel::new(
                    StepRules {
                        page: state.current(),
                        show_only: read_only,
                        minimum_date: minimum_date.clone(),
                    },
                    state.values.clone(),
                    movement_id,
                    config.clone(),
                    busy.clone(),
                    driver,
                    page_number,
                    state.is_last_page(),
                );
                view! { <WizardStep vm=vm read_only=read_only locale=locale.clone() /> }.into_any()
            }
        }
    };

    view! {
        <div class="verify-request">
            <WizardHeader driver=driver />
            {render_step}
        </div>
    }
}
