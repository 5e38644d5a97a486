use super::cards::{GraphCard, NumberCard};
use crate::dashboards::d400_indicator_board::api::{
    fetch_config, fetch_locations, fetch_number_card, save_config,
};
use crate::dashboards::d400_indicator_board::board::{
    Card, CardBoard, CardGroup, DropTarget, ViewportArchiveZone,
};
use crate::dashboards::d400_indicator_board::config_select::{page_filters, resolve_config_key};
use crate::shared::app_config::{use_app_config, AppConfig};
use crate::shared::busy::{use_busy, BusyService};
use crate::shared::session::use_session;
use crate::shared::storage;
use contracts::dashboards::d400_indicator_board::{FillRateDestination, NumberCardData};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

fn archive_zone() -> ViewportArchiveZone {
    let inner_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    ViewportArchiveZone { inner_height }
}

#[derive(Clone, Copy)]
struct BoardDriver {
    board: RwSignal<Option<CardBoard>>,
    number_data: RwSignal<HashMap<String, NumberCardData>>,
    locations: RwSignal<Vec<FillRateDestination>>,
    dragging: RwSignal<Option<(CardGroup, usize)>>,
    load_token: RwSignal<u64>,
    config: StoredValue<AppConfig>,
    busy: StoredValue<BusyService>,
    location_id: StoredValue<String>,
    user_id: StoredValue<String>,
}

impl BoardDriver {
    fn active_key(&self) -> Option<String> {
        self.board
            .with_untracked(|b| b.as_ref().map(|b| b.active.clone()))
    }

    /// Fetch configuration `key` and the data of its numeric cards
    fn load(&self, key: String) {
        storage::save_dashboard_key(&key);
        let token = self.load_token.get_untracked() + 1;
        self.load_token.set(token);

        let driver = *self;
        let config = self.config.get_value();
        let busy = self.busy.get_value();
        spawn_local(async move {
            let _guard = busy.acquire();
            match fetch_config(&config).await {
                Ok(dashboard_config) => {
                    if driver.load_token.get_untracked() != token {
                        log::debug!("discarding stale dashboard config (token {token})");
                        return;
                    }
                    let board = CardBoard::from_config(dashboard_config, &key);
                    let cards = board.layout.number_cards.clone();
                    driver.number_data.set(HashMap::new());
                    driver.board.set(Some(board));
                    for card in cards {
                        driver.load_number_card(card);
                    }
                }
                Err(e) => log::warn!("dashboard config {key} failed to load: {e}"),
            }
        });
    }

    fn load_locations(&self) {
        let locations = self.locations;
        let config = self.config.get_value();
        spawn_local(async move {
            match fetch_locations(&config).await {
                Ok(list) => locations.set(list),
                Err(e) => log::warn!("dashboard locations failed to load: {e}"),
            }
        });
    }

    fn load_number_card(&self, card: Card) {
        let Some(endpoint) = card.endpoint.clone() else {
            return;
        };
        let number_data = self.number_data;
        let location_id = self.location_id.get_value();
        let user_id = self.user_id.get_value();
        spawn_local(async move {
            match fetch_number_card(&endpoint, &location_id, &user_id).await {
                Ok(data) => number_data.update(|map| {
                    map.insert(card.widget_id.clone(), data);
                }),
                Err(e) => log::warn!("widget {} failed to load: {e}", card.widget_id),
            }
        });
    }

    fn save(&self) {
        let Some(payload) = self.board.with_untracked(|b| b.as_ref().map(CardBoard::save_payload))
        else {
            return;
        };
        let driver = *self;
        let config = self.config.get_value();
        let busy = self.busy.get_value();
        spawn_local(async move {
            let _guard = busy.acquire();
            match save_config(&config, &payload).await {
                Ok(()) => {
                    driver.board.update(|b| {
                        if let Some(b) = b {
                            b.mark_saved();
                        }
                    });
                    if let Some(key) = driver.active_key() {
                        driver.load(key);
                    }
                }
                Err(e) => log::warn!("dashboard config failed to save: {e}"),
            }
        });
    }

    fn drop_card(&self, new_index: usize, target: DropTarget) {
        let Some((group, old_index)) = self.dragging.get_untracked() else {
            return;
        };
        self.dragging.set(None);
        self.board.update(|b| {
            if let Some(b) = b {
                b.reorder(group, old_index, new_index, target);
            }
        });
    }

    fn add(&self, widget_id: String) {
        let mut added = None;
        self.board.update(|b| {
            if let Some(b) = b {
                if b.add_from_archive(&widget_id) == Some(CardGroup::Number) {
                    added = b.layout.number_cards.last().cloned();
                }
            }
        });
        if let Some(card) = added {
            self.load_number_card(card);
        }
    }
}

#[component]
fn SortableCards(driver: BoardDriver, group: CardGroup) -> impl IntoView {
    let cards = Memo::new(move |_| {
        driver.board.with(|b| {
            b.as_ref()
                .map(|b| b.layout.group(group).to_vec())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="card-component">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| {
                        let body = match group {
                            CardGroup::Number => {
                                let widget_id = card.widget_id.clone();
                                let data = Signal::derive(move || {
                                    driver.number_data.with(|m| m.get(&widget_id).cloned())
                                });
                                view! { <NumberCard card=card data=data /> }.into_any()
                            }
                            CardGroup::Graph => view! { <GraphCard card=card /> }.into_any(),
                        };
                        view! {
                            <div
                                class="sortable-card"
                                draggable="true"
                                on:dragstart=move |ev: web_sys::DragEvent| {
                                    if let Some(transfer) = ev.data_transfer() {
                                        let _ = transfer.set_data("text/plain", &index.to_string());
                                    }
                                    driver.dragging.set(Some((group, index)));
                                }
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    if driver.dragging.with_untracked(|d| matches!(d, Some((g, _)) if *g == group)) {
                                        ev.prevent_default();
                                    }
                                }
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    let target = DropTarget::at(&archive_zone(), ev.client_y() as f64);
                                    driver.drop_card(index, target);
                                }
                                on:dragend=move |ev: web_sys::DragEvent| {
                                    // Dropped outside a card: only the archive band counts
                                    if let Some((_, old_index)) = driver.dragging.get_untracked() {
                                        let target = DropTarget::at(&archive_zone(), ev.client_y() as f64);
                                        driver.drop_card(old_index, target);
                                    }
                                }
                            >
                                {body}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ConfigurationsList(driver: BoardDriver) -> impl IntoView {
    let show_nav = RwSignal::new(
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .is_some_and(|w| w > 1115.0),
    );
    let entries = Memo::new(move |_| {
        driver.board.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.config
                        .dashboards
                        .iter()
                        .map(|(key, d)| (key.clone(), d.name.clone(), *key == b.active))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let can_save = Memo::new(move |_| {
        driver
            .board
            .with(|b| b.as_ref().is_some_and(|b| b.is_personal() && b.modified))
    });

    view! {
        <div class=move || if show_nav.get() { "configs-left-nav" } else { "configs-left-nav hidden" }>
            <button class="toggle-nav" on:click=move |_| show_nav.update(|v| *v = !*v)>
                {move || if show_nav.get() { "‹" } else { "›" }}
            </button>
            <ul class="configs-list">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|(key, name, active)| {
                            let class = if active { "configs-list-item active" } else { "configs-list-item" };
                            view! {
                                <li class=class>
                                    <button on:click=move |_| driver.load(key.clone())>{name}</button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || can_save.get()>
                <div class="update-section">
                    <div class="division-line" />
                    <span>"The dashboard layout has been edited"</span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| driver.save()>
                        "Save configuration"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FilterBar(driver: BoardDriver) -> impl IntoView {
    let filters = Memo::new(move |_| {
        driver.board.with(|b| {
            b.as_ref()
                .map(|b| page_filters(&b.config, &b.active))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="dashboard-filter">
            {move || {
                filters
                    .get()
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <label class="dashboard-filter-item" data-endpoint=filter.endpoint.unwrap_or_default()>
                                {filter.name}
                                <select>
                                    {move || {
                                        driver
                                            .locations
                                            .get()
                                            .into_iter()
                                            .map(|l| {
                                                let name = l.name.clone().unwrap_or_else(|| l.id.clone());
                                                view! { <option value=l.id>{name}</option> }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn UnarchivePopout(driver: BoardDriver) -> impl IntoView {
    let archived = Memo::new(move |_| {
        driver.board.with(|b| {
            b.as_ref()
                .map(|b| {
                    b.archived_widgets()
                        .into_iter()
                        .map(|(id, w)| (id.to_string(), w.title.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let open = Memo::new(move |_| driver.board.with(|b| b.as_ref().is_some_and(|b| b.show_popout)));
    let toggle = move |_| {
        driver.board.update(|b| {
            if let Some(b) = b {
                b.toggle_popout();
            }
        })
    };

    view! {
        <div class="unarchive-indicators">
            <Button appearance=ButtonAppearance::Subtle on_click=toggle>
                {move || format!("Archived indicators ({})", archived.get().len())}
            </Button>
            <Show when=move || open.get()>
                <ul class="unarchive-popout">
                    {move || {
                        archived
                            .get()
                            .into_iter()
                            .map(|(id, title)| {
                                view! {
                                    <li>
                                        <span>{title}</span>
                                        <button on:click=move |_| driver.add(id.clone())>"+"</button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

/// Indicator board: two sortable card groups and the configurations list
#[component]
pub fn IndicatorBoard(config_id: Option<String>) -> impl IntoView {
    let session = use_session().info.get_untracked();
    let driver = BoardDriver {
        board: RwSignal::new(None),
        number_data: RwSignal::new(HashMap::new()),
        locations: RwSignal::new(Vec::new()),
        dragging: RwSignal::new(None),
        load_token: RwSignal::new(0),
        config: StoredValue::new(use_app_config()),
        busy: StoredValue::new(use_busy()),
        location_id: StoredValue::new(session.current_location.id.clone()),
        user_id: StoredValue::new(session.user_id.clone()),
    };

    driver.load_locations();
    let stored = storage::get_dashboard_key();
    let key = resolve_config_key(
        config_id.as_deref(),
        driver.active_key().as_deref(),
        stored.as_deref(),
    );
    if session.current_location.id.is_empty() {
        log::debug!("no current location; dashboard {key} not loaded");
    } else {
        driver.load(key);
    }

    view! {
        <div class="dashboard-container">
            <ConfigurationsList driver=driver />
            <div class="filter-and-cards-container">
                <FilterBar driver=driver />
                <div class="cards-container">
                    <SortableCards driver=driver group=CardGroup::Number />
                    <SortableCards driver=driver group=CardGroup::Graph />
                    <div
                        class=move || {
                            if driver.dragging.get().is_some() { "archive-div" } else { "archive-div hide-archive" }
                        }
                        on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                        on:drop=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            if let Some((_, old_index)) = driver.dragging.get_untracked() {
                                driver.drop_card(old_index, DropTarget::Archive);
                            }
                        }
                    >
                        <span>"Archive indicator"</span>
                    </div>
                    <UnarchivePopout driver=driver />
                </div>
            </div>
        </div>
    }
}
